use chroma_core::{AccountId, LedgerError, TokenId};
use std::collections::HashMap;

/// Index mapping tokens to owners and owners to balance counts.
///
/// Every tracked token has exactly one owner. The balance counts stay in
/// lockstep with the owner map because all writes go through `set_owner`.
#[derive(Debug, Clone, Default)]
pub struct OwnershipIndex {
    /// Owner of each tracked token
    owners: HashMap<TokenId, AccountId>,

    /// Number of tokens held per account; absent means zero
    balances: HashMap<AccountId, u64>,
}

impl OwnershipIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the owner of a token
    ///
    /// # Parameters
    /// * `token_id` - The token to look up
    ///
    /// # Returns
    /// The owning account, or `NonexistentToken` if the id was never minted
    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId, LedgerError> {
        self.owners
            .get(&token_id)
            .copied()
            .ok_or(LedgerError::NonexistentToken { token_id })
    }

    /// Get the number of tokens an account holds.
    ///
    /// Never fails; an account the index has not seen holds zero.
    pub fn balance_of(&self, owner: AccountId) -> u64 {
        self.balances.get(&owner).copied().unwrap_or(0)
    }

    /// Check whether a token id is tracked
    pub fn contains(&self, token_id: TokenId) -> bool {
        self.owners.contains_key(&token_id)
    }

    /// Assign a token to an owner, moving the balance counts with it.
    ///
    /// Handles first assignment (minting) and reassignment (transfer)
    /// alike. Authorization is the caller's responsibility.
    pub fn set_owner(&mut self, token_id: TokenId, new_owner: AccountId) {
        if let Some(prior) = self.owners.insert(token_id, new_owner) {
            self.decrement(prior);
        }
        *self.balances.entry(new_owner).or_insert(0) += 1;
    }

    /// Iterate over accounts with a nonzero balance
    pub fn balances(&self) -> impl Iterator<Item = (AccountId, u64)> + '_ {
        self.balances.iter().map(|(owner, count)| (*owner, *count))
    }

    /// Number of tokens tracked
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Check whether the index tracks no tokens yet
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    fn decrement(&mut self, owner: AccountId) {
        match self.balances.get(&owner).copied() {
            Some(count) if count > 1 => {
                self.balances.insert(owner, count - 1);
            }
            Some(_) => {
                self.balances.remove(&owner);
            }
            None => {}
        }
    }
}
