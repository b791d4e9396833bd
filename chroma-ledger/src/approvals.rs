use chroma_core::{AccountId, TokenId};
use std::collections::{HashMap, HashSet};

/// Index holding per-token approved addresses and per-owner operator sets.
///
/// An approved address is scoped to a single token and displaced by the
/// next grant; an operator grant covers every token its grantor holds, now
/// and later, until revoked. The two delegation families never interact
/// here. How they combine into one authorization answer is the registry's
/// business.
#[derive(Debug, Clone, Default)]
pub struct ApprovalIndex {
    /// The single approved address per token; absent means none
    approved: HashMap<TokenId, AccountId>,

    /// Operator grants keyed by the owner who made them
    operators: HashMap<AccountId, HashSet<AccountId>>,
}

impl ApprovalIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the approved address for a token, if any
    pub fn get_approved(&self, token_id: TokenId) -> Option<AccountId> {
        self.approved.get(&token_id).copied()
    }

    /// Set or clear the approved address for a token.
    ///
    /// `Some` displaces any previous approval; `None` clears it.
    pub fn set_approved(&mut self, token_id: TokenId, spender: Option<AccountId>) {
        match spender {
            Some(account) => {
                self.approved.insert(token_id, account);
            }
            None => {
                self.approved.remove(&token_id);
            }
        }
    }

    /// Grant or revoke an operator's blanket approval for an owner.
    ///
    /// Revoking a grant that was never made is a no-op.
    pub fn set_operator(&mut self, owner: AccountId, operator: AccountId, approved: bool) {
        if approved {
            self.operators.entry(owner).or_default().insert(operator);
            return;
        }

        let emptied = match self.operators.get_mut(&owner) {
            Some(grants) => {
                grants.remove(&operator);
                grants.is_empty()
            }
            None => false,
        };
        if emptied {
            self.operators.remove(&owner);
        }
    }

    /// Check whether an operator holds blanket approval from an owner
    pub fn is_operator(&self, owner: AccountId, operator: AccountId) -> bool {
        self.operators
            .get(&owner)
            .map(|grants| grants.contains(&operator))
            .unwrap_or(false)
    }
}
