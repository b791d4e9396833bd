use crate::approvals::ApprovalIndex;
use crate::colors::ColorIndex;
use crate::interface::{InterfaceId, InterfaceTable};
use crate::journal::EventJournal;
use crate::ownership::OwnershipIndex;
use crate::receiver::TokenReceiver;
use chroma_core::{AccountId, ColorToken, ColorValue, LedgerError, LedgerEvent, TokenId};
use log::{debug, warn};
use std::collections::HashMap;

/// The registry core: mints, tracks and transfers color-bound tokens.
///
/// A `ColorRegistry` is an explicit caller-owned value, not a global
/// singleton, so independent registries can coexist in one process. All
/// mutating operations take `&mut self`, making the registry the sole
/// writer and every operation strictly sequential. Each operation
/// validates fully before it writes anything; a rejected operation leaves
/// no observable trace.
pub struct ColorRegistry {
    /// Collection name, fixed at construction
    name: String,

    /// Collection symbol, fixed at construction
    symbol: String,

    /// Uniqueness set and mint-ordered sequence of colors
    colors: ColorIndex,

    /// Token ownership and balance counts
    ownership: OwnershipIndex,

    /// Per-token approvals and operator grants
    approvals: ApprovalIndex,

    /// Capabilities answered by `supports_interface`
    interfaces: InterfaceTable,

    /// Receiver hooks for acknowledgment-aware accounts
    receivers: HashMap<AccountId, Box<dyn TokenReceiver>>,

    /// Tokens minted so far; doubles as the next sequential id
    supply: u64,

    /// The notification stream, one entry per applied state change
    events: Vec<LedgerEvent>,

    /// Optional durable sink mirroring the notification stream
    journal: Option<Box<dyn EventJournal>>,
}

impl ColorRegistry {
    /// Create an empty registry with the given collection name and symbol
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            colors: ColorIndex::new(),
            ownership: OwnershipIndex::new(),
            approvals: ApprovalIndex::new(),
            interfaces: InterfaceTable::standard(),
            receivers: HashMap::new(),
            supply: 0,
            events: Vec::new(),
            journal: None,
        }
    }

    /// Get the collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the collection symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of tokens minted so far. Tokens are never destroyed, so this
    /// only grows.
    pub fn total_supply(&self) -> u64 {
        self.supply
    }

    /// Mint a new token bound to `color`, owned by `caller`.
    ///
    /// Token ids are assigned sequentially from zero in mint order. The
    /// color must not exactly match any previously minted color; a
    /// rejected mint leaves no trace of the attempt.
    ///
    /// # Parameters
    /// * `caller` - The account that will own the new token
    /// * `color` - The color to bind, compared by exact string equality
    ///
    /// # Returns
    /// The id of the newly minted token
    pub fn mint(&mut self, caller: AccountId, color: ColorValue) -> Result<TokenId, LedgerError> {
        if caller.is_zero() {
            return Err(LedgerError::NullRecipient);
        }

        let token_id = TokenId::new(self.supply);

        // Sole fallible step; everything after it must succeed
        self.colors.register_color(color)?;

        self.ownership.set_owner(token_id, caller);
        self.supply += 1;

        debug!("minted token {} for {}", token_id, caller);
        self.emit(LedgerEvent::Transfer {
            from: AccountId::ZERO,
            to: caller,
            token_id,
        });

        Ok(token_id)
    }

    /// Get the color a token is bound to
    pub fn color_of(&self, token_id: TokenId) -> Result<&ColorValue, LedgerError> {
        self.colors
            .color_at(token_id.value())
            .ok_or(LedgerError::NonexistentToken { token_id })
    }

    /// Get the owner of a token
    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId, LedgerError> {
        self.ownership.owner_of(token_id)
    }

    /// Get the number of tokens an account holds. Never fails; unknown
    /// accounts hold zero.
    pub fn balance_of(&self, owner: AccountId) -> u64 {
        self.ownership.balance_of(owner)
    }

    /// Assemble a point-in-time snapshot of a token
    pub fn token(&self, token_id: TokenId) -> Result<ColorToken, LedgerError> {
        let owner = self.ownership.owner_of(token_id)?;
        let color = self.color_of(token_id)?.clone();

        Ok(ColorToken::new(
            token_id,
            color,
            owner,
            self.approvals.get_approved(token_id),
        ))
    }

    /// Set or clear the approved address for a token.
    ///
    /// Only the token's owner or one of the owner's operators may call
    /// this; holding the current approval is not enough. Approving the
    /// current owner is rejected. Pass `None` to clear the slot without
    /// naming a replacement.
    ///
    /// # Parameters
    /// * `caller` - The account requesting the change
    /// * `token_id` - The token whose approval slot changes
    /// * `spender` - The account to approve, or `None` to clear
    pub fn approve(
        &mut self,
        caller: AccountId,
        token_id: TokenId,
        spender: Option<AccountId>,
    ) -> Result<(), LedgerError> {
        let owner = self.ownership.owner_of(token_id)?;

        if spender == Some(owner) {
            return Err(LedgerError::SelfApproval { account: owner });
        }
        if caller != owner && !self.approvals.is_operator(owner, caller) {
            return Err(LedgerError::NotAuthorized { caller, token_id });
        }

        self.approvals.set_approved(token_id, spender);
        self.emit(LedgerEvent::Approval {
            owner,
            approved: spender,
            token_id,
        });

        Ok(())
    }

    /// Get the approved address for a token, if any.
    ///
    /// Asking about an unminted token is a rejection, not an empty answer.
    pub fn get_approved(&self, token_id: TokenId) -> Result<Option<AccountId>, LedgerError> {
        self.ownership.owner_of(token_id)?;
        Ok(self.approvals.get_approved(token_id))
    }

    /// Grant or revoke `operator`'s blanket approval over every token the
    /// caller holds, now and later.
    ///
    /// Always emits a notification, even when the flag does not change.
    pub fn set_approval_for_all(
        &mut self,
        caller: AccountId,
        operator: AccountId,
        approved: bool,
    ) -> Result<(), LedgerError> {
        if operator == caller {
            return Err(LedgerError::SelfApproval { account: caller });
        }

        self.approvals.set_operator(caller, operator, approved);
        self.emit(LedgerEvent::ApprovalForAll {
            owner: caller,
            operator,
            approved,
        });

        Ok(())
    }

    /// Check whether `operator` holds blanket approval from `owner`
    pub fn is_approved_for_all(&self, owner: AccountId, operator: AccountId) -> bool {
        self.approvals.is_operator(owner, operator)
    }

    /// Transfer a token from `from` to `to` on `caller`'s authority.
    ///
    /// The caller must be the owner, the token's approved address, or an
    /// operator for the owner. `from` must name the current owner even
    /// when the caller is otherwise authorized. Any approved address on
    /// the token is cleared as part of the same change; the transfer
    /// notification covers both.
    pub fn transfer_from(
        &mut self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        token_id: TokenId,
    ) -> Result<(), LedgerError> {
        self.check_transfer(caller, from, to, token_id)?;
        self.apply_transfer(from, to, token_id);
        Ok(())
    }

    /// Transfer a token, consulting the recipient's receiver hook if one
    /// is bound.
    ///
    /// Behaves exactly like `transfer_from` for recipients without a bound
    /// receiver. When `to` has one, the hook runs after all validation and
    /// before any state change; a declined delivery aborts with
    /// `UnsafeRecipient` and no observable effect.
    pub fn safe_transfer_from(
        &mut self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        token_id: TokenId,
    ) -> Result<(), LedgerError> {
        self.check_transfer(caller, from, to, token_id)?;

        // Last possible failure point; nothing has been written yet
        if let Some(receiver) = self.receivers.get_mut(&to) {
            if !receiver.on_token_received(caller, from, token_id) {
                return Err(LedgerError::UnsafeRecipient {
                    recipient: to,
                    token_id,
                });
            }
        }

        self.apply_transfer(from, to, token_id);
        Ok(())
    }

    /// Check whether the registry declares a capability
    pub fn supports_interface(&self, interface_id: InterfaceId) -> bool {
        self.interfaces.supports(interface_id)
    }

    /// Bind a receiver hook to an account, marking it
    /// acknowledgment-aware for checked transfers. A later bind for the
    /// same account displaces the earlier hook.
    pub fn bind_receiver(&mut self, account: AccountId, receiver: Box<dyn TokenReceiver>) {
        self.receivers.insert(account, receiver);
    }

    /// Attach a durable sink for the notification stream.
    ///
    /// Events emitted before attachment are not replayed; records carry
    /// their stream position, so gaps are detectable downstream.
    pub fn attach_journal(&mut self, journal: Box<dyn EventJournal>) {
        self.journal = Some(journal);
    }

    /// The notification stream so far, in emission order
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Validate a transfer without applying it
    fn check_transfer(
        &self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        token_id: TokenId,
    ) -> Result<(), LedgerError> {
        let owner = self.ownership.owner_of(token_id)?;

        if from != owner {
            return Err(LedgerError::OwnerMismatch {
                token_id,
                claimed: from,
                actual: owner,
            });
        }
        if to.is_zero() {
            return Err(LedgerError::NullRecipient);
        }

        let authorized = caller == owner
            || self.approvals.get_approved(token_id) == Some(caller)
            || self.approvals.is_operator(owner, caller);
        if !authorized {
            return Err(LedgerError::NotAuthorized { caller, token_id });
        }

        Ok(())
    }

    /// Apply a validated transfer: clear the approval slot, move
    /// ownership, notify
    fn apply_transfer(&mut self, from: AccountId, to: AccountId, token_id: TokenId) {
        self.approvals.set_approved(token_id, None);
        self.ownership.set_owner(token_id, to);

        debug!("transferred token {} from {} to {}", token_id, from, to);
        self.emit(LedgerEvent::Transfer { from, to, token_id });
    }

    /// Record one notification, exactly once, after its state change has
    /// been applied. Journal trouble is logged and never fails the
    /// operation; the in-memory stream stays authoritative.
    fn emit(&mut self, event: LedgerEvent) {
        if let Some(journal) = self.journal.as_mut() {
            let seq = self.events.len() as u64;
            if let Err(e) = journal.record(seq, &event) {
                warn!("event journal rejected record {}: {}", seq, e);
            }
        }

        self.events.push(event);
    }
}
