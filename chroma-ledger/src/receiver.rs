use chroma_core::{AccountId, TokenId};

/// Receiver hook consulted by checked transfers.
///
/// Binding a receiver to an account marks that account as
/// acknowledgment-aware: `safe_transfer_from` delivers to it only if the
/// hook acknowledges. Accounts without a bound receiver accept every
/// delivery, so plain wallet accounts need no setup.
pub trait TokenReceiver {
    /// Called when a checked transfer would deliver a token to this
    /// receiver's account. The hook runs after all validation and before
    /// any state change, so declining aborts the transfer with nothing
    /// applied.
    ///
    /// # Parameters
    /// * `operator` - The caller that initiated the transfer
    /// * `from` - The owner the token is leaving
    /// * `token_id` - The token being delivered
    ///
    /// # Returns
    /// `true` to acknowledge receipt, `false` to decline delivery
    fn on_token_received(&mut self, operator: AccountId, from: AccountId, token_id: TokenId)
        -> bool;
}

// Closures can serve as receivers directly, which keeps test doubles and
// simple forwarding hooks short.
impl<F> TokenReceiver for F
where
    F: FnMut(AccountId, AccountId, TokenId) -> bool,
{
    fn on_token_received(
        &mut self,
        operator: AccountId,
        from: AccountId,
        token_id: TokenId,
    ) -> bool {
        self(operator, from, token_id)
    }
}
