use crate::color::ColorValue;
use crate::id::{AccountId, TokenId};
use std::io;
use thiserror::Error;

/// Represents all possible rejections a ledger operation can surface.
///
/// Every failed operation maps to exactly one of these kinds, carries the
/// offending id/color/address, and leaves no partial state behind. The core
/// never retries; retry is a caller-level policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The color is already bound to an existing token
    #[error("color {color} is already registered")]
    DuplicateColor { color: ColorValue },

    /// The token id was never minted
    #[error("token {token_id} does not exist")]
    NonexistentToken { token_id: TokenId },

    /// The `from` argument does not match the token's actual owner
    #[error("account {claimed} does not own token {token_id} (owner is {actual})")]
    OwnerMismatch {
        token_id: TokenId,
        claimed: AccountId,
        actual: AccountId,
    },

    /// The caller is neither the owner, the approved address, nor an
    /// approved operator
    #[error("account {caller} is not authorized to act on token {token_id}")]
    NotAuthorized {
        caller: AccountId,
        token_id: TokenId,
    },

    /// An approval targeted the approving side itself: an operator grant
    /// naming the caller, or a token approval naming the current owner
    #[error("approval for {account} may not target itself")]
    SelfApproval { account: AccountId },

    /// A checked transfer recipient withheld acknowledgment
    #[error("recipient {recipient} did not acknowledge receipt of token {token_id}")]
    UnsafeRecipient {
        recipient: AccountId,
        token_id: TokenId,
    },

    /// The null sentinel was named as a transfer recipient or minting caller
    #[error("the null account cannot receive tokens")]
    NullRecipient,
}

/// Errors raised by event journal transports.
///
/// Journal failures never surface through ledger operations; the registry
/// logs them and the in-memory event stream stays authoritative.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O errors while appending to or reading a journal file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record encoding/decoding errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Anyhow error wrapper for error context
    #[error(transparent)]
    Context(#[from] anyhow::Error),
}

impl From<bincode::Error> for JournalError {
    fn from(err: bincode::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}
