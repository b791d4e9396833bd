pub mod color;
pub mod error;
pub mod event;
pub mod id;
pub mod token;

// Re-export the main types for convenience
pub use color::ColorValue;
pub use error::{JournalError, LedgerError};
pub use event::LedgerEvent;
pub use id::{AccountId, TokenId};
pub use token::ColorToken;
