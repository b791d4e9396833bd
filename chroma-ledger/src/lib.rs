pub mod approvals;
pub mod colors;
pub mod interface;
pub mod journal;
pub mod ownership;
pub mod receiver;
pub mod registry;

// Re-export the main types for convenience
pub use approvals::ApprovalIndex;
pub use colors::ColorIndex;
pub use interface::{InterfaceId, InterfaceTable};
pub use journal::{
    EventJournal, FileEventJournal, JournalRecord, JournalReplay, MemoryEventJournal,
};
pub use ownership::OwnershipIndex;
pub use receiver::TokenReceiver;
pub use registry::ColorRegistry;
