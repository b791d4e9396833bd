//! Chroma color-bound token ledger
//!
//! This crate re-exports all the components of the Chroma system.

pub use chroma_core::*;
pub use chroma_ledger::*;
