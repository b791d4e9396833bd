use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// InterfaceId is a four byte capability identifier, rendered as 0x-prefixed
// hex the way wallet and indexer tooling prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceId([u8; 4]);

impl InterfaceId {
    /// Identifier of the NFT ownership capability (ERC-721, `0x80ac58cd`)
    pub const OWNERSHIP: InterfaceId = InterfaceId([0x80, 0xac, 0x58, 0xcd]);

    /// Identifier of the introspection capability itself (ERC-165,
    /// `0x01ffc9a7`)
    pub const INTROSPECTION: InterfaceId = InterfaceId([0x01, 0xff, 0xc9, 0xa7]);

    /// Create a new InterfaceId from raw bytes
    pub const fn new(bytes: [u8; 4]) -> Self {
        InterfaceId(bytes)
    }

    /// Get the underlying bytes
    pub fn bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// The set of capabilities a registry answers for, fixed at construction.
///
/// Lookups never fail: an identifier the table does not declare simply
/// answers `false`.
#[derive(Debug, Clone)]
pub struct InterfaceTable {
    supported: HashSet<InterfaceId>,
}

impl InterfaceTable {
    /// Create a table declaring the given capabilities
    pub fn new(interfaces: impl IntoIterator<Item = InterfaceId>) -> Self {
        Self {
            supported: interfaces.into_iter().collect(),
        }
    }

    /// The table every color registry declares: ownership plus
    /// introspection
    pub fn standard() -> Self {
        Self::new([InterfaceId::OWNERSHIP, InterfaceId::INTROSPECTION])
    }

    /// Check whether a capability is declared
    pub fn supports(&self, interface_id: InterfaceId) -> bool {
        self.supported.contains(&interface_id)
    }
}
