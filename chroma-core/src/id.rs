use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Deref;

// AccountId identifies a participant in the ledger: a minter, owner,
// approved spender, or operator. It is a 20 byte opaque identifier,
// resembling an externally owned account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 20]);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Ord for AccountId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for AccountId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        AccountId::ZERO
    }
}

impl Deref for AccountId {
    type Target = [u8; 20];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AccountId {
    /// The null/no-owner sentinel. It appears as the sender of mint
    /// notifications and may never own, receive, or mint tokens.
    pub const ZERO: AccountId = AccountId([0; 20]);

    pub const fn new(uid: [u8; 20]) -> Self {
        AccountId(uid)
    }

    /// Create an AccountId from raw bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        AccountId(bytes)
    }

    /// Get a reference to the internal bytes
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Check whether this is the null/no-owner sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 20]
    }

    /// Derive a stable AccountId from a byte seed.
    ///
    /// The derivation is a domain-separated SHA-256 digest truncated to 20
    /// bytes, so the same seed always yields the same account. Embedding
    /// environments and tests use this to fabricate caller identities.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut hasher = Sha256::new();

        // Domain separator
        hasher.update(b"CHROMA_Account");
        hasher.update(seed);

        let digest = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[..20]);
        AccountId(bytes)
    }
}

/// TokenId identifies one minted token. Ids are assigned sequentially at
/// mint time starting at zero, never reused, never decremented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct TokenId(u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        TokenId(value)
    }
}

impl TokenId {
    pub const fn new(value: u64) -> Self {
        TokenId(value)
    }

    /// Get the numeric value of this id
    pub const fn value(&self) -> u64 {
        self.0
    }
}
