use crate::color::ColorValue;
use crate::id::{AccountId, TokenId};
use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of one minted token.
///
/// Live state lives in the ledger indices; `ColorToken` is the assembled
/// record the registry hands to callers and observers. A token is created
/// exactly once by minting, mutated only by transfers (owner changes,
/// approval cleared) and approvals, and never destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Sequential id assigned at mint time
    pub id: TokenId,

    /// The color this token is permanently bound to
    pub color: ColorValue,

    /// The account that currently owns this token
    pub owner: AccountId,

    /// The single account approved to transfer this token, if any
    pub approved: Option<AccountId>,
}

impl ColorToken {
    pub fn new(
        id: TokenId,
        color: ColorValue,
        owner: AccountId,
        approved: Option<AccountId>,
    ) -> Self {
        Self {
            id,
            color,
            owner,
            approved,
        }
    }

    /// Get the token id
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Get the bound color
    pub fn color(&self) -> &ColorValue {
        &self.color
    }

    /// Get the current owner
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Get the approved account, if any
    pub fn approved(&self) -> Option<AccountId> {
        self.approved
    }
}
