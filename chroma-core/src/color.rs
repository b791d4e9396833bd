use serde::{Deserialize, Serialize};
use std::fmt;

/// A color value bound to a token at mint time.
///
/// Values are opaque strings compared by literal equality: `"#ffffff"` and
/// `"#FFFFFF"` are distinct colors. The ledger never normalizes or validates
/// the format, so uniqueness is exactly textual uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        ColorValue(value.into())
    }

    /// Get the literal color text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue(value)
    }
}
