use chroma_core::{ColorValue, LedgerError};
use std::collections::HashSet;

/// Index enforcing global uniqueness of color values.
///
/// A color is bound to its token forever: there is no release operation,
/// so membership only grows. Colors are also kept in mint order, which
/// gives every token id a stable position for enumeration.
#[derive(Debug, Clone, Default)]
pub struct ColorIndex {
    /// Every color ever registered, for exact-string membership checks
    used: HashSet<ColorValue>,

    /// Colors in mint order; a color's position equals its token's id
    minted: Vec<ColorValue>,
}

impl ColorIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a color is already bound to a token
    pub fn is_color_used(&self, color: &ColorValue) -> bool {
        self.used.contains(color)
    }

    /// Register a color, rejecting it if an exact match is already bound.
    ///
    /// The membership check and the insertion happen in one call, so a
    /// caller that receives `Ok` is the only caller that ever registered
    /// this color.
    ///
    /// # Parameters
    /// * `color` - The color value to register
    ///
    /// # Returns
    /// Ok(()) on first registration, `DuplicateColor` on any repeat
    pub fn register_color(&mut self, color: ColorValue) -> Result<(), LedgerError> {
        if self.used.contains(&color) {
            return Err(LedgerError::DuplicateColor { color });
        }

        self.used.insert(color.clone());
        self.minted.push(color);
        Ok(())
    }

    /// Get the color at a mint-order position
    pub fn color_at(&self, index: u64) -> Option<&ColorValue> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.minted.get(index))
    }

    /// Number of colors registered
    pub fn len(&self) -> usize {
        self.minted.len()
    }

    /// Check whether the index has no colors yet
    pub fn is_empty(&self) -> bool {
        self.minted.is_empty()
    }
}
