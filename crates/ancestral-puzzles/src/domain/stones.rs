//! The loose stones in the courtyard wall.

use ancestral_core::error::DomainError;
use serde::Serialize;

/// Stone heights in wall order. Clicking a stone swaps it with its right
/// neighbour; the last stone swaps with the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StonesPuzzle {
    stones: [u8; 5],
}

impl StonesPuzzle {
    pub const START: [u8; 5] = [3, 1, 4, 2, 5];
    pub const SOLUTION: [u8; 5] = [1, 2, 3, 4, 5];

    #[must_use]
    pub fn new() -> Self {
        Self {
            stones: Self::START,
        }
    }

    /// Swaps the stone at `index` with the next one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `index` is out of range.
    pub fn click(&mut self, index: usize) -> Result<(), DomainError> {
        let len = self.stones.len();
        if index >= len {
            return Err(DomainError::Validation(format!(
                "stone index {index} out of range 0..{len}"
            )));
        }
        self.stones.swap(index, (index + 1) % len);
        Ok(())
    }

    #[must_use]
    pub fn stones(&self) -> [u8; 5] {
        self.stones
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stones == Self::SOLUTION
    }
}

impl Default for StonesPuzzle {
    fn default() -> Self {
        Self::new()
    }
}
