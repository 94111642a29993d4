//! The carved armchairs: four symbol plates to match the arrangement drawing.

use ancestral_core::error::DomainError;
use serde::Serialize;

/// Symbol alphabet. Index 0 is the blank plate every chair starts on.
pub const SYMBOLS: [&str; 5] = [" ", "龙", "凤", "虎", "龟"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChairsPuzzle {
    symbols: [u8; 4],
}

impl ChairsPuzzle {
    pub const SOLUTION: [u8; 4] = [1, 2, 3, 4];

    #[must_use]
    pub fn new() -> Self {
        Self { symbols: [0; 4] }
    }

    /// Advances one chair to its next symbol. The blank plate is skipped
    /// once a chair has been turned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `index` is out of range.
    pub fn click(&mut self, index: usize) -> Result<(), DomainError> {
        let len = self.symbols.len();
        let Some(symbol) = self.symbols.get_mut(index) else {
            return Err(DomainError::Validation(format!(
                "chair index {index} out of range 0..{len}"
            )));
        };
        #[allow(clippy::cast_possible_truncation)]
        let alphabet = SYMBOLS.len() as u8;
        *symbol = match (*symbol + 1) % alphabet {
            0 => 1,
            next => next,
        };
        Ok(())
    }

    #[must_use]
    pub fn symbols(&self) -> [u8; 4] {
        self.symbols
    }

    /// Symbol glyphs for display.
    #[must_use]
    pub fn glyphs(&self) -> [&'static str; 4] {
        self.symbols.map(|index| SYMBOLS[usize::from(index)])
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.symbols == Self::SOLUTION
    }
}

impl Default for ChairsPuzzle {
    fn default() -> Self {
        Self::new()
    }
}
