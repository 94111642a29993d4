//! Cosmetic drawer front shared by the desk and the altar drawer.

use serde::Serialize;

/// Open/closed state of a drawer front. Purely visual: it never gates a
/// reveal and never counts as progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawerToggle {
    open: bool,
}

impl DrawerToggle {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}
