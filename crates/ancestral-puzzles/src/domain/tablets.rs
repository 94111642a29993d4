//! The row of spirit tablets on the altar.
//!
//! Two slots start empty. They are back-filled from the placement flags the
//! resolver raises when a recovered tablet is put down; which slot was
//! clicked does not matter, each tablet has its own fixed slot.

use ancestral_core::error::DomainError;
use serde::Serialize;

/// Family name on a tablet.
pub type TabletName = &'static str;

/// Slot and name of the tablet recovered from the clock.
pub const CLOCK_TABLET: (usize, TabletName) = (1, "钱");
/// Slot and name of the tablet recovered from the altar drawer.
pub const DRAWER_TABLET: (usize, TabletName) = (3, "李");

/// What a click on a slot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabletClick {
    /// The slot is empty; the resolver should try to place a tablet.
    PlaceRequested { index: usize },
    /// The slot was swapped with its neighbour.
    Swapped,
    /// A filled slot was clicked while another slot is still empty.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabletsPuzzle {
    slots: [Option<TabletName>; 5],
}

impl TabletsPuzzle {
    pub const START: [Option<TabletName>; 5] = [Some("赵"), None, Some("孙"), None, Some("周")];
    pub const SOLUTION: [TabletName; 5] = ["赵", "钱", "孙", "李", "周"];

    #[must_use]
    pub fn new() -> Self {
        Self { slots: Self::START }
    }

    /// Handles a click on `index`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `index` is out of range.
    pub fn click(&mut self, index: usize) -> Result<TabletClick, DomainError> {
        let len = self.slots.len();
        let Some(slot) = self.slots.get(index) else {
            return Err(DomainError::Validation(format!(
                "tablet slot {index} out of range 0..{len}"
            )));
        };

        if slot.is_none() {
            return Ok(TabletClick::PlaceRequested { index });
        }
        if !self.all_filled() {
            return Ok(TabletClick::Ignored);
        }
        self.slots.swap(index, (index + 1) % len);
        Ok(TabletClick::Swapped)
    }

    /// Back-fills the fixed slot of each placed tablet, if still empty.
    /// Returns `true` if any slot changed.
    pub fn sync_placements(&mut self, clock_placed: bool, drawer_placed: bool) -> bool {
        let mut changed = false;
        for (placed, (index, name)) in [(clock_placed, CLOCK_TABLET), (drawer_placed, DRAWER_TABLET)] {
            if placed && self.slots[index].is_none() {
                self.slots[index] = Some(name);
                changed = true;
            }
        }
        changed
    }

    #[must_use]
    pub fn slots(&self) -> [Option<TabletName>; 5] {
        self.slots
    }

    #[must_use]
    pub fn all_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .zip(Self::SOLUTION)
            .all(|(slot, expected)| *slot == Some(expected))
    }
}

impl Default for TabletsPuzzle {
    fn default() -> Self {
        Self::new()
    }
}
