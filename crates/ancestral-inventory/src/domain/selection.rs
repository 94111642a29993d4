//! The item currently held up by the player.

use ancestral_content::Item;

/// At most one selected item. Selection is independent of inventory
/// membership; it only changes through an explicit toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<Item>);

impl Selection {
    /// The selection that results from toggling `item`: selecting the held
    /// item again deselects it, any other item replaces it.
    #[must_use]
    pub fn toggled(self, item: Item) -> Option<Item> {
        if self.0 == Some(item) {
            None
        } else {
            Some(item)
        }
    }

    /// Replaces the selection.
    pub fn set(&mut self, item: Option<Item>) {
        self.0 = item;
    }

    #[must_use]
    pub fn current(self) -> Option<Item> {
        self.0
    }
}
