//! The collected-items set.

use ancestral_content::Item;
use ancestral_core::error::DomainError;
use serde::Serialize;

/// Items the player holds, without duplicates, in the order they were
/// collected.
///
/// Items are never removed except for the two spirit tablets, which are
/// consumed when placed on the altar. `consume` refuses anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the item is held.
    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Adds an item. Returns `false` and leaves the inventory unchanged if
    /// the item is already held.
    pub fn add(&mut self, item: Item) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Checks that `item` may be consumed right now.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the item is not consumable or is
    /// not held.
    pub fn check_consume(&self, item: Item) -> Result<(), DomainError> {
        if !item.is_consumable() {
            return Err(DomainError::Validation(format!(
                "item {item} can never leave the inventory"
            )));
        }
        if !self.contains(item) {
            return Err(DomainError::Validation(format!(
                "item {item} is not in the inventory"
            )));
        }
        Ok(())
    }

    /// Removes a consumable item.
    ///
    /// # Errors
    ///
    /// See [`Inventory::check_consume`].
    pub fn consume(&mut self, item: Item) -> Result<(), DomainError> {
        self.check_consume(item)?;
        self.items.retain(|held| *held != item);
        Ok(())
    }

    /// Held items in collection order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
