//! Inventory domain types.

pub mod inventory;
pub mod selection;
