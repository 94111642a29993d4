//! Ancestral Hall — Inventory.
//!
//! Responsible for the set of collected items and the single item the
//! player currently holds up against a hotspot.

pub mod domain;

pub use domain::inventory::Inventory;
pub use domain::selection::Selection;
