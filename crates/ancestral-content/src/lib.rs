//! Ancestral Hall — content vocabulary.
//!
//! Static data only: the scenes and items of the chapter, the hotspot
//! targets each scene owns, and the narrative lines the resolver shows.
//! Nothing in this crate makes a decision.

pub mod catalog;
pub mod hotspots;
pub mod script;

pub use catalog::{Item, Scene};
pub use hotspots::Target;
