//! Puzzle machines and the view wrapper that owns them.

pub mod active;
pub mod chairs;
pub mod clock;
pub mod drawer;
pub mod input;
pub mod kind;
pub mod stones;
pub mod tablets;
