//! Domain layer for the World State context.

pub mod aggregates;
pub mod events;
pub mod flags;
