//! Domain layer for the Narrative timing context.

pub mod effects;
pub mod scheduler;
