//! Domain layer for the Session context.

pub mod commands;
pub mod registry;
pub mod session;
