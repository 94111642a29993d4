//! Domain layer for the Rules & Resolution context.

pub mod completion;
pub mod deferred;
pub mod interactions;
pub mod resolution;

#[cfg(test)]
pub(crate) mod fixtures;
