//! Ancestral Hall Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that every other
//! crate of the engine depends on. It holds no game content and no I/O.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
