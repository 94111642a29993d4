//! Ancestral Hall — World State.
//!
//! Responsible for the canonical game state of one session: current scene,
//! inventory, progress flags, dialogue, held item and the open puzzle view.
//! Every change is recorded as a [`WorldStateEvent`] and applied through
//! [`GameState::apply`](ancestral_core::aggregate::AggregateRoot::apply).

pub mod application;
pub mod domain;

pub use domain::aggregates::GameState;
pub use domain::events::{WorldStateEvent, WorldStateEventKind};
pub use domain::flags::{Flag, Flags};
