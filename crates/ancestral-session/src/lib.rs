//! Ancestral Hall — Session.
//!
//! The engine facade the renderer talks to. A [`GameSession`] owns one game
//! state, its scheduler and an injected clock; intents come in as commands,
//! are resolved by the rules, recorded on the state, and answered with the
//! events they produced. The [`SessionRegistry`] keeps independent sessions
//! side by side.

pub mod application;
pub mod domain;

pub use application::query_handlers::SessionView;
pub use domain::registry::SessionRegistry;
pub use domain::session::{CommandOutcome, GameSession};
