//! Ancestral Hall — Rules & Resolution.
//!
//! Responsible for deciding what an intent does. Every function here is
//! pure: it reads a [`GameState`](ancestral_world_state::GameState) and
//! returns a [`Resolution`], the ordered list of changes to record plus at
//! most one deferred effect. Nothing is mutated here.

pub mod domain;

pub use domain::completion::resolve_completion;
pub use domain::deferred::resolve_deferred;
pub use domain::interactions::resolve_interaction;
pub use domain::resolution::Resolution;
