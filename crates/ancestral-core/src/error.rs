//! Domain error types.
//!
//! Narrative dead-ends ("the gate is locked") are dialogue, not errors. The
//! variants here are contract violations between the renderer and the
//! engine, or between the engine's own layers.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No session exists with the given identifier.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// The target does not name a hotspot of the current scene.
    #[error("unknown target `{target}` in scene {scene}")]
    UnknownTarget {
        /// The scene that was current when the intent arrived.
        scene: String,
        /// The raw target identifier.
        target: String,
    },

    /// A puzzle input or completion arrived while no view was open.
    #[error("no puzzle view is open")]
    NoActiveView,

    /// A completion named a view other than the active one.
    #[error("puzzle view `{expected}` is not open (active: {actual})")]
    ViewNotOpen {
        /// The view named by the caller.
        expected: String,
        /// The view that is actually open, or `none`.
        actual: String,
    },

    /// A completion was reported before the puzzle's solved-predicate held.
    #[error("puzzle `{0}` is not solved")]
    PuzzleNotSolved(String),

    /// The item to hold up is not in the inventory.
    #[error("item `{0}` is not in the inventory")]
    ItemNotHeld(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error in an adapter (e.g. a poisoned lock).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
