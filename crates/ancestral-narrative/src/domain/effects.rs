//! Deferred effects and their delays.

use ancestral_puzzles::ViewKind;
use chrono::TimeDelta;
use serde::Serialize;

/// An effect that resolves after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DeferredEffect {
    /// A puzzle's solved-predicate held; run its completion.
    PuzzleCompletion { view: ViewKind },
    /// The stones knock the player out; wake in the courtyard.
    Blackout,
    /// The candles are lit; cut to the ending.
    Ending,
}

impl DeferredEffect {
    /// Blackout and ending are scene transitions.
    #[must_use]
    pub fn is_transition(self) -> bool {
        matches!(self, Self::Blackout | Self::Ending)
    }

    /// How long after submission the effect lands.
    #[must_use]
    pub fn delay(self, timings: &Timings) -> TimeDelta {
        if self.is_transition() {
            timings.transition
        } else {
            timings.debounce
        }
    }
}

/// Delays applied to deferred effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Between a puzzle becoming solved and its completion.
    pub debounce: TimeDelta,
    /// Between a transition trigger and the scene change.
    pub transition: TimeDelta,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            debounce: TimeDelta::milliseconds(500),
            transition: TimeDelta::milliseconds(2000),
        }
    }
}
