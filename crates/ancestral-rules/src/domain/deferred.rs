//! Effects that land after their delay.

use ancestral_content::{Scene, script};
use ancestral_core::error::DomainError;
use ancestral_narrative::DeferredEffect;
use ancestral_world_state::{Flag, GameState};

use super::completion::resolve_completion;
use super::resolution::{Outcome, Resolution};

/// Resolves a deferred effect that has come due.
///
/// # Errors
///
/// Propagates the errors of [`resolve_completion`] for puzzle completions.
pub fn resolve_deferred(state: &GameState, effect: DeferredEffect) -> Result<Resolution, DomainError> {
    match effect {
        DeferredEffect::PuzzleCompletion { view } => resolve_completion(state, view, None),
        DeferredEffect::Blackout => Ok(Outcome::new(state)
            .travel(Scene::Courtyard)
            .raise(Flag::HasSeenBlackout)
            .say(script::BLACKOUT_WAKE)
            .finish()),
        DeferredEffect::Ending => Ok(Outcome::new(state)
            .enter(Scene::Ending)
            .raise(Flag::JumpscareTriggered)
            .finish()),
    }
}
