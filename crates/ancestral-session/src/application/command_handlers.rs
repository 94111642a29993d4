//! Command handlers for the Session context.
//!
//! Each handler looks up the session named by the command, runs the intent
//! on it, and returns the events it produced. These are the traced entry
//! points of the engine.

use ancestral_core::command::Command;
use ancestral_core::error::DomainError;
use ancestral_narrative::ScheduledTask;
use tracing::{error, info, instrument, warn};

use crate::domain::commands::{
    AdvanceTime, CancelTask, ClosePuzzleView, CompletePuzzle, DismissDialogue, HandleInteraction,
    SelectItem, SubmitPuzzleInput,
};
use crate::domain::registry::SessionRegistry;
use crate::domain::session::CommandOutcome;

/// Handles the `HandleInteraction` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist, or
/// `DomainError::UnknownTarget` if the current scene has no such hotspot.
#[instrument(skip(registry, command), fields(session_id = %command.session_id, target = %command.target))]
pub fn handle_interaction(
    registry: &mut SessionRegistry,
    command: &HandleInteraction,
) -> Result<CommandOutcome, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    let session = registry.get_mut(command.session_id)?;
    session
        .interact(&command.target, command.correlation_id)
        .inspect_err(|err| {
            if matches!(err, DomainError::UnknownTarget { .. }) {
                error!(%err, "interaction with unknown target");
            }
        })
}

/// Handles the `SelectItem` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist, or
/// `DomainError::ItemNotHeld` if the item to hold is not in the inventory.
#[instrument(skip(registry, command), fields(session_id = %command.session_id, item = %command.item))]
pub fn handle_select_item(
    registry: &mut SessionRegistry,
    command: &SelectItem,
) -> Result<CommandOutcome, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    registry
        .get_mut(command.session_id)?
        .select_item(command.item, command.correlation_id)
}

/// Handles the `DismissDialogue` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
#[instrument(skip(registry, command), fields(session_id = %command.session_id))]
pub fn handle_dismiss_dialogue(
    registry: &mut SessionRegistry,
    command: &DismissDialogue,
) -> Result<CommandOutcome, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    registry
        .get_mut(command.session_id)?
        .dismiss_dialogue(command.correlation_id)
}

/// Handles the `CompletePuzzle` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist, or
/// the completion contract errors of
/// [`GameSession::complete_puzzle`](crate::GameSession::complete_puzzle).
#[instrument(skip(registry, command), fields(session_id = %command.session_id, view = %command.view))]
pub fn handle_complete_puzzle(
    registry: &mut SessionRegistry,
    command: &CompletePuzzle,
) -> Result<CommandOutcome, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    registry
        .get_mut(command.session_id)?
        .complete_puzzle(command.view, command.payload, command.correlation_id)
        .inspect_err(|err| warn!(%err, "puzzle completion rejected"))
}

/// Handles the `ClosePuzzleView` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
#[instrument(skip(registry, command), fields(session_id = %command.session_id))]
pub fn handle_close_puzzle_view(
    registry: &mut SessionRegistry,
    command: &ClosePuzzleView,
) -> Result<CommandOutcome, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    registry
        .get_mut(command.session_id)?
        .close_puzzle_view(command.correlation_id)
}

/// Handles the `SubmitPuzzleInput` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist,
/// `DomainError::NoActiveView` if no view is open, or
/// `DomainError::Validation` if the input does not fit the open view.
#[instrument(skip(registry, command), fields(session_id = %command.session_id, input = command.input.name()))]
pub fn handle_submit_puzzle_input(
    registry: &mut SessionRegistry,
    command: &SubmitPuzzleInput,
) -> Result<CommandOutcome, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    registry
        .get_mut(command.session_id)?
        .puzzle_input(command.input, command.correlation_id)
}

/// Handles the `AdvanceTime` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
#[instrument(skip(registry, command), fields(session_id = %command.session_id))]
pub fn handle_advance_time(
    registry: &mut SessionRegistry,
    command: &AdvanceTime,
) -> Result<CommandOutcome, DomainError> {
    let session = registry.get_mut(command.session_id)?;
    Ok(session.advance(command.correlation_id))
}

/// Handles the `CancelTask` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist, or
/// `DomainError::Validation` if no pending task has the token.
#[instrument(skip(registry, command), fields(session_id = %command.session_id, token = %command.token))]
pub fn handle_cancel_task(
    registry: &mut SessionRegistry,
    command: &CancelTask,
) -> Result<ScheduledTask, DomainError> {
    info!(correlation_id = %command.correlation_id(), "handling {} command", command.command_type());
    registry
        .get_mut(command.session_id)?
        .cancel_task(command.token)
}
