//! Route modules and the shared command response.

pub mod health;
pub mod play;
pub mod puzzles;
pub mod sessions;

use ancestral_core::error::DomainError;
use ancestral_core::event::DomainEvent;
use ancestral_narrative::ScheduledTask;
use ancestral_session::application::command_handlers;
use ancestral_session::application::query_handlers::get_session_by_id;
use ancestral_session::domain::commands::AdvanceTime;
use ancestral_session::{CommandOutcome, SessionRegistry, SessionView};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body returned after a command is successfully handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// IDs of the domain events recorded while handling the request.
    pub event_ids: Vec<Uuid>,
    /// Deferred effects submitted while handling the request.
    pub scheduled: Vec<ScheduledTask>,
    /// The session after the command.
    pub state: SessionView,
}

/// Fires whatever came due on the session, runs `act` and answers with the
/// combined outcome and the resulting snapshot.
///
/// The registry lock is held for the whole call, so one session sees one
/// intent at a time.
pub(crate) fn dispatch<F>(
    state: &AppState,
    session_id: Uuid,
    act: F,
) -> Result<Json<CommandResponse>, ApiError>
where
    F: FnOnce(&mut SessionRegistry) -> Result<CommandOutcome, DomainError>,
{
    let mut sessions = state.sessions()?;
    let mut events = catch_up(&mut sessions, session_id)?.events;
    let outcome = act(&mut *sessions)?;
    events.extend(outcome.events);

    Ok(Json(CommandResponse {
        event_ids: events.iter().map(|event| event.metadata().event_id).collect(),
        scheduled: outcome.scheduled,
        state: get_session_by_id(&sessions, session_id)?,
    }))
}

/// Fires the session's due tasks before the request is served.
pub(crate) fn catch_up(
    sessions: &mut SessionRegistry,
    session_id: Uuid,
) -> Result<CommandOutcome, DomainError> {
    command_handlers::handle_advance_time(
        sessions,
        &AdvanceTime {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
    )
}
