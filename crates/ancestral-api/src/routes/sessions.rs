//! Session lifecycle routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::{info, instrument};
use uuid::Uuid;

use ancestral_narrative::{CancellationToken, ScheduledTask};
use ancestral_session::SessionView;
use ancestral_session::application::command_handlers;
use ancestral_session::application::query_handlers::{
    JournalEntry, get_session_by_id, get_session_journal,
};
use ancestral_session::domain::commands;

use super::{CommandResponse, catch_up};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /
#[instrument(skip(state))]
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let mut sessions = state.sessions()?;
    let view = sessions.create().snapshot();
    info!(session_id = %view.session_id, "session created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /{session_id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions()?;
    catch_up(&mut sessions, session_id)?;
    Ok(Json(get_session_by_id(&sessions, session_id)?))
}

/// GET /{session_id}/events
#[instrument(skip(state))]
async fn list_events(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let mut sessions = state.sessions()?;
    catch_up(&mut sessions, session_id)?;
    Ok(Json(get_session_journal(&sessions, session_id)?))
}

/// DELETE /{session_id}
#[instrument(skip(state))]
async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions()?.remove(session_id)?;
    info!("session ended");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /{session_id}/restart
#[instrument(skip(state))]
async fn restart_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let mut sessions = state.sessions()?;
    let view = sessions.restart(session_id)?.snapshot();
    info!("session restarted");
    Ok(Json(CommandResponse {
        event_ids: Vec::new(),
        scheduled: Vec::new(),
        state: view,
    }))
}

/// DELETE /{session_id}/tasks/{token}
#[instrument(skip(state))]
async fn cancel_task(
    State(state): State<AppState>,
    Path((session_id, token)): Path<(Uuid, u64)>,
) -> Result<Json<ScheduledTask>, ApiError> {
    let mut sessions = state.sessions()?;
    catch_up(&mut sessions, session_id)?;
    let command = commands::CancelTask {
        correlation_id: Uuid::new_v4(),
        session_id,
        token: CancellationToken(token),
    };
    let cancelled = command_handlers::handle_cancel_task(&mut sessions, &command)?;
    Ok(Json(cancelled))
}

/// Returns the router for session lifecycle.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{session_id}", get(get_session).delete(end_session))
        .route("/{session_id}/events", get(list_events))
        .route("/{session_id}/restart", post(restart_session))
        .route("/{session_id}/tasks/{token}", delete(cancel_task))
}
