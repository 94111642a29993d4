//! Puzzle overlay routes.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use ancestral_puzzles::{PuzzleInput, PuzzlePayload, ViewKind};
use ancestral_session::application::command_handlers;
use ancestral_session::domain::commands;

use super::{CommandResponse, dispatch};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /{session_id}/puzzle/complete.
#[derive(Debug, Deserialize)]
pub struct CompletePuzzleRequest {
    /// The view reporting completion.
    pub view: ViewKind,
    #[serde(default)]
    pub payload: Option<PuzzlePayload>,
}

/// POST /{session_id}/puzzle/input
#[instrument(skip(state, input), fields(input = input.name()))]
async fn submit_input(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<PuzzleInput>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::SubmitPuzzleInput {
        correlation_id: Uuid::new_v4(),
        session_id,
        input,
    };
    dispatch(&state, session_id, |sessions| {
        command_handlers::handle_submit_puzzle_input(sessions, &command)
    })
}

/// POST /{session_id}/puzzle/complete
#[instrument(skip(state, request), fields(view = %request.view))]
async fn complete(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CompletePuzzleRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::CompletePuzzle {
        correlation_id: Uuid::new_v4(),
        session_id,
        view: request.view,
        payload: request.payload,
    };
    dispatch(&state, session_id, |sessions| {
        command_handlers::handle_complete_puzzle(sessions, &command)
    })
}

/// POST /{session_id}/puzzle/close
#[instrument(skip(state))]
async fn close(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::ClosePuzzleView {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    dispatch(&state, session_id, |sessions| {
        command_handlers::handle_close_puzzle_view(sessions, &command)
    })
}

/// Returns the router for puzzle overlays.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{session_id}/puzzle/input", post(submit_input))
        .route("/{session_id}/puzzle/complete", post(complete))
        .route("/{session_id}/puzzle/close", post(close))
}
