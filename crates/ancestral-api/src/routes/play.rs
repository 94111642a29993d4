//! Scene interaction routes.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use ancestral_content::Item;
use ancestral_session::application::command_handlers;
use ancestral_session::domain::commands;

use super::{CommandResponse, dispatch};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /{session_id}/interact.
#[derive(Debug, Deserialize)]
pub struct InteractRequest {
    /// Hotspot in the current scene, e.g. `secret_door`.
    pub target: String,
}

/// Request body for POST /{session_id}/select.
#[derive(Debug, Deserialize)]
pub struct SelectItemRequest {
    pub item: Item,
}

/// POST /{session_id}/interact
#[instrument(skip(state, request), fields(target = %request.target))]
async fn interact(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<InteractRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::HandleInteraction {
        correlation_id: Uuid::new_v4(),
        session_id,
        target: request.target,
    };
    dispatch(&state, session_id, |sessions| {
        command_handlers::handle_interaction(sessions, &command)
    })
}

/// POST /{session_id}/select
#[instrument(skip(state, request), fields(item = %request.item))]
async fn select_item(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectItemRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::SelectItem {
        correlation_id: Uuid::new_v4(),
        session_id,
        item: request.item,
    };
    dispatch(&state, session_id, |sessions| {
        command_handlers::handle_select_item(sessions, &command)
    })
}

/// POST /{session_id}/dialogue/dismiss
#[instrument(skip(state))]
async fn dismiss_dialogue(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::DismissDialogue {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    dispatch(&state, session_id, |sessions| {
        command_handlers::handle_dismiss_dialogue(sessions, &command)
    })
}

/// Returns the router for scene interactions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{session_id}/interact", post(interact))
        .route("/{session_id}/select", post(select_item))
        .route("/{session_id}/dialogue/dismiss", post(dismiss_dialogue))
}
