//! Query handlers for the Session context.

use ancestral_core::error::DomainError;
use ancestral_core::event::{DomainEvent, EventMetadata};
use ancestral_narrative::ScheduledTask;
use ancestral_world_state::application::query_handlers::{GameStateView, game_state_view};
use ancestral_world_state::{WorldStateEvent, WorldStateEventKind};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::registry::SessionRegistry;
use crate::domain::session::GameSession;

/// Read-only view of a session: the game state plus its pending timers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub state: GameStateView,
    /// Deferred effects waiting for their due time.
    pub pending: Vec<ScheduledTask>,
    /// A blackout or ending transition is under way.
    pub transitioning: bool,
}

/// Builds the view of one session.
#[must_use]
pub fn session_view(session: &GameSession) -> SessionView {
    SessionView {
        session_id: session.id,
        state: game_state_view(session.state()),
        pending: session.scheduler().pending().to_vec(),
        transitioning: session.is_transitioning(),
    }
}

impl GameSession {
    /// The renderer's view of this session.
    #[must_use]
    pub fn snapshot(&self) -> SessionView {
        session_view(self)
    }
}

/// Retrieves a session view by id.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if no session has `session_id`.
pub fn get_session_by_id(
    registry: &SessionRegistry,
    session_id: Uuid,
) -> Result<SessionView, DomainError> {
    registry.get(session_id).map(session_view)
}

/// One recorded event as listed by the session journal.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    pub event_type: &'static str,
    pub metadata: EventMetadata,
    pub change: WorldStateEventKind,
}

impl From<&WorldStateEvent> for JournalEntry {
    fn from(event: &WorldStateEvent) -> Self {
        Self {
            event_type: event.event_type(),
            metadata: event.metadata().clone(),
            change: event.kind.clone(),
        }
    }
}

/// Lists every event a session has recorded, oldest first.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if no session has `session_id`.
pub fn get_session_journal(
    registry: &SessionRegistry,
    session_id: Uuid,
) -> Result<Vec<JournalEntry>, DomainError> {
    let session = registry.get(session_id)?;
    Ok(session.journal().iter().map(JournalEntry::from).collect())
}
