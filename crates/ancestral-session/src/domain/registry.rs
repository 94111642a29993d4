//! Independent sessions kept side by side.

use std::collections::HashMap;
use std::sync::Arc;

use ancestral_core::clock::Clock;
use ancestral_core::error::DomainError;
use ancestral_narrative::Timings;
use uuid::Uuid;

use super::session::{CommandOutcome, GameSession};

/// In-memory sessions by id, all sharing one clock and one set of timings.
pub struct SessionRegistry {
    sessions: HashMap<Uuid, GameSession>,
    clock: Arc<dyn Clock>,
    timings: Timings,
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.sessions.len())
            .field("timings", &self.timings)
            .finish_non_exhaustive()
    }
}

impl SessionRegistry {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, timings: Timings) -> Self {
        Self {
            sessions: HashMap::new(),
            clock,
            timings,
        }
    }

    /// Starts a new session in the opening state.
    pub fn create(&mut self) -> &GameSession {
        let id = Uuid::new_v4();
        self.sessions
            .entry(id)
            .or_insert_with(|| GameSession::new(id, Arc::clone(&self.clock), self.timings))
    }

    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has `id`.
    pub fn get(&self, id: Uuid) -> Result<&GameSession, DomainError> {
        self.sessions.get(&id).ok_or(DomainError::SessionNotFound(id))
    }

    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has `id`.
    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut GameSession, DomainError> {
        self.sessions
            .get_mut(&id)
            .ok_or(DomainError::SessionNotFound(id))
    }

    /// Ends a session, dropping its pending tasks.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has `id`.
    pub fn remove(&mut self, id: Uuid) -> Result<GameSession, DomainError> {
        self.sessions
            .remove(&id)
            .ok_or(DomainError::SessionNotFound(id))
    }

    /// Replaces a session with a fresh one under the same id. The old
    /// scheduler goes with the old state, so nothing pending survives.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no session has `id`.
    pub fn restart(&mut self, id: Uuid) -> Result<&GameSession, DomainError> {
        let clock = Arc::clone(&self.clock);
        let timings = self.timings;
        let session = self.get_mut(id)?;
        *session = GameSession::new(id, clock, timings);
        Ok(&*session)
    }

    /// Fires due tasks in every session. Returns the sessions where
    /// something happened.
    pub fn advance_all(&mut self) -> Vec<(Uuid, CommandOutcome)> {
        let now = self.clock.now();
        self.sessions
            .values_mut()
            .filter(|session| session.scheduler().next_due().is_some_and(|due| due <= now))
            .map(|session| (session.id, session.advance(Uuid::new_v4())))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
