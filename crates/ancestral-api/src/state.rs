//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard};

use ancestral_core::clock::Clock;
use ancestral_core::error::DomainError;
use ancestral_narrative::Timings;
use ancestral_session::SessionRegistry;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Every live session. Handlers never hold the lock across an await.
    sessions: Arc<Mutex<SessionRegistry>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Create new application state over a registry whose sessions read
    /// `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, timings: Timings) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(SessionRegistry::new(clock, timings))),
        }
    }

    /// Locks the session registry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a previous holder panicked.
    pub fn sessions(&self) -> Result<MutexGuard<'_, SessionRegistry>, DomainError> {
        self.sessions
            .lock()
            .map_err(|_| DomainError::Infrastructure("session registry lock poisoned".to_owned()))
    }
}
