//! Background driver that fires due deferred effects.

use std::time::Duration;

use ancestral_core::error::DomainError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error};

use crate::state::AppState;

/// Fires every due task across all sessions. Returns how many sessions
/// changed.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
pub fn fire_due(state: &AppState) -> Result<usize, DomainError> {
    let mut sessions = state.sessions()?;
    let fired = sessions.advance_all();
    for (session_id, outcome) in &fired {
        debug!(
            %session_id,
            events = outcome.events.len(),
            scheduled = outcome.scheduled.len(),
            "timer fired deferred effects"
        );
    }
    Ok(fired.len())
}

/// Spawns the driver on the current tokio runtime.
pub fn spawn_timer_driver(state: AppState, tick: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if let Err(err) = fire_due(&state) {
                error!(%err, "timer tick failed");
            }
        }
    })
}
