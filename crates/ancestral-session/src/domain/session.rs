//! One play session: game state, scheduler and clock.

use std::sync::Arc;

use ancestral_content::Item;
use ancestral_core::clock::Clock;
use ancestral_core::error::DomainError;
use ancestral_narrative::{CancellationToken, DeferredEffect, ScheduledTask, Scheduler, Timings};
use ancestral_puzzles::{InputOutcome, PuzzleInput, PuzzlePayload, ViewKind};
use ancestral_rules::{Resolution, resolve_completion, resolve_deferred, resolve_interaction};
use ancestral_world_state::{GameState, WorldStateEvent, WorldStateEventKind};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What a mutating call produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Events recorded, in order.
    pub events: Vec<WorldStateEvent>,
    /// Deferred effects submitted.
    pub scheduled: Vec<ScheduledTask>,
}

impl CommandOutcome {
    fn absorb(&mut self, other: Self) {
        self.events.extend(other.events);
        self.scheduled.extend(other.scheduled);
    }
}

/// A single-player game session.
///
/// Intents are processed to completion one at a time. Deferred effects wait
/// in the session's scheduler until [`GameSession::advance`] finds them due
/// on the injected clock.
pub struct GameSession {
    /// Session identifier, shared with the game state aggregate.
    pub id: Uuid,
    state: GameState,
    scheduler: Scheduler,
    clock: Arc<dyn Clock>,
    journal: Vec<WorldStateEvent>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("scheduler", &self.scheduler)
            .field("journal", &self.journal.len())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Starts a fresh session in the opening state.
    #[must_use]
    pub fn new(id: Uuid, clock: Arc<dyn Clock>, timings: Timings) -> Self {
        Self {
            id,
            state: GameState::new(id),
            scheduler: Scheduler::new(timings),
            clock,
            journal: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Every event recorded in this session, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[WorldStateEvent] {
        &self.journal
    }

    /// `true` while a blackout or ending transition is pending.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.scheduler.is_pending(|effect| effect.is_transition())
    }

    /// Clicks a hotspot of the current scene.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTarget` if the scene owns no such target.
    pub fn interact(&mut self, target: &str, correlation_id: Uuid) -> Result<CommandOutcome, DomainError> {
        let resolution = resolve_interaction(&self.state, target)?;
        self.commit(resolution, correlation_id)
    }

    /// Holds up `item`, or puts it down if it is already held.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotHeld` if `item` would be held but is not
    /// in the inventory.
    pub fn select_item(&mut self, item: Item, correlation_id: Uuid) -> Result<CommandOutcome, DomainError> {
        let next = self.state.selection().toggled(item);
        if next == Some(item) && !self.state.has(item) {
            return Err(DomainError::ItemNotHeld(item.to_string()));
        }
        let resolution = Resolution {
            changes: vec![WorldStateEventKind::ItemSelected { item: next }],
            deferred: None,
        };
        self.commit(resolution, correlation_id)
    }

    /// Clears the dialogue line, if any.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if recording the change fails.
    pub fn dismiss_dialogue(&mut self, correlation_id: Uuid) -> Result<CommandOutcome, DomainError> {
        let mut resolution = Resolution::none();
        if self.state.dialogue().is_some() {
            resolution.changes.push(WorldStateEventKind::DialogueCleared);
        }
        self.commit(resolution, correlation_id)
    }

    /// Reports that the open view completed.
    ///
    /// The named view must be the active one. Debounced puzzles must also
    /// be locally solved; accepting their completion cancels the pending
    /// debounce task and latches the machine so it cannot fire again.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoActiveView` or `DomainError::ViewNotOpen` if
    /// `view` is not open, `DomainError::PuzzleNotSolved` if a debounced
    /// puzzle is not solved, or `DomainError::Validation` if the view has no
    /// completion or rejects the payload.
    pub fn complete_puzzle(
        &mut self,
        view: ViewKind,
        payload: Option<PuzzlePayload>,
        correlation_id: Uuid,
    ) -> Result<CommandOutcome, DomainError> {
        let active = self.state.active_view().ok_or(DomainError::NoActiveView)?;
        if active.kind() != view {
            return Err(DomainError::ViewNotOpen {
                expected: view.to_string(),
                actual: active.kind().to_string(),
            });
        }

        if view.is_debounced() && payload.is_none() {
            if !active.is_solved() {
                return Err(DomainError::PuzzleNotSolved(view.to_string()));
            }
            let completion = DeferredEffect::PuzzleCompletion { view };
            for task in self.scheduler.cancel_where(|effect| *effect == completion) {
                debug!(session_id = %self.id, token = %task.token, "superseded pending completion");
            }
            self.state.disarm_active_view();
        }

        let resolution = resolve_completion(&self.state, view, payload)?;
        self.commit(resolution, correlation_id)
    }

    /// Closes the open view without any other effect.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if recording the change fails.
    pub fn close_puzzle_view(&mut self, correlation_id: Uuid) -> Result<CommandOutcome, DomainError> {
        let mut resolution = Resolution::none();
        if self.state.active_view().is_some() {
            resolution.changes.push(WorldStateEventKind::ViewClosed);
        }
        self.commit(resolution, correlation_id)
    }

    /// Feeds a click to the open view. Clicks that ask for completion
    /// (opening the box, taking a reveal, an empty tablet slot) are resolved
    /// right away; a puzzle that becomes solved schedules its completion.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoActiveView` if no view is open, or
    /// `DomainError::Validation` if the input does not fit the open view.
    pub fn puzzle_input(&mut self, input: PuzzleInput, correlation_id: Uuid) -> Result<CommandOutcome, DomainError> {
        let resolution = match self.state.apply_puzzle_input(input)? {
            InputOutcome::CompletionRequested(payload) => {
                let view = self
                    .state
                    .active_view_kind()
                    .ok_or(DomainError::NoActiveView)?;
                resolve_completion(&self.state, view, payload)?
            }
            InputOutcome::Updated | InputOutcome::Ignored => Resolution::none(),
        };
        self.commit(resolution, correlation_id)
    }

    /// Fires every deferred effect due on the clock, earliest first.
    ///
    /// A task whose resolution fails is dropped with a warning; the rest
    /// still fire.
    pub fn advance(&mut self, correlation_id: Uuid) -> CommandOutcome {
        let now = self.clock.now();
        let mut outcome = CommandOutcome::default();

        while let Some(task) = self.scheduler.pop_due(now) {
            info!(session_id = %self.id, token = %task.token, effect = ?task.effect, "firing deferred effect");
            let fired = resolve_deferred(&self.state, task.effect)
                .and_then(|resolution| self.commit(resolution, correlation_id));
            match fired {
                Ok(fired) => outcome.absorb(fired),
                Err(error) => {
                    warn!(session_id = %self.id, token = %task.token, %error, "deferred effect rejected");
                }
            }
        }
        outcome
    }

    /// Cancels a pending deferred effect.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no pending task has `token`.
    pub fn cancel_task(&mut self, token: CancellationToken) -> Result<ScheduledTask, DomainError> {
        self.scheduler
            .cancel(token)
            .ok_or_else(|| DomainError::Validation(format!("no pending task with token {token}")))
    }

    /// Records a resolution as one unit, submits its deferred effect unless
    /// the same effect is already pending, and schedules the completion of
    /// any puzzle that became solved.
    fn commit(&mut self, resolution: Resolution, correlation_id: Uuid) -> Result<CommandOutcome, DomainError> {
        let now = self.clock.now();
        let scene_before = self.state.scene();

        let events = self
            .state
            .record_all(resolution.changes, correlation_id, self.clock.as_ref())?;
        self.journal.extend(events.iter().cloned());

        if self.state.scene() != scene_before {
            info!(
                session_id = %self.id,
                from = %scene_before,
                to = %self.state.scene(),
                "scene changed"
            );
        }

        let mut scheduled = Vec::new();
        if let Some(effect) = resolution.deferred {
            if self.scheduler.is_pending(|pending| *pending == effect) {
                debug!(session_id = %self.id, ?effect, "effect already pending");
            } else {
                scheduled.push(self.scheduler.schedule(effect, now));
            }
        }
        if let Some(view) = self.state.poll_puzzle_completion() {
            info!(session_id = %self.id, %view, "puzzle solved, completion pending");
            scheduled.push(
                self.scheduler
                    .schedule(DeferredEffect::PuzzleCompletion { view }, now),
            );
        }

        Ok(CommandOutcome { events, scheduled })
    }
}
