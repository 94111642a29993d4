//! Per-session timer queue.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::effects::{DeferredEffect, Timings};

/// Handle to a submitted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CancellationToken(pub u64);

impl std::fmt::Display for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledTask {
    pub token: CancellationToken,
    pub effect: DeferredEffect,
    pub scheduled_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

/// Pending deferred effects of one session.
///
/// Tasks become due by comparing their due time against the `now` passed to
/// [`Scheduler::pop_due`]; the scheduler never reads a clock itself. Due
/// tasks come out ordered by due time, ties by submission order.
#[derive(Debug, Default)]
pub struct Scheduler {
    timings: Timings,
    next_token: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            next_token: 0,
            pending: Vec::new(),
        }
    }

    /// Submits `effect`, due after its delay from `now`.
    pub fn schedule(&mut self, effect: DeferredEffect, now: DateTime<Utc>) -> ScheduledTask {
        self.next_token += 1;
        let task = ScheduledTask {
            token: CancellationToken(self.next_token),
            effect,
            scheduled_at: now,
            due_at: now + effect.delay(&self.timings),
        };
        debug!(token = %task.token, ?effect, due_at = %task.due_at, "scheduled deferred effect");
        self.pending.push(task);
        task
    }

    /// Cancels a pending task. Returns the task if it was still pending.
    pub fn cancel(&mut self, token: CancellationToken) -> Option<ScheduledTask> {
        let index = self.pending.iter().position(|task| task.token == token)?;
        Some(self.pending.remove(index))
    }

    /// Cancels every pending task whose effect matches.
    pub fn cancel_where(&mut self, predicate: impl Fn(&DeferredEffect) -> bool) -> Vec<ScheduledTask> {
        let (cancelled, kept): (Vec<ScheduledTask>, Vec<ScheduledTask>) = self
            .pending
            .drain(..)
            .partition(|task| predicate(&task.effect));
        self.pending = kept;
        cancelled
    }

    /// Pending tasks in submission order.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTask] {
        &self.pending
    }

    #[must_use]
    pub fn is_pending(&self, predicate: impl Fn(&DeferredEffect) -> bool) -> bool {
        self.pending.iter().any(|task| predicate(&task.effect))
    }

    /// The earliest due time, if any task is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.iter().map(|task| task.due_at).min()
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<ScheduledTask> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_at <= now)
            .min_by_key(|(_, task)| (task.due_at, task.token))
            .map(|(index, _)| index)?;
        Some(self.pending.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use ancestral_puzzles::ViewKind;
    use ancestral_test_support::fixed_now;
    use chrono::TimeDelta;

    use super::*;

    fn completion(view: ViewKind) -> DeferredEffect {
        DeferredEffect::PuzzleCompletion { view }
    }

    fn drain_due(scheduler: &mut Scheduler, now: DateTime<Utc>) -> Vec<ScheduledTask> {
        std::iter::from_fn(|| scheduler.pop_due(now)).collect()
    }

    #[test]
    fn test_schedule_sets_due_time_from_delay() {
        // Arrange
        let now = fixed_now();
        let mut scheduler = Scheduler::new(Timings::default());

        // Act
        let task = scheduler.schedule(DeferredEffect::Ending, now);

        // Assert
        assert_eq!(task.scheduled_at, now);
        assert_eq!(task.due_at, now + TimeDelta::seconds(2));
        assert_eq!(scheduler.pending(), &[task]);
        assert_eq!(scheduler.next_due(), Some(task.due_at));
    }

    #[test]
    fn test_nothing_is_due_before_its_time() {
        let now = fixed_now();
        let mut scheduler = Scheduler::new(Timings::default());
        scheduler.schedule(completion(ViewKind::Clock), now);

        let due = drain_due(&mut scheduler, now + TimeDelta::milliseconds(499));

        assert!(due.is_empty());
        assert_eq!(scheduler.pending().len(), 1);
    }

    #[test]
    fn test_due_tasks_fire_in_due_order_then_submission_order() {
        // Arrange
        let now = fixed_now();
        let mut scheduler = Scheduler::new(Timings::default());
        let ending = scheduler.schedule(DeferredEffect::Ending, now);
        let clock = scheduler.schedule(completion(ViewKind::Clock), now);
        let chairs = scheduler.schedule(completion(ViewKind::Chairs), now);

        // Act
        let due = drain_due(&mut scheduler, now + TimeDelta::seconds(5));

        // Assert
        let tokens: Vec<CancellationToken> = due.iter().map(|task| task.token).collect();
        assert_eq!(tokens, vec![clock.token, chairs.token, ending.token]);
        assert!(scheduler.pending().is_empty());
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let now = fixed_now();
        let mut scheduler = Scheduler::new(Timings::default());
        let task = scheduler.schedule(DeferredEffect::Blackout, now);

        assert_eq!(scheduler.cancel(task.token), Some(task));
        assert_eq!(scheduler.cancel(task.token), None);

        assert!(drain_due(&mut scheduler, now + TimeDelta::seconds(10)).is_empty());
    }

    #[test]
    fn test_cancel_where_only_removes_matching_tasks() {
        let now = fixed_now();
        let mut scheduler = Scheduler::new(Timings::default());
        scheduler.schedule(completion(ViewKind::Tablets), now);
        let ending = scheduler.schedule(DeferredEffect::Ending, now);

        let cancelled = scheduler.cancel_where(|effect| *effect == completion(ViewKind::Tablets));

        assert_eq!(cancelled.len(), 1);
        assert_eq!(scheduler.pending(), &[ending]);
        assert!(scheduler.is_pending(|effect| effect.is_transition()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let now = fixed_now();
        let mut scheduler = Scheduler::new(Timings::default());

        let first = scheduler.schedule(DeferredEffect::Blackout, now);
        scheduler.cancel(first.token);
        let second = scheduler.schedule(DeferredEffect::Blackout, now);

        assert_ne!(first.token, second.token);
    }
}
