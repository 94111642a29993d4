//! Commands for the Session context.

use ancestral_content::Item;
use ancestral_core::command::Command;
use ancestral_narrative::CancellationToken;
use ancestral_puzzles::{PuzzleInput, PuzzlePayload, ViewKind};
use uuid::Uuid;

/// Command to click a hotspot in the current scene.
#[derive(Debug, Clone)]
pub struct HandleInteraction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
    /// Raw target identifier, e.g. `secret_door`.
    pub target: String,
}

impl Command for HandleInteraction {
    fn command_type(&self) -> &'static str {
        "session.handle_interaction"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to toggle the held item.
#[derive(Debug, Clone)]
pub struct SelectItem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
    /// The item to hold up, or put down if it is already held.
    pub item: Item,
}

impl Command for SelectItem {
    fn command_type(&self) -> &'static str {
        "session.select_item"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to clear the dialogue line.
#[derive(Debug, Clone)]
pub struct DismissDialogue {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
}

impl Command for DismissDialogue {
    fn command_type(&self) -> &'static str {
        "session.dismiss_dialogue"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command reporting that the open view completed.
#[derive(Debug, Clone)]
pub struct CompletePuzzle {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
    /// The view that completed. Must be the active one.
    pub view: ViewKind,
    /// Optional structured data, e.g. a tablet placement.
    pub payload: Option<PuzzlePayload>,
}

impl Command for CompletePuzzle {
    fn command_type(&self) -> &'static str {
        "session.complete_puzzle"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to close the open view.
#[derive(Debug, Clone)]
pub struct ClosePuzzleView {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
}

impl Command for ClosePuzzleView {
    fn command_type(&self) -> &'static str {
        "session.close_puzzle_view"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command carrying a click inside the open view.
#[derive(Debug, Clone)]
pub struct SubmitPuzzleInput {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
    /// The click.
    pub input: PuzzleInput,
}

impl Command for SubmitPuzzleInput {
    fn command_type(&self) -> &'static str {
        "session.submit_puzzle_input"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to fire every deferred effect that has come due.
#[derive(Debug, Clone)]
pub struct AdvanceTime {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
}

impl Command for AdvanceTime {
    fn command_type(&self) -> &'static str {
        "session.advance_time"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to cancel a pending deferred effect.
#[derive(Debug, Clone)]
pub struct CancelTask {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to act on.
    pub session_id: Uuid,
    /// The task to cancel.
    pub token: CancellationToken,
}

impl Command for CancelTask {
    fn command_type(&self) -> &'static str {
        "session.cancel_task"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
