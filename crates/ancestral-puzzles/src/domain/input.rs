//! Inputs the renderer sends to the open view, and what they produce.

use serde::{Deserialize, Serialize};

/// A click inside a puzzle overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum PuzzleInput {
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    Stone { index: usize },
    Chair { index: usize },
    TabletSlot { index: usize },
    OpenBox,
    TakeReveal,
    ToggleDrawer,
}

impl PuzzleInput {
    /// Stable name for logs and error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HourUp => "hour_up",
            Self::HourDown => "hour_down",
            Self::MinuteUp => "minute_up",
            Self::MinuteDown => "minute_down",
            Self::Stone { .. } => "stone",
            Self::Chair { .. } => "chair",
            Self::TabletSlot { .. } => "tablet_slot",
            Self::OpenBox => "open_box",
            Self::TakeReveal => "take_reveal",
            Self::ToggleDrawer => "toggle_drawer",
        }
    }
}

/// Structured data a view passes along with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PuzzlePayload {
    /// An empty tablet slot was clicked.
    PlaceTablet { index: usize },
}

/// Result of feeding one input to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Local state changed.
    Updated,
    /// The input had no effect in the current local state.
    Ignored,
    /// The view asks the resolver to run its completion right away.
    CompletionRequested(Option<PuzzlePayload>),
}
