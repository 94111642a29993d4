//! Domain events for the World State context.

use ancestral_content::{Item, Scene};
use ancestral_core::event::{DomainEvent, EventMetadata};
use ancestral_puzzles::ViewKind;
use serde::{Deserialize, Serialize};

use super::flags::Flag;

/// Event type identifier for [`WorldStateEventKind::SceneChanged`].
pub const SCENE_CHANGED_EVENT_TYPE: &str = "world_state.scene_changed";
/// Event type identifier for [`WorldStateEventKind::ItemGranted`].
pub const ITEM_GRANTED_EVENT_TYPE: &str = "world_state.item_granted";
/// Event type identifier for [`WorldStateEventKind::ItemConsumed`].
pub const ITEM_CONSUMED_EVENT_TYPE: &str = "world_state.item_consumed";
/// Event type identifier for [`WorldStateEventKind::FlagRaised`].
pub const FLAG_RAISED_EVENT_TYPE: &str = "world_state.flag_raised";
/// Event type identifier for [`WorldStateEventKind::DialogueShown`].
pub const DIALOGUE_SHOWN_EVENT_TYPE: &str = "world_state.dialogue_shown";
/// Event type identifier for [`WorldStateEventKind::DialogueCleared`].
pub const DIALOGUE_CLEARED_EVENT_TYPE: &str = "world_state.dialogue_cleared";
/// Event type identifier for [`WorldStateEventKind::ViewOpened`].
pub const VIEW_OPENED_EVENT_TYPE: &str = "world_state.view_opened";
/// Event type identifier for [`WorldStateEventKind::ViewClosed`].
pub const VIEW_CLOSED_EVENT_TYPE: &str = "world_state.view_closed";
/// Event type identifier for [`WorldStateEventKind::ItemSelected`].
pub const ITEM_SELECTED_EVENT_TYPE: &str = "world_state.item_selected";

/// A single change to the game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum WorldStateEventKind {
    /// The player moved to another scene.
    SceneChanged { from: Scene, to: Scene },
    /// An item was added to the inventory.
    ItemGranted { item: Item },
    /// A spirit tablet left the inventory.
    ItemConsumed { item: Item },
    /// A progress flag was raised.
    FlagRaised { flag: Flag },
    /// A dialogue line replaced the current one.
    DialogueShown { text: String },
    /// The dialogue box was emptied.
    DialogueCleared,
    /// A puzzle overlay was opened with fresh local state.
    ViewOpened { view: ViewKind },
    /// The puzzle overlay was closed.
    ViewClosed,
    /// The held item changed.
    ItemSelected { item: Option<Item> },
}

impl WorldStateEventKind {
    /// Returns the event type identifier of this change.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SceneChanged { .. } => SCENE_CHANGED_EVENT_TYPE,
            Self::ItemGranted { .. } => ITEM_GRANTED_EVENT_TYPE,
            Self::ItemConsumed { .. } => ITEM_CONSUMED_EVENT_TYPE,
            Self::FlagRaised { .. } => FLAG_RAISED_EVENT_TYPE,
            Self::DialogueShown { .. } => DIALOGUE_SHOWN_EVENT_TYPE,
            Self::DialogueCleared => DIALOGUE_CLEARED_EVENT_TYPE,
            Self::ViewOpened { .. } => VIEW_OPENED_EVENT_TYPE,
            Self::ViewClosed => VIEW_CLOSED_EVENT_TYPE,
            Self::ItemSelected { .. } => ITEM_SELECTED_EVENT_TYPE,
        }
    }

    /// Shorthand for a dialogue line.
    #[must_use]
    pub fn say(text: impl Into<String>) -> Self {
        Self::DialogueShown { text: text.into() }
    }
}

/// Domain event envelope for the World State context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldStateEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: WorldStateEventKind,
}

impl DomainEvent for WorldStateEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
