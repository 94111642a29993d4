//! Aggregate root for the World State context.

use ancestral_content::{Item, Scene, script};
use ancestral_core::aggregate::AggregateRoot;
use ancestral_core::clock::Clock;
use ancestral_core::error::DomainError;
use ancestral_core::event::EventMetadata;
use ancestral_inventory::{Inventory, Selection};
use ancestral_puzzles::{ActiveView, InputOutcome, PuzzleInput, ViewKind};
use tracing::{debug, warn};
use uuid::Uuid;

use super::events::{WorldStateEvent, WorldStateEventKind};
use super::flags::{Flag, Flags};

/// The canonical state of one play session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Aggregate identifier (the session id).
    pub id: Uuid,
    /// Current version (number of applied events).
    version: i64,
    scene: Scene,
    inventory: Inventory,
    flags: Flags,
    dialogue: Option<String>,
    active_view: Option<ActiveView>,
    selection: Selection,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<WorldStateEvent>,
}

impl GameState {
    /// Creates the opening state: courtyard, nothing held, no flags, and the
    /// opening line on screen.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            scene: Scene::INITIAL,
            inventory: Inventory::new(),
            flags: Flags::new(),
            dialogue: Some(script::OPENING.to_owned()),
            active_view: None,
            selection: Selection::default(),
            uncommitted_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub fn has(&self, item: Item) -> bool {
        self.inventory.contains(item)
    }

    #[must_use]
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    #[must_use]
    pub fn is_raised(&self, flag: Flag) -> bool {
        self.flags.is_raised(flag)
    }

    #[must_use]
    pub fn dialogue(&self) -> Option<&str> {
        self.dialogue.as_deref()
    }

    #[must_use]
    pub fn active_view(&self) -> Option<&ActiveView> {
        self.active_view.as_ref()
    }

    #[must_use]
    pub fn active_view_kind(&self) -> Option<ViewKind> {
        self.active_view.as_ref().map(ActiveView::kind)
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<Item> {
        self.selection.current()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the next sequence number for a new event.
    fn next_sequence_number(&self) -> i64 {
        self.version + 1
    }

    fn check(&self, kind: &WorldStateEventKind) -> Result<(), DomainError> {
        match kind {
            WorldStateEventKind::SceneChanged { from, to } => {
                if *from != self.scene {
                    return Err(DomainError::Validation(format!(
                        "scene change from {from} but current scene is {}",
                        self.scene
                    )));
                }
                if self.scene.is_terminal() && *to != self.scene {
                    return Err(DomainError::Validation(format!(
                        "scene {} has no outgoing transition",
                        self.scene
                    )));
                }
                Ok(())
            }
            WorldStateEventKind::ItemConsumed { item } => self.inventory.check_consume(*item),
            _ => Ok(()),
        }
    }

    /// Validates a change, then records and applies it as an event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the change would leave the
    /// terminal scene, start from a scene that is not current, or consume an
    /// item that may not be consumed.
    pub fn record(
        &mut self,
        kind: WorldStateEventKind,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<&WorldStateEvent, DomainError> {
        self.check(&kind)?;

        let event = WorldStateEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        debug!(
            session_id = %self.id,
            event_type = event.kind.event_type(),
            sequence_number = event.metadata.sequence_number,
            "recording event"
        );

        self.apply(&event);
        self.uncommitted_events.push(event);
        let index = self.uncommitted_events.len() - 1;
        Ok(&self.uncommitted_events[index])
    }

    /// Feeds a renderer click to the open puzzle. Local puzzle state is
    /// transient and produces no event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoActiveView` if no view is open, or
    /// `DomainError::Validation` if the input does not fit the open view.
    pub fn apply_puzzle_input(&mut self, input: PuzzleInput) -> Result<InputOutcome, DomainError> {
        self.active_view
            .as_mut()
            .ok_or(DomainError::NoActiveView)?
            .apply_input(input)
    }

    /// Returns the open view's kind the first time its solved-predicate is
    /// observed to hold during this opening.
    pub fn poll_puzzle_completion(&mut self) -> Option<ViewKind> {
        let view = self.active_view.as_mut()?;
        view.poll_completion().then(|| view.kind())
    }

    /// Prevents the open view from reporting completion again.
    pub fn disarm_active_view(&mut self) {
        if let Some(view) = self.active_view.as_mut() {
            view.disarm();
        }
    }

    /// Records a batch of changes as one unit. Either every change is
    /// applied and its event returned, or the state is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the first error [`GameState::record`] reports for the batch.
    pub fn record_all(
        &mut self,
        changes: Vec<WorldStateEventKind>,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Vec<WorldStateEvent>, DomainError> {
        let mut staged = self.clone();
        for change in changes {
            staged.record(change, correlation_id, clock)?;
        }
        let events = staged.uncommitted_events().to_vec();
        staged.clear_uncommitted_events();
        *self = staged;
        Ok(events)
    }

    fn sync_tablets(&mut self) {
        let clock_placed = self.flags.is_raised(Flag::HasPlacedTabletClock);
        let drawer_placed = self.flags.is_raised(Flag::HasPlacedTabletDrawer);
        if let Some(view) = self.active_view.as_mut() {
            view.sync_tablet_placements(clock_placed, drawer_placed);
        }
    }
}

impl AggregateRoot for GameState {
    type Event = WorldStateEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            WorldStateEventKind::SceneChanged { to, .. } => {
                self.scene = *to;
            }
            WorldStateEventKind::ItemGranted { item } => {
                self.inventory.add(*item);
            }
            WorldStateEventKind::ItemConsumed { item } => {
                if let Err(error) = self.inventory.consume(*item) {
                    warn!(session_id = %self.id, %error, "consumed item was not applied");
                }
            }
            WorldStateEventKind::FlagRaised { flag } => {
                self.flags.raise(*flag);
                if matches!(flag, Flag::HasPlacedTabletClock | Flag::HasPlacedTabletDrawer) {
                    self.sync_tablets();
                }
            }
            WorldStateEventKind::DialogueShown { text } => {
                self.dialogue = Some(text.clone());
            }
            WorldStateEventKind::DialogueCleared => {
                self.dialogue = None;
            }
            WorldStateEventKind::ViewOpened { view } => {
                let already_solved =
                    Flag::completed_by(*view).is_some_and(|flag| self.flags.is_raised(flag));
                self.active_view = Some(ActiveView::open(*view, already_solved));
                self.sync_tablets();
            }
            WorldStateEventKind::ViewClosed => {
                self.active_view = None;
            }
            WorldStateEventKind::ItemSelected { item } => {
                self.selection.set(*item);
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
