//! Query handlers for the World State context.
//!
//! Builds the read-only snapshot the renderer draws from.

use std::collections::BTreeMap;

use ancestral_content::hotspots::hotspots;
use ancestral_content::{Item, Scene};
use ancestral_core::aggregate::AggregateRoot;
use ancestral_puzzles::{ActiveView, ViewState};
use serde::Serialize;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::domain::aggregates::GameState;
use crate::domain::flags::Flag;

/// An inventory entry with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub name: &'static str,
}

/// The open overlay as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewSnapshot {
    Stones {
        stones: [u8; 5],
        solved: bool,
    },
    PaperClue,
    Desk {
        drawer_open: bool,
        /// The fragment has been taken.
        revealed: bool,
    },
    Clock {
        hour: u8,
        minute: u8,
        solved: bool,
    },
    Chairs {
        symbols: [&'static str; 4],
        solved: bool,
    },
    Box {
        unlocked: bool,
    },
    AltarDrawer {
        drawer_open: bool,
        /// The tablet has been taken or already placed.
        revealed: bool,
    },
    Tablets {
        slots: [Option<&'static str>; 5],
        solved: bool,
    },
}

/// Read-only view of a game state.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateView {
    pub session_id: Uuid,
    pub scene: Scene,
    /// Target identifiers the current scene accepts.
    pub hotspots: Vec<&'static str>,
    pub inventory: Vec<InventoryEntry>,
    pub flags: BTreeMap<Flag, bool>,
    pub dialogue: Option<String>,
    pub active_view: Option<ViewSnapshot>,
    pub selected_item: Option<Item>,
    /// Current version (event count).
    pub version: i64,
}

fn view_snapshot(state: &GameState, view: &ActiveView) -> ViewSnapshot {
    let solved = view.is_solved()
        || Flag::completed_by(view.kind()).is_some_and(|flag| state.is_raised(flag));
    match view.state() {
        ViewState::Stones(stones) => ViewSnapshot::Stones {
            stones: stones.stones(),
            solved,
        },
        ViewState::PaperClue => ViewSnapshot::PaperClue,
        ViewState::Desk(drawer) => ViewSnapshot::Desk {
            drawer_open: drawer.is_open(),
            revealed: state.has(Item::MirrorFragment),
        },
        ViewState::Clock(clock) => ViewSnapshot::Clock {
            hour: clock.hour(),
            minute: clock.minute(),
            solved,
        },
        ViewState::Chairs(chairs) => ViewSnapshot::Chairs {
            symbols: chairs.glyphs(),
            solved,
        },
        ViewState::Box => ViewSnapshot::Box {
            unlocked: state.is_raised(Flag::BoxUnlocked),
        },
        ViewState::AltarDrawer(drawer) => ViewSnapshot::AltarDrawer {
            drawer_open: drawer.is_open(),
            revealed: state.has(Item::SpiritTabletDrawer)
                || state.is_raised(Flag::HasPlacedTabletDrawer),
        },
        ViewState::Tablets(tablets) => ViewSnapshot::Tablets {
            slots: tablets.slots(),
            solved,
        },
    }
}

/// Builds the renderer snapshot of `state`.
#[must_use]
pub fn game_state_view(state: &GameState) -> GameStateView {
    GameStateView {
        session_id: state.aggregate_id(),
        scene: state.scene(),
        hotspots: hotspots(state.scene()),
        inventory: state
            .inventory()
            .items()
            .iter()
            .map(|item| InventoryEntry {
                item: *item,
                name: item.display_name(),
            })
            .collect(),
        flags: Flag::iter()
            .map(|flag| (flag, state.is_raised(flag)))
            .collect(),
        dialogue: state.dialogue().map(str::to_owned),
        active_view: state
            .active_view()
            .map(|view| view_snapshot(state, view)),
        selected_item: state.selected_item(),
        version: state.version(),
    }
}

#[cfg(test)]
mod tests {
    use ancestral_content::script;
    use ancestral_puzzles::ViewKind;
    use ancestral_test_support::FixedClock;

    use super::*;
    use crate::domain::events::WorldStateEventKind;

    #[test]
    fn test_initial_snapshot() {
        // Arrange
        let id = Uuid::new_v4();
        let state = GameState::new(id);

        // Act
        let view = game_state_view(&state);

        // Assert
        assert_eq!(view.session_id, id);
        assert_eq!(view.scene, Scene::Courtyard);
        assert_eq!(view.hotspots, vec!["gate", "wall", "door"]);
        assert!(view.inventory.is_empty());
        assert_eq!(view.flags.len(), 13);
        assert!(view.flags.values().all(|raised| !raised));
        assert_eq!(view.dialogue.as_deref(), Some(script::OPENING));
        assert!(view.active_view.is_none());
        assert_eq!(view.version, 0);
    }

    #[test]
    fn test_snapshot_serializes_flags_by_wire_name() {
        let state = GameState::new(Uuid::new_v4());

        let json = serde_json::to_value(game_state_view(&state)).unwrap();

        assert_eq!(json["flags"]["hasSeenBlackout"], false);
        assert_eq!(json["scene"], "courtyard");
    }

    #[test]
    fn test_desk_reveal_is_derived_from_inventory() {
        // Arrange
        let clock = FixedClock::default();
        let mut state = GameState::new(Uuid::new_v4());
        state
            .record(WorldStateEventKind::ViewOpened { view: ViewKind::Desk }, Uuid::new_v4(), &clock)
            .unwrap();
        state
            .record(
                WorldStateEventKind::ItemGranted {
                    item: Item::MirrorFragment,
                },
                Uuid::new_v4(),
                &clock,
            )
            .unwrap();

        // Act
        let view = game_state_view(&state);

        // Assert
        assert_eq!(
            view.active_view,
            Some(ViewSnapshot::Desk {
                drawer_open: false,
                revealed: true
            })
        );
        assert_eq!(view.inventory[0].name, "铜镜碎片");
    }

    #[test]
    fn test_view_snapshot_is_tagged_by_kind() {
        let clock = FixedClock::default();
        let mut state = GameState::new(Uuid::new_v4());
        state
            .record(WorldStateEventKind::ViewOpened { view: ViewKind::Clock }, Uuid::new_v4(), &clock)
            .unwrap();

        let json = serde_json::to_value(game_state_view(&state)).unwrap();

        assert_eq!(
            json["active_view"],
            serde_json::json!({ "kind": "clock", "hour": 12, "minute": 30, "solved": false })
        );
    }
}
