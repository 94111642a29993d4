//! Builders for game states in a given situation.

use ancestral_content::{Item, Scene};
use ancestral_puzzles::ViewKind;
use ancestral_test_support::FixedClock;
use ancestral_world_state::{Flag, GameState, WorldStateEventKind};
use uuid::Uuid;

use crate::domain::resolution::Resolution;

pub(crate) fn record(state: &mut GameState, kind: WorldStateEventKind) {
    state
        .record(kind, Uuid::new_v4(), &FixedClock::default())
        .unwrap();
}

pub(crate) fn state_with(scene: Scene, items: &[Item], flags: &[Flag]) -> GameState {
    let mut state = GameState::new(Uuid::new_v4());
    let from = state.scene();
    if scene != from {
        record(&mut state, WorldStateEventKind::SceneChanged { from, to: scene });
    }
    for item in items {
        record(&mut state, WorldStateEventKind::ItemGranted { item: *item });
    }
    for flag in flags {
        record(&mut state, WorldStateEventKind::FlagRaised { flag: *flag });
    }
    state
}

pub(crate) fn select(state: &mut GameState, item: Item) {
    record(state, WorldStateEventKind::ItemSelected { item: Some(item) });
}

pub(crate) fn open(state: &mut GameState, view: ViewKind) {
    record(state, WorldStateEventKind::ViewOpened { view });
}

pub(crate) fn apply(state: &mut GameState, resolution: &Resolution) {
    for change in &resolution.changes {
        record(state, change.clone());
    }
}
