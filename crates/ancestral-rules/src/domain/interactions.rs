//! Hotspot interactions, scene by scene.

use ancestral_content::hotspots::{
    AncestralHallTarget, CourtyardTarget, LeftRoomTarget, MainHallTarget, RightRoomTarget,
};
use ancestral_content::{Item, Scene, Target, script};
use ancestral_core::error::DomainError;
use ancestral_narrative::DeferredEffect;
use ancestral_puzzles::ViewKind;
use ancestral_world_state::{Flag, GameState};

use super::resolution::{Outcome, Resolution};

/// Resolves a click on `target` in the current scene.
///
/// # Errors
///
/// Returns `DomainError::UnknownTarget` if the current scene owns no hotspot
/// called `target`. Every scene rejects targets it does not own, and the
/// ending owns none.
pub fn resolve_interaction(state: &GameState, target: &str) -> Result<Resolution, DomainError> {
    let outcome = Outcome::new(state);
    let outcome = match Target::parse(state.scene(), target)? {
        Target::Courtyard(target) => courtyard(state, outcome, target),
        Target::MainHall(target) => main_hall(state, outcome, target),
        Target::RightRoom(target) => right_room(outcome, target),
        Target::LeftRoom(target) => left_room(state, outcome, target),
        Target::AncestralHall(target) => ancestral_hall(state, outcome, target),
    };
    Ok(outcome.finish())
}

fn courtyard<'a>(state: &GameState, outcome: Outcome<'a>, target: CourtyardTarget) -> Outcome<'a> {
    match target {
        CourtyardTarget::Gate => outcome.say(script::GATE_LOCKED),
        CourtyardTarget::Wall if state.is_raised(Flag::HasSeenBlackout) => {
            outcome.say(script::WALL_TOO_HIGH)
        }
        CourtyardTarget::Wall => outcome.open(ViewKind::Stones),
        CourtyardTarget::Door => outcome.travel(Scene::MainHall),
    }
}

fn main_hall<'a>(state: &GameState, outcome: Outcome<'a>, target: MainHallTarget) -> Outcome<'a> {
    match target {
        MainHallTarget::Firepit if state.has(Item::BurntPaper) => {
            outcome.say(script::FIREPIT_ASHES)
        }
        MainHallTarget::Firepit => outcome
            .grant(Item::BurntPaper)
            .grant(Item::Lighter)
            .open(ViewKind::PaperClue),
        MainHallTarget::Desk => outcome.open(ViewKind::Desk),
        MainHallTarget::Clock => {
            if state.is_raised(Flag::ClockSolved) {
                outcome.say(script::CLOCK_STOPPED)
            } else if state.is_raised(Flag::ChairsSolved) {
                outcome.open(ViewKind::Clock)
            } else {
                outcome.say(script::CLOCK_LOCKED)
            }
        }
        MainHallTarget::Chairs => {
            if !state.is_raised(Flag::HasFoundChairKey) {
                outcome
                    .grant(Item::Key)
                    .raise(Flag::HasFoundChairKey)
                    .say(script::CHAIR_KEY_FOUND)
            } else if state.is_raised(Flag::ChairsSolved) {
                outcome.say(script::CHAIRS_ARRANGED)
            } else if state.has(Item::DrawingArrangement) {
                outcome.open(ViewKind::Chairs)
            } else {
                outcome.say(script::CHAIRS_NEED_DRAWING)
            }
        }
        MainHallTarget::Left => outcome.travel(Scene::LeftRoom),
        MainHallTarget::Right => outcome.travel(Scene::RightRoom),
        MainHallTarget::Back => outcome.travel(Scene::Courtyard),
    }
}

fn right_room(outcome: Outcome<'_>, target: RightRoomTarget) -> Outcome<'_> {
    match target {
        RightRoomTarget::Wardrobe => outcome.open(ViewKind::Box),
        RightRoomTarget::Bedside => outcome.say(script::BEDSIDE_LOCKED),
        RightRoomTarget::Back => outcome.travel(Scene::MainHall),
    }
}

fn left_room<'a>(state: &GameState, outcome: Outcome<'a>, target: LeftRoomTarget) -> Outcome<'a> {
    match target {
        LeftRoomTarget::Vase if state.has(Item::Candle) => outcome.say(script::VASE_EMPTY),
        LeftRoomTarget::Vase => outcome.grant(Item::Candle).say(script::VASE_CANDLES),
        LeftRoomTarget::SecretDoor => {
            if state.is_raised(Flag::SecretDoorOpen) {
                outcome.travel(Scene::AncestralHall)
            } else if state.has(Item::DrawingMap) {
                outcome
                    .raise(Flag::SecretDoorOpen)
                    .say(script::SECRET_DOOR_FOUND)
            } else {
                outcome.say(script::WARDROBE_HEAVY)
            }
        }
        LeftRoomTarget::Back => outcome.travel(Scene::MainHall),
    }
}

fn ancestral_hall<'a>(
    state: &GameState,
    outcome: Outcome<'a>,
    target: AncestralHallTarget,
) -> Outcome<'a> {
    match target {
        AncestralHallTarget::Drawer => {
            if state.has(Item::SpiritTabletDrawer) || state.is_raised(Flag::HasPlacedTabletDrawer) {
                outcome.say(script::ALTAR_DRAWER_EMPTY)
            } else {
                outcome.open(ViewKind::AltarDrawer)
            }
        }
        AncestralHallTarget::Table => altar_table(state, outcome),
        AncestralHallTarget::Back => outcome.travel(Scene::LeftRoom),
    }
}

/// The altar table goes through three stages: the tablets, the mirror, and
/// the candles.
fn altar_table<'a>(state: &GameState, outcome: Outcome<'a>) -> Outcome<'a> {
    let arranged = state.is_raised(Flag::TabletsArranged);
    let repaired = state.is_raised(Flag::MirrorRepaired);
    let lit = state.is_raised(Flag::CandlesLit);
    let selected = state.selected_item();

    if arranged && !repaired {
        return match selected {
            Some(Item::MirrorFragment) => outcome
                .raise(Flag::MirrorRepaired)
                .say(script::MIRROR_REPAIRED),
            _ => outcome.say(script::MIRROR_BROKEN),
        };
    }
    if repaired && !lit {
        return match selected {
            Some(Item::Candle) => outcome.say(script::CANDLES_NEED_FIRE),
            Some(Item::Lighter) => outcome
                .raise(Flag::CandlesLit)
                .defer(DeferredEffect::Ending),
            _ => outcome.say(script::CANDLE_HOLDERS),
        };
    }
    outcome.open(ViewKind::Tablets)
}
