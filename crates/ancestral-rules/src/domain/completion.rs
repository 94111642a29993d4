//! What happens when a puzzle view reports completion.

use ancestral_content::{Item, script};
use ancestral_core::error::DomainError;
use ancestral_narrative::DeferredEffect;
use ancestral_puzzles::{PuzzlePayload, ViewKind};
use ancestral_world_state::{Flag, GameState};

use super::resolution::{Outcome, Resolution};

/// Resolves the completion of `view`, with the payload the view passed.
///
/// Completion of the clock, chairs and tablets is idempotent: once their
/// flag is raised a second completion changes nothing. The same holds for
/// the box once unlocked, and for the desk and altar drawer once their item
/// has been taken.
///
/// # Errors
///
/// Returns `DomainError::Validation` for the paper clue, which has no
/// completion, and for a payload the view does not accept.
pub fn resolve_completion(
    state: &GameState,
    view: ViewKind,
    payload: Option<PuzzlePayload>,
) -> Result<Resolution, DomainError> {
    if let Some(payload) = payload {
        return match (view, payload) {
            (ViewKind::Tablets, PuzzlePayload::PlaceTablet { .. }) => Ok(place_tablet(state)),
            (view, payload) => Err(DomainError::Validation(format!(
                "the {view} view does not accept {payload:?}"
            ))),
        };
    }

    let outcome = Outcome::new(state);
    let outcome = match view {
        ViewKind::PaperClue => {
            return Err(DomainError::Validation(
                "the paper clue has no completion".to_owned(),
            ));
        }
        ViewKind::Stones => outcome
            .close_view()
            .say(script::STONES_BLACKOUT)
            .defer(DeferredEffect::Blackout),
        ViewKind::Box => open_box(state, outcome),
        ViewKind::Clock if state.is_raised(Flag::ClockSolved) => outcome,
        ViewKind::Clock => outcome
            .close_view()
            .raise(Flag::ClockSolved)
            .grant(Item::SpiritTabletClock)
            .say(script::CLOCK_TABLET),
        ViewKind::Chairs if state.is_raised(Flag::ChairsSolved) => outcome,
        ViewKind::Chairs => outcome
            .close_view()
            .raise(Flag::ChairsSolved)
            .say(script::CHAIRS_UNLOCK_CLOCK),
        ViewKind::Tablets if state.is_raised(Flag::TabletsArranged) => outcome,
        ViewKind::Tablets => outcome
            .close_view()
            .raise(Flag::TabletsArranged)
            .say(script::TABLETS_RAISE_MIRROR),
        ViewKind::Desk if state.has(Item::MirrorFragment) => outcome,
        ViewKind::Desk => outcome
            .grant(Item::MirrorFragment)
            .say(script::DESK_FRAGMENT),
        ViewKind::AltarDrawer
            if state.has(Item::SpiritTabletDrawer)
                || state.is_raised(Flag::HasPlacedTabletDrawer) =>
        {
            outcome
        }
        ViewKind::AltarDrawer => outcome
            .grant(Item::SpiritTabletDrawer)
            .say(script::ALTAR_DRAWER_TABLET),
    };
    Ok(outcome.finish())
}

fn open_box<'a>(state: &GameState, outcome: Outcome<'a>) -> Outcome<'a> {
    if state.is_raised(Flag::BoxUnlocked) {
        return outcome;
    }
    if state.selected_item() != Some(Item::Key) {
        return outcome.say(script::BOX_NEEDS_KEY);
    }
    outcome
        .close_view()
        .raise(Flag::BoxUnlocked)
        .grant(Item::DrawingMap)
        .grant(Item::DrawingArrangement)
}

/// The clock tablet goes down first whenever both are held.
fn place_tablet(state: &GameState) -> Resolution {
    let outcome = Outcome::new(state);
    let outcome = if state.has(Item::SpiritTabletClock) {
        outcome
            .consume(Item::SpiritTabletClock)
            .raise(Flag::HasPlacedTabletClock)
            .say(script::PLACED_CLOCK_TABLET)
    } else if state.has(Item::SpiritTabletDrawer) {
        outcome
            .consume(Item::SpiritTabletDrawer)
            .raise(Flag::HasPlacedTabletDrawer)
            .say(script::PLACED_DRAWER_TABLET)
    } else {
        outcome.say(script::TABLET_MISSING)
    };
    outcome.finish()
}

#[cfg(test)]
mod tests {
    use ancestral_content::Scene;
    use ancestral_world_state::WorldStateEventKind;

    use super::*;
    use crate::domain::fixtures::{apply, open, select, state_with};

    #[test]
    fn test_stones_close_and_defer_blackout() {
        // Arrange
        let mut state = state_with(Scene::Courtyard, &[], &[]);
        open(&mut state, ViewKind::Stones);

        // Act
        let resolution = resolve_completion(&state, ViewKind::Stones, None).unwrap();

        // Assert
        assert_eq!(
            resolution.changes,
            vec![
                WorldStateEventKind::ViewClosed,
                WorldStateEventKind::say(script::STONES_BLACKOUT),
            ]
        );
        assert_eq!(resolution.deferred, Some(DeferredEffect::Blackout));
    }

    #[test]
    fn test_box_without_key_stays_open() {
        let mut state = state_with(Scene::RightRoom, &[Item::Key], &[]);
        open(&mut state, ViewKind::Box);

        let resolution = resolve_completion(&state, ViewKind::Box, None).unwrap();

        assert_eq!(
            resolution.changes,
            vec![WorldStateEventKind::say(script::BOX_NEEDS_KEY)]
        );
    }

    #[test]
    fn test_box_with_key_grants_both_drawings() {
        // Arrange
        let mut state = state_with(Scene::RightRoom, &[Item::Key], &[]);
        select(&mut state, Item::Key);
        open(&mut state, ViewKind::Box);

        // Act
        let resolution = resolve_completion(&state, ViewKind::Box, None).unwrap();
        apply(&mut state, &resolution);

        // Assert
        assert!(state.active_view().is_none());
        assert!(state.is_raised(Flag::BoxUnlocked));
        assert!(state.has(Item::DrawingMap));
        assert!(state.has(Item::DrawingArrangement));
        assert!(state.has(Item::Key));
        assert_eq!(state.dialogue(), Some("获得了 [陈列图]"));
    }

    #[test]
    fn test_unlocked_box_is_a_no_op() {
        let mut state = state_with(Scene::RightRoom, &[Item::Key], &[Flag::BoxUnlocked]);
        select(&mut state, Item::Key);

        let resolution = resolve_completion(&state, ViewKind::Box, None).unwrap();

        assert!(resolution.is_empty());
    }

    #[test]
    fn test_clock_grants_tablet_once() {
        // Arrange
        let mut state = state_with(Scene::MainHall, &[], &[Flag::ChairsSolved]);
        open(&mut state, ViewKind::Clock);

        // Act
        let first = resolve_completion(&state, ViewKind::Clock, None).unwrap();
        apply(&mut state, &first);
        let second = resolve_completion(&state, ViewKind::Clock, None).unwrap();

        // Assert
        assert!(state.is_raised(Flag::ClockSolved));
        assert!(state.has(Item::SpiritTabletClock));
        assert_eq!(state.dialogue(), Some(script::CLOCK_TABLET));
        assert!(second.is_empty());
    }

    #[test]
    fn test_chairs_unlock_clock() {
        let mut state = state_with(Scene::MainHall, &[], &[]);
        open(&mut state, ViewKind::Chairs);

        let resolution = resolve_completion(&state, ViewKind::Chairs, None).unwrap();

        assert_eq!(
            resolution.changes,
            vec![
                WorldStateEventKind::ViewClosed,
                WorldStateEventKind::FlagRaised {
                    flag: Flag::ChairsSolved
                },
                WorldStateEventKind::say(script::CHAIRS_UNLOCK_CLOCK),
            ]
        );
    }

    #[test]
    fn test_tablets_completion_is_idempotent() {
        let state = state_with(Scene::AncestralHall, &[], &[Flag::TabletsArranged]);

        let resolution = resolve_completion(&state, ViewKind::Tablets, None).unwrap();

        assert!(resolution.is_empty());
    }

    #[test]
    fn test_desk_reveal_keeps_view_open() {
        // Arrange
        let mut state = state_with(Scene::MainHall, &[], &[]);
        open(&mut state, ViewKind::Desk);

        // Act
        let first = resolve_completion(&state, ViewKind::Desk, None).unwrap();
        apply(&mut state, &first);
        let second = resolve_completion(&state, ViewKind::Desk, None).unwrap();

        // Assert
        assert_eq!(state.active_view_kind(), Some(ViewKind::Desk));
        assert!(state.has(Item::MirrorFragment));
        assert_eq!(state.dialogue(), Some(script::DESK_FRAGMENT));
        assert!(second.is_empty());
    }

    #[test]
    fn test_altar_drawer_reveal_announces_tablet_once() {
        // Arrange
        let mut state = state_with(Scene::AncestralHall, &[], &[]);
        open(&mut state, ViewKind::AltarDrawer);

        // Act
        let first = resolve_completion(&state, ViewKind::AltarDrawer, None).unwrap();
        apply(&mut state, &first);
        let second = resolve_completion(&state, ViewKind::AltarDrawer, None).unwrap();

        // Assert
        assert!(state.has(Item::SpiritTabletDrawer));
        assert_eq!(first.dialogue(), Some(script::ALTAR_DRAWER_TABLET));
        assert!(second.is_empty());
    }

    #[test]
    fn test_altar_drawer_does_not_regrant_placed_tablet() {
        let state = state_with(Scene::AncestralHall, &[], &[Flag::HasPlacedTabletDrawer]);

        let resolution = resolve_completion(&state, ViewKind::AltarDrawer, None).unwrap();

        assert!(resolution.is_empty());
    }

    #[test]
    fn test_paper_clue_has_no_completion() {
        let state = state_with(Scene::MainHall, &[], &[]);

        let result = resolve_completion(&state, ViewKind::PaperClue, None);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_place_tablet_prefers_clock_tablet() {
        // Arrange
        let mut state = state_with(
            Scene::AncestralHall,
            &[Item::SpiritTabletClock, Item::SpiritTabletDrawer],
            &[],
        );
        open(&mut state, ViewKind::Tablets);
        let payload = Some(PuzzlePayload::PlaceTablet { index: 3 });

        // Act
        let first = resolve_completion(&state, ViewKind::Tablets, payload).unwrap();
        apply(&mut state, &first);
        let second = resolve_completion(&state, ViewKind::Tablets, payload).unwrap();
        apply(&mut state, &second);
        let third = resolve_completion(&state, ViewKind::Tablets, payload).unwrap();

        // Assert
        assert_eq!(first.dialogue(), Some(script::PLACED_CLOCK_TABLET));
        assert_eq!(second.dialogue(), Some(script::PLACED_DRAWER_TABLET));
        assert_eq!(third.dialogue(), Some(script::TABLET_MISSING));
        assert!(state.inventory().is_empty());
        assert!(state.is_raised(Flag::HasPlacedTabletClock));
        assert!(state.is_raised(Flag::HasPlacedTabletDrawer));
        assert_eq!(state.poll_puzzle_completion(), Some(ViewKind::Tablets));
    }

    #[test]
    fn test_payload_on_other_view_is_rejected() {
        let state = state_with(Scene::MainHall, &[], &[]);

        let result = resolve_completion(
            &state,
            ViewKind::Clock,
            Some(PuzzlePayload::PlaceTablet { index: 0 }),
        );

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
