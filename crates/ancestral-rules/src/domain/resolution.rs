//! The outcome of resolving an intent.

use ancestral_content::{Item, Scene, script};
use ancestral_narrative::DeferredEffect;
use ancestral_puzzles::ViewKind;
use ancestral_world_state::{Flag, GameState, WorldStateEventKind};

/// Changes to record, in order, and an optional deferred effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub changes: Vec<WorldStateEventKind>,
    pub deferred: Option<DeferredEffect>,
}

impl Resolution {
    /// A resolution that changes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.deferred.is_none()
    }

    /// The last dialogue line this resolution shows, if any.
    #[must_use]
    pub fn dialogue(&self) -> Option<&str> {
        self.changes.iter().rev().find_map(|change| match change {
            WorldStateEventKind::DialogueShown { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Accumulates the changes of one resolution against the state it was
/// resolved from.
pub(crate) struct Outcome<'a> {
    state: &'a GameState,
    resolution: Resolution,
}

impl<'a> Outcome<'a> {
    pub(crate) fn new(state: &'a GameState) -> Self {
        Self {
            state,
            resolution: Resolution::none(),
        }
    }

    fn push(mut self, change: WorldStateEventKind) -> Self {
        self.resolution.changes.push(change);
        self
    }

    pub(crate) fn say(self, text: &str) -> Self {
        self.push(WorldStateEventKind::say(text))
    }

    /// Adds `item` with its acquisition line, unless it is already held.
    pub(crate) fn grant(self, item: Item) -> Self {
        if self.state.has(item) {
            return self;
        }
        self.push(WorldStateEventKind::ItemGranted { item })
            .say(&script::acquired(item))
    }

    pub(crate) fn consume(self, item: Item) -> Self {
        self.push(WorldStateEventKind::ItemConsumed { item })
    }

    /// Raises `flag` unless it is already raised.
    pub(crate) fn raise(self, flag: Flag) -> Self {
        if self.state.is_raised(flag) {
            return self;
        }
        self.push(WorldStateEventKind::FlagRaised { flag })
    }

    pub(crate) fn open(self, view: ViewKind) -> Self {
        self.push(WorldStateEventKind::ViewOpened { view })
    }

    pub(crate) fn close_view(self) -> Self {
        if self.state.active_view().is_none() {
            return self;
        }
        self.push(WorldStateEventKind::ViewClosed)
    }

    /// Changes the scene to `to` and nothing else.
    pub(crate) fn enter(self, to: Scene) -> Self {
        let from = self.state.scene();
        self.push(WorldStateEventKind::SceneChanged { from, to })
    }

    /// Moves to `to`, clearing dialogue and any open view.
    pub(crate) fn travel(self, to: Scene) -> Self {
        let outcome = self.enter(to);
        let outcome = if outcome.state.dialogue().is_some() {
            outcome.push(WorldStateEventKind::DialogueCleared)
        } else {
            outcome
        };
        outcome.close_view()
    }

    pub(crate) fn defer(mut self, effect: DeferredEffect) -> Self {
        self.resolution.deferred = Some(effect);
        self
    }

    pub(crate) fn finish(self) -> Resolution {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::state_with;

    #[test]
    fn test_grant_of_held_item_is_a_no_op() {
        let state = state_with(Scene::LeftRoom, &[Item::Candle], &[]);

        let resolution = Outcome::new(&state).grant(Item::Candle).finish();

        assert!(resolution.is_empty());
    }

    #[test]
    fn test_grant_adds_acquisition_line() {
        let state = state_with(Scene::LeftRoom, &[], &[]);

        let resolution = Outcome::new(&state).grant(Item::Candle).finish();

        assert_eq!(
            resolution.changes,
            vec![
                WorldStateEventKind::ItemGranted { item: Item::Candle },
                WorldStateEventKind::say("获得了 [蜡烛]"),
            ]
        );
    }

    #[test]
    fn test_travel_clears_dialogue() {
        // Arrange
        let state = state_with(Scene::MainHall, &[], &[]);

        // Act
        let resolution = Outcome::new(&state).travel(Scene::LeftRoom).finish();

        // Assert
        assert_eq!(
            resolution.changes,
            vec![
                WorldStateEventKind::SceneChanged {
                    from: Scene::MainHall,
                    to: Scene::LeftRoom
                },
                WorldStateEventKind::DialogueCleared,
            ]
        );
    }

    #[test]
    fn test_enter_keeps_dialogue() {
        let state = state_with(Scene::AncestralHall, &[], &[]);

        let resolution = Outcome::new(&state).enter(Scene::Ending).finish();

        assert_eq!(
            resolution.changes,
            vec![WorldStateEventKind::SceneChanged {
                from: Scene::AncestralHall,
                to: Scene::Ending
            }]
        );
    }
}
