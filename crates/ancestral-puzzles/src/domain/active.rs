//! The open overlay and its completion latch.

use ancestral_core::error::DomainError;

use super::chairs::ChairsPuzzle;
use super::clock::ClockPuzzle;
use super::drawer::DrawerToggle;
use super::input::{InputOutcome, PuzzleInput, PuzzlePayload};
use super::kind::ViewKind;
use super::stones::StonesPuzzle;
use super::tablets::{TabletClick, TabletsPuzzle};

/// Local state of each overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Stones(StonesPuzzle),
    PaperClue,
    Desk(DrawerToggle),
    Clock(ClockPuzzle),
    Chairs(ChairsPuzzle),
    Box,
    AltarDrawer(DrawerToggle),
    Tablets(TabletsPuzzle),
}

impl ViewState {
    fn fresh(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Stones => Self::Stones(StonesPuzzle::new()),
            ViewKind::PaperClue => Self::PaperClue,
            ViewKind::Desk => Self::Desk(DrawerToggle::default()),
            ViewKind::Clock => Self::Clock(ClockPuzzle::new()),
            ViewKind::Chairs => Self::Chairs(ChairsPuzzle::new()),
            ViewKind::Box => Self::Box,
            ViewKind::AltarDrawer => Self::AltarDrawer(DrawerToggle::default()),
            ViewKind::Tablets => Self::Tablets(TabletsPuzzle::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Stones(_) => ViewKind::Stones,
            Self::PaperClue => ViewKind::PaperClue,
            Self::Desk(_) => ViewKind::Desk,
            Self::Clock(_) => ViewKind::Clock,
            Self::Chairs(_) => ViewKind::Chairs,
            Self::Box => ViewKind::Box,
            Self::AltarDrawer(_) => ViewKind::AltarDrawer,
            Self::Tablets(_) => ViewKind::Tablets,
        }
    }
}

/// Completion fires at most once per opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionLatch {
    Armed,
    Fired,
    /// The puzzle was already solved when the view opened.
    Suppressed,
}

/// An open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
    state: ViewState,
    latch: CompletionLatch,
}

impl ActiveView {
    /// Opens `kind` with fresh local state. When `already_solved` is set the
    /// view can be played with but never reports completion.
    #[must_use]
    pub fn open(kind: ViewKind, already_solved: bool) -> Self {
        Self {
            state: ViewState::fresh(kind),
            latch: if already_solved {
                CompletionLatch::Suppressed
            } else {
                CompletionLatch::Armed
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.state.kind()
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn latch(&self) -> CompletionLatch {
        self.latch
    }

    /// Local solved-predicate. Always `false` for views that complete on a
    /// click rather than through play.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match &self.state {
            ViewState::Stones(stones) => stones.is_solved(),
            ViewState::Clock(clock) => clock.is_solved(),
            ViewState::Chairs(chairs) => chairs.is_solved(),
            ViewState::Tablets(tablets) => tablets.is_solved(),
            ViewState::PaperClue | ViewState::Desk(_) | ViewState::Box | ViewState::AltarDrawer(_) => {
                false
            }
        }
    }

    /// Feeds one renderer click to the local machine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the input does not belong to this
    /// view or carries an out-of-range index.
    pub fn apply_input(&mut self, input: PuzzleInput) -> Result<InputOutcome, DomainError> {
        let kind = self.kind();
        match (&mut self.state, input) {
            (ViewState::Clock(clock), PuzzleInput::HourUp) => clock.hour_up(),
            (ViewState::Clock(clock), PuzzleInput::HourDown) => clock.hour_down(),
            (ViewState::Clock(clock), PuzzleInput::MinuteUp) => clock.minute_up(),
            (ViewState::Clock(clock), PuzzleInput::MinuteDown) => clock.minute_down(),
            (ViewState::Stones(stones), PuzzleInput::Stone { index }) => stones.click(index)?,
            (ViewState::Chairs(chairs), PuzzleInput::Chair { index }) => chairs.click(index)?,
            (ViewState::Tablets(tablets), PuzzleInput::TabletSlot { index }) => {
                return Ok(match tablets.click(index)? {
                    TabletClick::PlaceRequested { index } => InputOutcome::CompletionRequested(
                        Some(PuzzlePayload::PlaceTablet { index }),
                    ),
                    TabletClick::Swapped => InputOutcome::Updated,
                    TabletClick::Ignored => InputOutcome::Ignored,
                });
            }
            (ViewState::Box, PuzzleInput::OpenBox)
            | (ViewState::Desk(_) | ViewState::AltarDrawer(_), PuzzleInput::TakeReveal) => {
                return Ok(InputOutcome::CompletionRequested(None));
            }
            (ViewState::Desk(drawer) | ViewState::AltarDrawer(drawer), PuzzleInput::ToggleDrawer) => {
                drawer.toggle();
            }
            (_, input) => {
                return Err(DomainError::Validation(format!(
                    "input {} does not apply to the {kind} view",
                    input.name()
                )));
            }
        }
        Ok(InputOutcome::Updated)
    }

    /// Returns `true` exactly once, the first time the solved-predicate is
    /// observed to hold while armed.
    pub fn poll_completion(&mut self) -> bool {
        if self.latch == CompletionLatch::Armed && self.is_solved() {
            self.latch = CompletionLatch::Fired;
            return true;
        }
        false
    }

    /// Stops any further completion from this opening.
    pub fn disarm(&mut self) {
        if self.latch == CompletionLatch::Armed {
            self.latch = CompletionLatch::Fired;
        }
    }

    /// Back-fills tablet slots from the placement flags. No-op for other views.
    pub fn sync_tablet_placements(&mut self, clock_placed: bool, drawer_placed: bool) -> bool {
        match &mut self.state {
            ViewState::Tablets(tablets) => tablets.sync_placements(clock_placed, drawer_placed),
            _ => false,
        }
    }
}
