//! Progress flags.

use std::collections::BTreeSet;

use ancestral_puzzles::ViewKind;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A boolean progress marker. All start lowered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Flag {
    HasSeenBlackout,
    /// Part of the vocabulary, never raised.
    DoorUnlocked,
    BoxUnlocked,
    ClockSolved,
    ChairsSolved,
    SecretDoorOpen,
    TabletsArranged,
    MirrorRepaired,
    CandlesLit,
    JumpscareTriggered,
    HasFoundChairKey,
    HasPlacedTabletClock,
    HasPlacedTabletDrawer,
}

impl Flag {
    /// The flag that records the completion of a view's puzzle, if any.
    #[must_use]
    pub fn completed_by(view: ViewKind) -> Option<Self> {
        match view {
            ViewKind::Stones => Some(Self::HasSeenBlackout),
            ViewKind::Clock => Some(Self::ClockSolved),
            ViewKind::Chairs => Some(Self::ChairsSolved),
            ViewKind::Box => Some(Self::BoxUnlocked),
            ViewKind::Tablets => Some(Self::TabletsArranged),
            ViewKind::PaperClue | ViewKind::Desk | ViewKind::AltarDrawer => None,
        }
    }
}

/// The set of raised flags. Flags can be raised but never lowered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Flags {
    raised: BTreeSet<Flag>,
}

impl Flags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises `flag`. Returns `false` if it was already raised.
    pub fn raise(&mut self, flag: Flag) -> bool {
        self.raised.insert(flag)
    }

    #[must_use]
    pub fn is_raised(&self, flag: Flag) -> bool {
        self.raised.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.raised.iter().copied()
    }
}
