//! Scenes and items of the chapter.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A navigable location. Exactly one is current at any time.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Scene {
    /// The rain-soaked courtyard where the chapter opens.
    Courtyard,
    /// The main hall with the firepit, desk, clock and chairs.
    MainHall,
    /// The bedroom to the right of the main hall.
    RightRoom,
    /// The storeroom to the left of the main hall.
    LeftRoom,
    /// The hidden hall of spirit tablets behind the left room.
    AncestralHall,
    /// The closing cutscene.
    Ending,
}

impl Scene {
    /// The scene a new session starts in.
    pub const INITIAL: Self = Self::Courtyard;

    /// Returns `true` for the scene that has no outgoing transition.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ending)
    }
}

/// A collectible token. Items have no behaviour; only presence matters.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Item {
    BurntPaper,
    Lighter,
    MirrorFragment,
    Candle,
    Key,
    SpiritTabletClock,
    SpiritTabletDrawer,
    DrawingMap,
    DrawingArrangement,
}

impl Item {
    /// The in-game name shown in the inventory bar and acquisition lines.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::BurntPaper => "烧残的纸",
            Self::Lighter => "打火机",
            Self::MirrorFragment => "铜镜碎片",
            Self::Candle => "蜡烛",
            Self::Key => "钥匙",
            Self::SpiritTabletClock => "灵牌(钟)",
            Self::SpiritTabletDrawer => "灵牌(柜)",
            Self::DrawingMap => "构造图",
            Self::DrawingArrangement => "陈列图",
        }
    }

    /// Only the two spirit tablets ever leave the inventory, when they are
    /// placed on the altar.
    #[must_use]
    pub fn is_consumable(self) -> bool {
        matches!(self, Self::SpiritTabletClock | Self::SpiritTabletDrawer)
    }
}
