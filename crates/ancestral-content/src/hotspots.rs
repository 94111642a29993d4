//! Hotspot targets owned by each scene.
//!
//! A target identifier is only meaningful inside its scene. Parsing is
//! strict: an identifier the current scene does not own is an
//! `UnknownTarget` error, never a silent no-op.

use ancestral_core::error::DomainError;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::catalog::Scene;

/// Hotspots of the courtyard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CourtyardTarget {
    Gate,
    Wall,
    Door,
}

/// Hotspots and navigation arrows of the main hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MainHallTarget {
    Firepit,
    Desk,
    Clock,
    Chairs,
    Left,
    Right,
    Back,
}

/// Hotspots of the right room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RightRoomTarget {
    Wardrobe,
    Bedside,
    Back,
}

/// Hotspots of the left room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LeftRoomTarget {
    Vase,
    SecretDoor,
    Back,
}

/// Hotspots of the ancestral hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AncestralHallTarget {
    Drawer,
    Table,
    Back,
}

/// A target resolved against the scene that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Courtyard(CourtyardTarget),
    MainHall(MainHallTarget),
    RightRoom(RightRoomTarget),
    LeftRoom(LeftRoomTarget),
    AncestralHall(AncestralHallTarget),
}

impl Target {
    /// Parses a raw target identifier within `scene`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTarget` if the scene owns no hotspot with
    /// that identifier. The ending owns none at all.
    pub fn parse(scene: Scene, raw: &str) -> Result<Self, DomainError> {
        let unknown = || DomainError::UnknownTarget {
            scene: scene.to_string(),
            target: raw.to_owned(),
        };

        match scene {
            Scene::Courtyard => raw.parse().map(Self::Courtyard).map_err(|_| unknown()),
            Scene::MainHall => raw.parse().map(Self::MainHall).map_err(|_| unknown()),
            Scene::RightRoom => raw.parse().map(Self::RightRoom).map_err(|_| unknown()),
            Scene::LeftRoom => raw.parse().map(Self::LeftRoom).map_err(|_| unknown()),
            Scene::AncestralHall => raw.parse().map(Self::AncestralHall).map_err(|_| unknown()),
            Scene::Ending => Err(unknown()),
        }
    }
}

/// Lists the target identifiers a scene owns, in authoring order.
#[must_use]
pub fn hotspots(scene: Scene) -> Vec<&'static str> {
    match scene {
        Scene::Courtyard => CourtyardTarget::iter().map(Into::into).collect(),
        Scene::MainHall => MainHallTarget::iter().map(Into::into).collect(),
        Scene::RightRoom => RightRoomTarget::iter().map(Into::into).collect(),
        Scene::LeftRoom => LeftRoomTarget::iter().map(Into::into).collect(),
        Scene::AncestralHall => AncestralHallTarget::iter().map(Into::into).collect(),
        Scene::Ending => Vec::new(),
    }
}
