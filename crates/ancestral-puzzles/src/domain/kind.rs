//! View tags.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Names the overlay that is open on top of the scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewKind {
    /// The loose stones in the courtyard wall.
    Stones,
    /// The burnt paper from the firepit. Read-only.
    PaperClue,
    /// The rosewood desk in the main hall.
    Desk,
    /// The western clock in the main hall.
    Clock,
    /// The carved armchairs in the main hall.
    Chairs,
    /// The wardrobe box in the right room.
    Box,
    /// The drawer under the ancestral altar.
    AltarDrawer,
    /// The row of spirit tablets on the altar.
    Tablets,
}

impl ViewKind {
    /// Puzzles whose completion is reached through local play and applied
    /// after the debounce delay. The others complete on a direct click.
    #[must_use]
    pub fn is_debounced(self) -> bool {
        matches!(self, Self::Stones | Self::Clock | Self::Chairs | Self::Tablets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_debounced_views() {
        let debounced: Vec<ViewKind> = ViewKind::iter().filter(|v| v.is_debounced()).collect();

        assert_eq!(
            debounced,
            vec![
                ViewKind::Stones,
                ViewKind::Clock,
                ViewKind::Chairs,
                ViewKind::Tablets
            ]
        );
    }

    #[test]
    fn test_wire_names_match_view_tags() {
        assert_eq!(
            serde_json::to_value(ViewKind::AltarDrawer).unwrap(),
            "altar_drawer"
        );
        assert_eq!("paper_clue".parse::<ViewKind>().unwrap(), ViewKind::PaperClue);
    }
}
