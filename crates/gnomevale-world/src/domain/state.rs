//! Game state for the World Exploration context.

use serde::{Deserialize, Serialize};

/// The closed set of places a player can be, plus a sentinel for "nowhere"
/// (a click that hits no location token resolves to `None`).
///
/// Adding a location to the game means adding a variant here and laying out
/// its token; the gateway and the projectors are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// No location; the sentinel value.
    None,
    /// The gnome's hut, where every game starts.
    GnomesHut,
    /// The fishery ground.
    FisheryGround,
    /// The gold mine.
    GoldMine,
    /// The fruits of the forest.
    FruitsOfTheForest,
}

/// Snapshot of the world as the player sees it.
///
/// Derives `PartialEq` so callers can compare an old snapshot against a new
/// one by value and react only to visible changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    /// Where the player currently is.
    pub current_location: Location,
}

impl WorldState {
    /// The state every new game starts from.
    #[must_use]
    pub fn start() -> Self {
        Self {
            current_location: Location::GnomesHut,
        }
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::start()
    }
}
