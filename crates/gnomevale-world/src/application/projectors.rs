//! Projectors for the World Exploration context.

use gnomevale_core::projector::{Projector, compose_projectors};

use crate::domain::events::{WorldEvent, WorldEventKind};
use crate::domain::state::WorldState;

/// Projects the player's current location from a batch of events.
///
/// A fold, not an incremental delta: the last `WentToLocation` in the batch
/// wins, and a batch containing none leaves the state unchanged. Replaying
/// the full history from the start state always reproduces the same
/// snapshot.
#[must_use]
pub fn location_projector() -> Projector<WorldState, WorldEvent> {
    Box::new(|state, events| {
        let destination = events.iter().rev().find_map(|event| match &event.kind {
            WorldEventKind::WentToLocation(payload) => Some(payload.location),
        });
        match destination {
            Some(location) => WorldState {
                current_location: location,
            },
            None => state,
        }
    })
}

/// The full projector chain deriving `WorldState` from events.
#[must_use]
pub fn world_projector() -> Projector<WorldState, WorldEvent> {
    compose_projectors(vec![location_projector()])
}

#[cfg(test)]
mod tests {
    use gnomevale_test_support::FixedClock;
    use uuid::Uuid;

    use crate::application::projectors::{location_projector, world_projector};
    use crate::domain::events::{WentToLocation, WorldEvent, WorldEventKind};
    use crate::domain::state::{Location, WorldState};

    fn went_to(sequence_number: i64, location: Location) -> WorldEvent {
        WorldEvent::record(
            WorldEventKind::WentToLocation(WentToLocation { location }),
            Uuid::new_v4(),
            sequence_number,
            Uuid::new_v4(),
            &FixedClock::at(2026, 3, 1, 9, 0, 0),
        )
    }

    #[test]
    fn test_location_projector_last_event_in_batch_wins() {
        // Arrange
        let events = vec![
            went_to(1, Location::GoldMine),
            went_to(2, Location::FruitsOfTheForest),
        ];

        // Act
        let state = location_projector()(WorldState::start(), &events);

        // Assert
        assert_eq!(state.current_location, Location::FruitsOfTheForest);
    }

    #[test]
    fn test_location_projector_leaves_state_unchanged_for_empty_batch() {
        // Arrange
        let state = WorldState {
            current_location: Location::GoldMine,
        };

        // Act
        let projected = location_projector()(state.clone(), &[]);

        // Assert
        assert_eq!(projected, state);
    }

    #[test]
    fn test_world_projector_replays_full_history_deterministically() {
        // Arrange
        let history = vec![
            went_to(1, Location::FisheryGround),
            went_to(2, Location::GoldMine),
            went_to(3, Location::FruitsOfTheForest),
        ];
        let projector = world_projector();

        // Act
        let first = projector(WorldState::start(), &history);
        let second = projector(WorldState::start(), &history);

        // Assert
        assert_eq!(first, second);
        assert_eq!(first.current_location, Location::FruitsOfTheForest);
    }

    #[test]
    fn test_composed_chain_matches_manual_application() {
        // Arrange
        let events = vec![went_to(1, Location::FisheryGround)];

        // Act
        let composed = world_projector()(WorldState::start(), &events);
        let manual = location_projector()(WorldState::start(), &events);

        // Assert
        assert_eq!(composed, manual);
    }
}
