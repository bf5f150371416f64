//! Domain events for the World Exploration context.

use gnomevale_core::clock::Clock;
use gnomevale_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::Location;

/// Event type identifier for [`WentToLocation`].
pub const WENT_TO_LOCATION_EVENT_TYPE: &str = "world.went_to_location";

/// Emitted when the player has moved to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WentToLocation {
    /// Where the player ended up.
    pub location: Location,
}

/// Event payload variants for the World Exploration context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEventKind {
    /// The player has moved to a location.
    WentToLocation(WentToLocation),
}

impl WorldEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::WentToLocation(_) => WENT_TO_LOCATION_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the World Exploration context.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: WorldEventKind,
}

impl WorldEvent {
    /// Records a new event at `sequence_number` in the stream, stamped with
    /// the injected clock.
    #[must_use]
    pub fn record(
        kind: WorldEventKind,
        aggregate_id: Uuid,
        sequence_number: i64,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Self {
        let metadata = EventMetadata {
            event_id: Uuid::new_v4(),
            event_type: kind.event_type().to_owned(),
            aggregate_id,
            sequence_number,
            correlation_id,
            causation_id: correlation_id,
            occurred_at: clock.now(),
        };
        Self { metadata, kind }
    }
}

impl DomainEvent for WorldEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("WorldEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
