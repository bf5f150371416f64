//! Commands for the World Exploration context.

use gnomevale_core::command::Command;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::Location;

/// Command type identifier for [`GoToLocation`].
pub const GO_TO_LOCATION_COMMAND_TYPE: &str = "world.go_to_location";

/// Command to move the player to a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoToLocation {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Where the player wants to go.
    pub destination: Location,
}

/// The closed set of command kinds in the World Exploration context.
///
/// Handler dispatch is keyed on this enumeration, so an unroutable command
/// is a typed error rather than a string-lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldCommandKind {
    /// Move the player to a location.
    GoToLocation,
}

/// Command envelope for the World Exploration context.
#[derive(Debug, Clone)]
pub enum WorldCommand {
    /// Move the player to a location.
    GoToLocation(GoToLocation),
}

impl Command for WorldCommand {
    type Kind = WorldCommandKind;

    fn kind(&self) -> WorldCommandKind {
        match self {
            Self::GoToLocation(_) => WorldCommandKind::GoToLocation,
        }
    }

    fn command_type(&self) -> &'static str {
        match self {
            Self::GoToLocation(_) => GO_TO_LOCATION_COMMAND_TYPE,
        }
    }

    fn correlation_id(&self) -> Uuid {
        match self {
            Self::GoToLocation(command) => command.correlation_id,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        match self {
            Self::GoToLocation(command) => {
                // Serialization of derived Serialize types to Value is infallible.
                serde_json::to_value(command).expect("GoToLocation serialization is infallible")
            }
        }
    }
}
