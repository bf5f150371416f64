//! Command handlers for the World Exploration context.
//!
//! Handlers are pure functions of the full event history and the command;
//! the gateway persists whatever they emit.

use std::collections::HashMap;

use gnomevale_core::error::HandlerError;
use gnomevale_core::gateway::{CommandHandlerFn, HandlerContext};

use crate::domain::commands::{WorldCommand, WorldCommandKind};
use crate::domain::events::{WentToLocation, WorldEvent, WorldEventKind};

/// Builds the handler registry for the World Exploration context, one entry
/// per command kind.
#[must_use]
pub fn handler_registry() -> HashMap<WorldCommandKind, CommandHandlerFn<WorldCommand, WorldEvent>> {
    HashMap::from([(
        WorldCommandKind::GoToLocation,
        handle_go_to_location as CommandHandlerFn<WorldCommand, WorldEvent>,
    )])
}

/// Handles the `GoToLocation` command: emits one `WentToLocation` event for
/// the destination.
///
/// Any destination is accepted; the map enforces no adjacency between
/// locations.
///
/// # Errors
///
/// Never fails in the current catalog; the signature keeps failure explicit
/// for handlers that do validate.
pub fn handle_go_to_location(
    history: &[WorldEvent],
    command: &WorldCommand,
    context: &HandlerContext<'_>,
) -> Result<Vec<WorldEvent>, HandlerError> {
    match command {
        WorldCommand::GoToLocation(go) => {
            #[allow(clippy::cast_possible_wrap)]
            let sequence_number = history.len() as i64 + 1;
            Ok(vec![WorldEvent::record(
                WorldEventKind::WentToLocation(WentToLocation {
                    location: go.destination,
                }),
                context.aggregate_id,
                sequence_number,
                go.correlation_id,
                context.clock,
            )])
        }
    }
}
