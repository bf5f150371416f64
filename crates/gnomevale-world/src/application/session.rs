//! Game session — wires the gateway, the projector chain, and the held
//! state snapshot together.
//!
//! The game's interaction loop submits one command per map click, folds the
//! newly emitted events into its snapshot, and reacts only when the snapshot
//! visibly changed (for instance by opening a dialog when the player reaches
//! a particular location). This service is that loop minus the canvas.

use std::sync::Arc;

use gnomevale_core::clock::Clock;
use gnomevale_core::error::GatewayError;
use gnomevale_core::gateway::CommandGateway;
use gnomevale_core::projector::Projector;
use gnomevale_core::store::EventStore;
use uuid::Uuid;

use crate::application::command_handlers::handler_registry;
use crate::application::projectors::world_projector;
use crate::domain::commands::{GoToLocation, WorldCommand};
use crate::domain::events::WorldEvent;
use crate::domain::state::{Location, WorldState};

/// Outcome of advancing the session by one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    /// The state after folding the newly emitted events.
    pub state: WorldState,
    /// Whether the new state differs from the previous snapshot by value.
    pub changed: bool,
}

/// One player's running game: a gateway over its own event stream, the
/// composed projector chain, and the current state snapshot.
pub struct GameSession {
    store: Arc<dyn EventStore<WorldEvent>>,
    gateway: CommandGateway<WorldCommand, WorldEvent>,
    projector: Projector<WorldState, WorldEvent>,
    state: WorldState,
}

impl GameSession {
    /// Starts a session over `store` with a fresh aggregate id and the full
    /// World Exploration handler registry.
    #[must_use]
    pub fn new(store: Arc<dyn EventStore<WorldEvent>>, clock: Arc<dyn Clock>) -> Self {
        let gateway = CommandGateway::new(
            Arc::clone(&store),
            clock,
            Uuid::new_v4(),
            handler_registry(),
        );
        Self {
            store,
            gateway,
            projector: world_projector(),
            state: WorldState::start(),
        }
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Moves the player to `destination`.
    ///
    /// Submits a `GoToLocation` command, folds the emitted events into the
    /// held snapshot, and reports whether the snapshot visibly changed.
    ///
    /// # Errors
    ///
    /// Propagates `GatewayError`; the held state is untouched on failure.
    pub fn go_to(&mut self, destination: Location) -> Result<SessionUpdate, GatewayError> {
        let command = WorldCommand::GoToLocation(GoToLocation {
            correlation_id: Uuid::new_v4(),
            destination,
        });
        let events = self.gateway.handle(&command)?;

        let new_state = (self.projector)(self.state.clone(), &events);
        let changed = new_state != self.state;
        if changed {
            tracing::debug!(?new_state, "world state changed");
            self.state = new_state.clone();
        }
        Ok(SessionUpdate {
            state: new_state,
            changed,
        })
    }

    /// Recomputes the state by folding the entire event history from the
    /// start state.
    #[must_use]
    pub fn replay(&self) -> WorldState {
        (self.projector)(WorldState::start(), &self.store.find_all_events())
    }
}
