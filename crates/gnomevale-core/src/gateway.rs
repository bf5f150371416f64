//! Command gateway — routes commands to handlers and persists the results.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::clock::Clock;
use crate::command::Command;
use crate::error::{GatewayError, HandlerError, StoreError};
use crate::store::EventStore;

/// How many times a conflicting append is retried before giving up.
///
/// Handlers are pure functions of `(history, command)`, so re-running one
/// against a fresh snapshot is always safe.
const MAX_APPEND_RETRIES: u32 = 3;

/// Context passed to command handlers alongside the history and the command.
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    /// The stream all events produced through this gateway belong to.
    pub aggregate_id: Uuid,
    /// Injected clock for event timestamps.
    pub clock: &'a dyn Clock,
}

/// A pure command handler: full event history plus command in, new events
/// out. Handlers never touch the store themselves.
pub type CommandHandlerFn<C, E> = fn(&[E], &C, &HandlerContext<'_>) -> Result<Vec<E>, HandlerError>;

/// Routes commands to registered handlers and appends the events they emit.
///
/// The registry is keyed by the command's closed `Kind` enumeration. A kind
/// with no registered handler yields a typed `UnknownCommandKind` failure and
/// a handler error yields `HandlerFailed`; neither mutates the store.
pub struct CommandGateway<C: Command, E> {
    store: Arc<dyn EventStore<E>>,
    clock: Arc<dyn Clock>,
    aggregate_id: Uuid,
    handlers: HashMap<C::Kind, CommandHandlerFn<C, E>>,
}

impl<C: Command, E: Clone> CommandGateway<C, E> {
    /// Creates a gateway over `store`, owning the handler registry for one
    /// event stream. The store's lifetime is tied to the session; it is never
    /// ambient global state.
    #[must_use]
    pub fn new(
        store: Arc<dyn EventStore<E>>,
        clock: Arc<dyn Clock>,
        aggregate_id: Uuid,
        handlers: HashMap<C::Kind, CommandHandlerFn<C, E>>,
    ) -> Self {
        Self {
            store,
            clock,
            aggregate_id,
            handlers,
        }
    }

    /// Handles a single command: looks up the handler by kind, invokes it
    /// against a snapshot of the full history, appends the events it emits,
    /// and returns them.
    ///
    /// The store is mutated exactly once per successful call, after the
    /// handler has fully returned. If another writer grew the log between
    /// snapshot and append, the snapshot-handle-append sequence is retried
    /// against the fresh history.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownCommandKind`] when no handler is
    /// registered for `command.kind()`, [`GatewayError::HandlerFailed`] when
    /// the handler signals an error, and [`GatewayError::Store`] when append
    /// retries are exhausted. The store is untouched in all three cases.
    pub fn handle(&self, command: &C) -> Result<Vec<E>, GatewayError> {
        let Some(handler) = self.handlers.get(&command.kind()) else {
            tracing::warn!(
                command_type = command.command_type(),
                "no handler registered for command"
            );
            return Err(GatewayError::UnknownCommandKind {
                command_type: command.command_type(),
            });
        };

        let context = HandlerContext {
            aggregate_id: self.aggregate_id,
            clock: self.clock.as_ref(),
        };

        let mut attempts = 0;
        loop {
            let history = self.store.find_all_events();
            #[allow(clippy::cast_possible_wrap)]
            let expected_version = history.len() as i64;

            let new_events = handler(&history, command, &context).map_err(|source| {
                tracing::warn!(
                    command_type = command.command_type(),
                    error = %source,
                    "command handler failed"
                );
                GatewayError::HandlerFailed {
                    command: command.to_payload(),
                    source,
                }
            })?;

            match self.store.append_events(expected_version, &new_events) {
                Ok(()) => {
                    tracing::debug!(
                        command_type = command.command_type(),
                        count = new_events.len(),
                        "events appended"
                    );
                    return Ok(new_events);
                }
                Err(StoreError::ConcurrencyConflict { expected, actual })
                    if attempts < MAX_APPEND_RETRIES =>
                {
                    attempts += 1;
                    tracing::debug!(expected, actual, attempts, "append conflict, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
