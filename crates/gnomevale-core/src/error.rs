//! Error types for the event-sourcing runtime.

use thiserror::Error;

/// Errors a command handler can signal while computing new events.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Errors surfaced by an event store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Optimistic concurrency conflict: the log grew between the writer's
    /// snapshot and its append.
    #[error("concurrency conflict: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        /// The version the writer expected the log to be at.
        expected: i64,
        /// The version the log was actually at.
        actual: i64,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

/// Errors returned by the command gateway.
///
/// Every failure mode is a value here; nothing escapes a `handle` call as a
/// panic, and the store is left untouched whenever one of these is returned.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No handler is registered for the command's kind.
    #[error("no handler registered for command {command_type}")]
    UnknownCommandKind {
        /// The type name of the rejected command.
        command_type: &'static str,
    },

    /// The handler signaled an error while computing events.
    #[error("command {command} failed: {source}")]
    HandlerFailed {
        /// The serialized command, for diagnostics.
        command: serde_json::Value,
        /// The underlying handler error.
        source: HandlerError,
    },

    /// The event store rejected the append.
    #[error(transparent)]
    Store(#[from] StoreError),
}
