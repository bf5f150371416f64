//! Test stores — mock `EventStore` implementations for tests.

use std::sync::{Mutex, PoisonError};

use gnomevale_core::error::StoreError;
use gnomevale_core::store::EventStore;

/// An event store that keeps a real log and records every `append_events`
/// call, including the `expected_version` it was given. Appends always
/// succeed regardless of the expected version.
#[derive(Debug)]
pub struct RecordingEventStore<E> {
    log: Mutex<Vec<E>>,
    appends: Mutex<Vec<(i64, Vec<E>)>>,
}

impl<E> RecordingEventStore<E> {
    /// Creates an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            appends: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store pre-seeded with `events`.
    #[must_use]
    pub fn with_events(events: Vec<E>) -> Self {
        Self {
            log: Mutex::new(events),
            appends: Mutex::new(Vec::new()),
        }
    }
}

impl<E: Clone> RecordingEventStore<E> {
    /// Returns every `(expected_version, events)` pair passed to
    /// `append_events`, in call order.
    pub fn appended(&self) -> Vec<(i64, Vec<E>)> {
        self.appends
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<E> Default for RecordingEventStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventStore<E> for RecordingEventStore<E>
where
    E: Clone + Send + Sync,
{
    fn find_all_events(&self) -> Vec<E> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn append_events(&self, expected_version: i64, events: &[E]) -> Result<(), StoreError> {
        self.appends
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((expected_version, events.to_vec()));
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(events);
        Ok(())
    }
}

/// An event store whose appends always fail with an infrastructure error.
/// Reads succeed and report an empty log. Useful for error-handling paths.
#[derive(Debug, Default)]
pub struct FailingEventStore;

impl<E> EventStore<E> for FailingEventStore {
    fn find_all_events(&self) -> Vec<E> {
        Vec::new()
    }

    fn append_events(&self, _expected_version: i64, _events: &[E]) -> Result<(), StoreError> {
        Err(StoreError::Infrastructure("store unavailable".into()))
    }
}
