//! In-memory implementation of the `EventStore` trait.

use std::sync::{Mutex, PoisonError};

use gnomevale_core::error::StoreError;
use gnomevale_core::store::EventStore;

/// Event store backed by an in-process, mutex-guarded log.
///
/// The version check and the tail extension happen under a single lock
/// acquisition, so concurrent writers cannot interleave between them.
#[derive(Debug)]
pub struct InMemoryEventStore<E> {
    events: Mutex<Vec<E>>,
}

impl<E> InMemoryEventStore<E> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<E> Default for InMemoryEventStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventStore<E> for InMemoryEventStore<E>
where
    E: Clone + Send + Sync,
{
    fn find_all_events(&self) -> Vec<E> {
        // Owned copy: a caller's snapshot must not observe later appends.
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn append_events(&self, expected_version: i64, events: &[E]) -> Result<(), StoreError> {
        let mut log = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        #[allow(clippy::cast_possible_wrap)]
        let actual = log.len() as i64;
        if actual != expected_version {
            return Err(StoreError::ConcurrencyConflict {
                expected: expected_version,
                actual,
            });
        }
        log.extend_from_slice(events);
        tracing::trace!(appended = events.len(), total = log.len(), "events appended");
        Ok(())
    }
}
