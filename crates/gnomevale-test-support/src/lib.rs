//! Shared test mocks and utilities for the Gnomevale game engine.

mod clock;
mod store;
mod tracing_init;

pub use clock::FixedClock;
pub use store::{FailingEventStore, RecordingEventStore};
pub use tracing_init::init_tracing;
