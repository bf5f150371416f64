//! Gnomevale — World Exploration bounded context.
//!
//! Covers the map the player moves across: the location catalog, the
//! go-to-location command, and the projection that derives the player's
//! current location from the event log.

pub mod application;
pub mod domain;
