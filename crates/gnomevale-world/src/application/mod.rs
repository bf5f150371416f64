//! Application layer for the World Exploration context.

pub mod command_handlers;
pub mod projectors;
pub mod session;
