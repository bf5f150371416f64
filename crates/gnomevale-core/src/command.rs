//! Command abstractions.

use std::fmt::Debug;
use std::hash::Hash;

use uuid::Uuid;

/// Trait that all commands implement.
///
/// A command is an immutable request to change state, consumed once and then
/// discarded. Its `Kind` is a closed enumeration so that handler lookup is
/// checked against a finite set of variants rather than an open string space.
pub trait Command: Send + Sync + Debug {
    /// The closed set of command kinds for this command family.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync;

    /// Returns the kind used for handler dispatch.
    fn kind(&self) -> Self::Kind;

    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;

    /// Serializes the command payload to JSON (used in failure diagnostics).
    fn to_payload(&self) -> serde_json::Value;
}
