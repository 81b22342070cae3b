//! Domain error types.
//!
//! These errors represent validation failures in route construction. They
//! are distinct from the per-item skip and drop reports the planner
//! aggregates during a search.

use super::LocationId;

/// Domain-level errors for route validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no legs at all
    #[error("route must have at least one leg")]
    EmptyRoute,

    /// A one-bus trip is a direct match, not a connection
    #[error("connecting route requires at least two buses")]
    SingleLeg,

    /// Consecutive legs don't share a transfer location
    #[error("legs do not connect: alighting at location {0} but boarding at {1}")]
    LegsNotLinked(LocationId, LocationId),
}
