//! Domain types for the bus route planner.
//!
//! This module contains the core domain model types that represent
//! timetable data and search results. Types with invariants enforce them
//! at construction time, so code that receives a `ConnectingRoute` or a
//! `GeoPoint` can trust its validity.

mod bus;
mod error;
mod location;
mod route;
mod time;

pub use bus::{Bus, BusId, Stop};
pub use error::DomainError;
pub use location::{GeoPoint, InvalidCoordinates, Location, LocationId};
pub use route::{ConnectingRoute, RouteLeg};
pub use time::{TimeError, elapsed_minutes, parse_hhmm};
