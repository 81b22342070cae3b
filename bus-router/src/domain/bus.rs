//! Bus timetable types.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;

use super::Location;

/// Identity of a scheduled bus run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusId(pub u64);

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled bus run in the network snapshot.
///
/// A bus runs between a declared origin and destination, optionally
/// calling at ordered intermediate stops (held separately, see
/// [`StopCatalog`](crate::stops::StopCatalog)). Endpoints and times are
/// optional because contributed timetable data is often incomplete; the
/// engine degrades per field rather than rejecting the record.
#[derive(Debug, Clone)]
pub struct Bus {
    /// Stable identity.
    pub id: BusId,
    /// Display name, e.g. "Chennai Express".
    pub name: String,
    /// Route number as painted on the bus, e.g. "102A".
    pub number: String,
    /// Declared first location of the run.
    pub origin: Option<Arc<Location>>,
    /// Declared last location of the run.
    pub destination: Option<Arc<Location>>,
    /// Scheduled departure time-of-day from the origin.
    pub departure: Option<NaiveTime>,
    /// Scheduled arrival time-of-day at the destination.
    pub arrival: Option<NaiveTime>,
}

impl Bus {
    /// Create a bus with no endpoints or times; set fields as known.
    pub fn new(id: BusId, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
            origin: None,
            destination: None,
            departure: None,
            arrival: None,
        }
    }
}

/// One entry of a bus's ordered stop sequence.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Where the bus calls.
    pub location: Arc<Location>,
    /// Position in the bus's stop sequence; lower is earlier.
    pub order: u32,
}

impl Stop {
    /// Create a stop.
    pub fn new(location: Arc<Location>, order: u32) -> Self {
        Self { location, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationId;

    #[test]
    fn bus_id_display() {
        assert_eq!(BusId(102).to_string(), "102");
    }

    #[test]
    fn new_bus_has_no_schedule() {
        let bus = Bus::new(BusId(1), "Chennai Express", "102A");
        assert_eq!(bus.id, BusId(1));
        assert_eq!(bus.name, "Chennai Express");
        assert_eq!(bus.number, "102A");
        assert!(bus.origin.is_none());
        assert!(bus.destination.is_none());
        assert!(bus.departure.is_none());
        assert!(bus.arrival.is_none());
    }

    #[test]
    fn stop_holds_location_and_order() {
        let location = Arc::new(Location::new(LocationId(5), "Vellore"));
        let stop = Stop::new(Arc::clone(&location), 3);
        assert_eq!(stop.location.id, LocationId(5));
        assert_eq!(stop.order, 3);
    }
}
