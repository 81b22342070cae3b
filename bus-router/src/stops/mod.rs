//! Stop sequences for buses.
//!
//! A bus's declared origin and destination tell you where it starts and
//! ends; the stop catalog tells you everywhere it calls in between. The
//! planner uses stop sequences both to derive board-anywhere edges for
//! the search graph and to pro-rate durations over partial rides.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{BusId, Location, Stop};

/// Stop sequences keyed by bus, each held in ascending stop order.
#[derive(Debug, Clone, Default)]
pub struct StopCatalog {
    stops: HashMap<BusId, Vec<Stop>>,
}

impl StopCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the stop sequence for a bus, replacing any existing one.
    /// Stops are kept sorted by their order field.
    pub fn insert(&mut self, bus: BusId, mut stops: Vec<Stop>) {
        stops.sort_by_key(|stop| stop.order);
        self.stops.insert(bus, stops);
    }

    /// The stop sequence for a bus, in ascending order. Empty when the
    /// bus has no recorded stops.
    pub fn stops_for(&self, bus: BusId) -> &[Stop] {
        self.stops.get(&bus).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of stops recorded for a bus.
    pub fn stop_count(&self, bus: BusId) -> usize {
        self.stops_for(bus).len()
    }

    /// Number of buses with at least one recorded stop.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether no bus has recorded stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Start building a catalog stop by stop.
    pub fn builder() -> StopCatalogBuilder {
        StopCatalogBuilder::default()
    }
}

/// Builder for [`StopCatalog`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use bus_router::domain::{BusId, Location, LocationId};
/// use bus_router::stops::StopCatalog;
///
/// let chennai = Arc::new(Location::new(LocationId(1), "Chennai"));
/// let trichy = Arc::new(Location::new(LocationId(2), "Trichy"));
///
/// let catalog = StopCatalog::builder()
///     .stop(BusId(1), Arc::clone(&chennai), 1)
///     .stop(BusId(1), Arc::clone(&trichy), 2)
///     .build();
///
/// assert_eq!(catalog.stop_count(BusId(1)), 2);
/// assert!(catalog.stops_for(BusId(2)).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StopCatalogBuilder {
    stops: HashMap<BusId, Vec<Stop>>,
}

impl StopCatalogBuilder {
    /// Add one stop to a bus's sequence. Stops may be added in any
    /// order; the built catalog sorts each sequence.
    pub fn stop(mut self, bus: BusId, location: Arc<Location>, order: u32) -> Self {
        self.stops
            .entry(bus)
            .or_default()
            .push(Stop::new(location, order));
        self
    }

    /// Finish building.
    pub fn build(self) -> StopCatalog {
        let mut catalog = StopCatalog::new();
        for (bus, stops) in self.stops {
            catalog.insert(bus, stops);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationId;

    fn loc(id: u64, name: &str) -> Arc<Location> {
        Arc::new(Location::new(LocationId(id), name))
    }

    #[test]
    fn stops_come_back_in_order() {
        let catalog = StopCatalog::builder()
            .stop(BusId(1), loc(3, "Madurai"), 3)
            .stop(BusId(1), loc(1, "Chennai"), 1)
            .stop(BusId(1), loc(2, "Trichy"), 2)
            .build();

        let orders: Vec<u32> = catalog
            .stops_for(BusId(1))
            .iter()
            .map(|stop| stop.order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn unknown_bus_has_no_stops() {
        let catalog = StopCatalog::new();
        assert!(catalog.stops_for(BusId(99)).is_empty());
        assert_eq!(catalog.stop_count(BusId(99)), 0);
    }

    #[test]
    fn insert_replaces_existing_sequence() {
        let mut catalog = StopCatalog::new();
        catalog.insert(
            BusId(1),
            vec![Stop::new(loc(1, "Chennai"), 1), Stop::new(loc(2, "Trichy"), 2)],
        );
        catalog.insert(BusId(1), vec![Stop::new(loc(3, "Madurai"), 1)]);

        assert_eq!(catalog.stop_count(BusId(1)), 1);
        assert_eq!(catalog.stops_for(BusId(1))[0].location.id, LocationId(3));
    }

    #[test]
    fn builder_tracks_buses_independently() {
        let catalog = StopCatalog::builder()
            .stop(BusId(1), loc(1, "Chennai"), 1)
            .stop(BusId(2), loc(2, "Trichy"), 1)
            .stop(BusId(1), loc(3, "Madurai"), 2)
            .build();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stop_count(BusId(1)), 2);
        assert_eq!(catalog.stop_count(BusId(2)), 1);
    }
}
