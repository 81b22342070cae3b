//! Connecting route result types.
//!
//! A `ConnectingRoute` is a validated multi-bus itinerary: the answer
//! when no single bus serves a journey but a chain of buses does. Routes
//! are assembled by the planner and handed to callers read-only.

use std::sync::Arc;

use chrono::NaiveTime;

use super::time::elapsed_minutes;
use super::{Bus, DomainError, Location};

/// One bus ride within a connecting route.
///
/// The board and alight locations may be intermediate stops rather than
/// the bus's declared endpoints; `span` records how much of the stop
/// sequence the ride covers.
#[derive(Debug, Clone)]
pub struct RouteLeg {
    /// The bus to ride.
    pub bus: Arc<Bus>,
    /// Where to board.
    pub from: Arc<Location>,
    /// Where to alight.
    pub to: Arc<Location>,
    /// Stop-sequence positions covered; 0 when the ride is the bus's
    /// whole declared route.
    pub span: usize,
    /// Estimated riding time in minutes.
    pub minutes: f64,
}

impl RouteLeg {
    /// Create a leg.
    pub fn new(
        bus: Arc<Bus>,
        from: Arc<Location>,
        to: Arc<Location>,
        span: usize,
        minutes: f64,
    ) -> Self {
        Self {
            bus,
            from,
            to,
            span,
            minutes,
        }
    }

    /// Scheduled departure of the bus serving this leg.
    pub fn departure(&self) -> Option<NaiveTime> {
        self.bus.departure
    }

    /// Scheduled arrival of the bus serving this leg.
    pub fn arrival(&self) -> Option<NaiveTime> {
        self.bus.arrival
    }
}

/// A validated multi-bus itinerary from an origin to a destination.
///
/// # Invariants
///
/// - At least two legs (a one-bus trip is a direct match, found by a
///   separate direct search)
/// - Consecutive legs connect: each alighting location is the next leg's
///   boarding location
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use bus_router::domain::{Bus, BusId, ConnectingRoute, Location, LocationId, RouteLeg, parse_hhmm};
///
/// let chennai = Arc::new(Location::new(LocationId(1), "Chennai"));
/// let trichy = Arc::new(Location::new(LocationId(2), "Trichy"));
/// let madurai = Arc::new(Location::new(LocationId(3), "Madurai"));
///
/// let mut x = Bus::new(BusId(1), "Chennai Express", "102");
/// x.departure = Some(parse_hhmm("09:00").unwrap());
/// x.arrival = Some(parse_hhmm("14:00").unwrap());
///
/// let mut y = Bus::new(BusId(2), "Madurai Special", "205");
/// y.departure = Some(parse_hhmm("14:30").unwrap());
/// y.arrival = Some(parse_hhmm("16:00").unwrap());
///
/// let route = ConnectingRoute::new(vec![
///     RouteLeg::new(Arc::new(x), chennai, Arc::clone(&trichy), 0, 300.0),
///     RouteLeg::new(Arc::new(y), trichy, madurai, 0, 90.0),
/// ])
/// .unwrap();
///
/// assert_eq!(route.transfer_count(), 1);
/// assert_eq!(route.departure(), Some(parse_hhmm("09:00").unwrap()));
/// assert_eq!(route.arrival(), Some(parse_hhmm("16:00").unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectingRoute {
    legs: Vec<RouteLeg>,
}

impl ConnectingRoute {
    /// Construct a route from legs in boarding order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fewer than two legs are given, or if any pair of
    /// consecutive legs does not share a transfer location.
    pub fn new(legs: Vec<RouteLeg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        if legs.len() < 2 {
            return Err(DomainError::SingleLeg);
        }

        for window in legs.windows(2) {
            let alight = window[0].to.id;
            let board = window[1].from.id;
            if alight != board {
                return Err(DomainError::LegsNotLinked(alight, board));
            }
        }

        Ok(ConnectingRoute { legs })
    }

    /// Legs in boarding order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Number of buses boarded.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Number of bus changes (always one less than the leg count).
    pub fn transfer_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Where the journey starts.
    pub fn origin(&self) -> &Arc<Location> {
        // Safe: validated non-empty at construction
        &self.legs.first().unwrap().from
    }

    /// Where the journey ends.
    pub fn destination(&self) -> &Arc<Location> {
        // Safe: validated non-empty at construction
        &self.legs.last().unwrap().to
    }

    /// Scheduled departure of the first bus, when known.
    pub fn departure(&self) -> Option<NaiveTime> {
        // Safe: validated non-empty at construction
        self.legs.first().unwrap().departure()
    }

    /// Scheduled arrival of the last bus, when known.
    pub fn arrival(&self) -> Option<NaiveTime> {
        // Safe: validated non-empty at construction
        self.legs.last().unwrap().arrival()
    }

    /// Sum of estimated leg minutes. Riding time only; waits at transfer
    /// points are not included.
    pub fn total_minutes(&self) -> f64 {
        self.legs.iter().map(|leg| leg.minutes).sum()
    }

    /// The buses boarded, in order.
    pub fn buses(&self) -> impl Iterator<Item = &Arc<Bus>> {
        self.legs.iter().map(|leg| &leg.bus)
    }

    /// Wait in minutes at each change, `None` where either side's
    /// schedule is unknown. Waits wrap forward across midnight, so an
    /// arrival at 23:50 followed by a departure at 00:10 is a twenty
    /// minute wait.
    pub fn transfer_waits(&self) -> Vec<Option<i64>> {
        self.legs
            .windows(2)
            .map(|pair| match (pair[0].arrival(), pair[1].departure()) {
                (Some(arrive), Some(depart)) => Some(elapsed_minutes(arrive, depart)),
                _ => None,
            })
            .collect()
    }
}
