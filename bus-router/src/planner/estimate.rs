//! Duration estimates for single rides.
//!
//! A ride with a published schedule is timed from its schedule, pro-rated
//! when the ride covers only part of the stop sequence. Without a
//! schedule the estimate falls back to distance at an assumed coach
//! speed, measured great-circle when both ends have coordinates and by
//! stop spacing otherwise.

use crate::domain::elapsed_minutes;
use crate::stops::StopCatalog;

use super::config::SearchConfig;
use super::graph::Edge;

/// Estimated riding time for one edge, in minutes.
pub fn edge_minutes(edge: &Edge, stops: &StopCatalog, config: &SearchConfig) -> f64 {
    match (edge.bus.departure, edge.bus.arrival) {
        (Some(departure), Some(arrival)) => {
            let mut minutes = elapsed_minutes(departure, arrival) as f64;
            if edge.span > 0 {
                let total = stops.stop_count(edge.bus.id);
                if total > 0 {
                    minutes = minutes * edge.span as f64 / total as f64;
                }
            }
            minutes
        }
        _ => estimate_km(edge, config) / config.average_speed_kmh * 60.0,
    }
}

/// Estimated ride length in km, for edges without a schedule.
fn estimate_km(edge: &Edge, config: &SearchConfig) -> f64 {
    if edge.span > 0 {
        return edge.span as f64 * config.km_per_stop;
    }
    match (edge.from.position, edge.to.position) {
        (Some(from), Some(to)) => from.distance_km(&to),
        _ => config.km_per_stop,
    }
}


#[cfg(test)]
mod proptests {
    use std::sync::Arc;

    use chrono::NaiveTime;
    use proptest::prelude::*;

    use super::*;
    use crate::domain::{Bus, BusId, Location, LocationId};

    fn time_strategy() -> impl Strategy<Value = NaiveTime> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn catalog_with(stop_count: usize) -> StopCatalog {
        let mut builder = StopCatalog::builder();
        for i in 0..stop_count {
            let location = Arc::new(Location::new(LocationId(100 + i as u64), format!("Stop {i}")));
            builder = builder.stop(BusId(1), location, i as u32 + 1);
        }
        builder.build()
    }

    proptest! {
        #[test]
        fn estimate_is_finite_and_non_negative(
            schedule in proptest::option::of((time_strategy(), time_strategy())),
            span in 0usize..6,
            stop_count in 0usize..6,
        ) {
            let mut bus = Bus::new(BusId(1), "Bus", "1");
            if let Some((departure, arrival)) = schedule {
                bus.departure = Some(departure);
                bus.arrival = Some(arrival);
            }
            let edge = Edge {
                bus: Arc::new(bus),
                from: Arc::new(Location::new(LocationId(1), "A")),
                to: Arc::new(Location::new(LocationId(2), "B")),
                span,
            };

            let minutes = edge_minutes(&edge, &catalog_with(stop_count), &SearchConfig::default());

            prop_assert!(minutes.is_finite());
            prop_assert!(minutes >= 0.0);
        }

        #[test]
        fn whole_route_schedule_is_never_scaled(
            departure in time_strategy(),
            arrival in time_strategy(),
            stop_count in 0usize..6,
        ) {
            let mut bus = Bus::new(BusId(1), "Bus", "1");
            bus.departure = Some(departure);
            bus.arrival = Some(arrival);
            let edge = Edge {
                bus: Arc::new(bus),
                from: Arc::new(Location::new(LocationId(1), "A")),
                to: Arc::new(Location::new(LocationId(2), "B")),
                span: 0,
            };

            let minutes = edge_minutes(&edge, &catalog_with(stop_count), &SearchConfig::default());

            prop_assert_eq!(minutes, crate::domain::elapsed_minutes(departure, arrival) as f64);
        }
    }
}
