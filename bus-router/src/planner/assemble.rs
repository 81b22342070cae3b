//! Turning raw edge paths into validated, ranked connecting routes.
//!
//! The search produces paths of edges; this module times each leg,
//! rejects paths whose changes are too tight to make, and orders what
//! survives. Rejections are recorded rather than silently swallowed so
//! callers can see why a plausible chain of buses was not offered.

use std::sync::Arc;

use chrono::NaiveTime;
use thiserror::Error;
use tracing::warn;

use crate::domain::{BusId, ConnectingRoute, DomainError, RouteLeg, elapsed_minutes};
use crate::stops::StopCatalog;

use super::config::SearchConfig;
use super::estimate::edge_minutes;
use super::graph::Edge;

/// Why a candidate path did not become a route.
#[derive(Debug, Clone, Error)]
pub enum DropReason {
    /// The wait between two buses was shorter than the configured
    /// minimum connection time.
    #[error("{wait_mins} minute connection, need {required_mins}")]
    ConnectionTooTight { wait_mins: i64, required_mins: i64 },
    /// The path failed route validation.
    #[error(transparent)]
    Construction(#[from] DomainError),
}

/// A candidate path that was dropped during assembly.
#[derive(Debug, Clone)]
pub struct DroppedCandidate {
    /// The buses along the dropped path, in boarding order.
    pub buses: Vec<BusId>,
    /// Why it was dropped.
    pub reason: DropReason,
}

/// Routes that assembled cleanly plus the candidates that did not.
#[derive(Debug, Default)]
pub struct Assembly {
    /// Validated routes, unranked.
    pub routes: Vec<ConnectingRoute>,
    /// Candidates rejected during assembly.
    pub dropped: Vec<DroppedCandidate>,
}

/// Assemble candidate paths into validated routes.
///
/// Paths of fewer than two edges are not connections and are ignored
/// outright; longer paths that fail a connection-time or linkage check
/// are recorded as dropped.
pub fn assemble_routes(
    paths: Vec<Vec<Edge>>,
    stops: &StopCatalog,
    config: &SearchConfig,
) -> Assembly {
    let mut assembly = Assembly::default();
    for path in paths {
        if path.len() < 2 {
            continue;
        }
        match assemble_one(&path, stops, config) {
            Ok(route) => assembly.routes.push(route),
            Err(reason) => {
                let buses: Vec<BusId> = path.iter().map(|edge| edge.bus.id).collect();
                warn!(?buses, %reason, "dropping candidate path");
                assembly.dropped.push(DroppedCandidate { buses, reason });
            }
        }
    }
    assembly
}

fn assemble_one(
    path: &[Edge],
    stops: &StopCatalog,
    config: &SearchConfig,
) -> Result<ConnectingRoute, DropReason> {
    check_connections(path, config)?;
    let legs: Vec<RouteLeg> = path
        .iter()
        .map(|edge| {
            RouteLeg::new(
                Arc::clone(&edge.bus),
                Arc::clone(&edge.from),
                Arc::clone(&edge.to),
                edge.span,
                edge_minutes(edge, stops, config),
            )
        })
        .collect();
    Ok(ConnectingRoute::new(legs)?)
}

/// Reject changes tighter than the configured minimum. Waits wrap
/// forward across midnight, and a change with an unknown schedule on
/// either side passes.
fn check_connections(path: &[Edge], config: &SearchConfig) -> Result<(), DropReason> {
    let required_mins = config.min_connection_mins;
    if required_mins <= 0 {
        return Ok(());
    }
    for pair in path.windows(2) {
        if let (Some(arrive), Some(depart)) = (pair[0].bus.arrival, pair[1].bus.departure) {
            let wait_mins = elapsed_minutes(arrive, depart);
            if wait_mins < required_mins {
                return Err(DropReason::ConnectionTooTight {
                    wait_mins,
                    required_mins,
                });
            }
        }
    }
    Ok(())
}

/// Order routes fewest changes first, quickest first within a change
/// count.
pub fn rank_routes(routes: &mut [ConnectingRoute]) {
    routes.sort_by(|a, b| {
        a.transfer_count()
            .cmp(&b.transfer_count())
            .then_with(|| a.total_minutes().total_cmp(&b.total_minutes()))
    });
}

/// Keep routes departing at or after the given time. Routes with no
/// known departure always pass.
pub fn filter_departing_after(
    routes: Vec<ConnectingRoute>,
    after: Option<NaiveTime>,
) -> Vec<ConnectingRoute> {
    let Some(after) = after else {
        return routes;
    };
    routes
        .into_iter()
        .filter(|route| route.departure().is_none_or(|departure| departure >= after))
        .collect()
}
