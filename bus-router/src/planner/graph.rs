//! The search graph: locations as nodes, single-bus rides as edges.
//!
//! Each bus contributes one edge per ordered pair of its stops (board at
//! any stop, alight at any later stop) plus one edge for its declared
//! origin-to-destination run. Edges never start and end at the same
//! location, so no path through the graph can revisit its own head.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Bus, BusId, Location, LocationId, Stop};
use crate::stops::StopCatalog;

/// One boardable ride: a single bus from one location to a later one.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The bus serving the ride.
    pub bus: Arc<Bus>,
    /// Boarding location.
    pub from: Arc<Location>,
    /// Alighting location.
    pub to: Arc<Location>,
    /// Stop-sequence positions covered; 0 for the declared whole-route
    /// run.
    pub span: usize,
}

/// Why a bus's stop sequence was not turned into edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Two stops claim the same sequence position.
    #[error("stop sequence repeats order {order}")]
    DuplicateStopOrder { order: u32 },
}

/// A bus whose stop sequence was rejected during graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBus {
    /// The bus affected.
    pub bus: BusId,
    /// Why its stops were skipped.
    pub reason: SkipReason,
}

/// Adjacency over locations: every ride leaving each location.
#[derive(Debug, Default)]
pub struct LocationGraph {
    edges: HashMap<LocationId, Vec<Edge>>,
}

impl LocationGraph {
    /// Edges leaving a location. Empty when no bus departs there.
    pub fn edges_from(&self, location: LocationId) -> &[Edge] {
        self.edges.get(&location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of locations with at least one outgoing edge.
    pub fn location_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// A built graph together with the buses whose stops were rejected.
#[derive(Debug, Default)]
pub struct GraphBuild {
    /// The usable graph.
    pub graph: LocationGraph,
    /// Buses whose stop sequences were skipped, with reasons.
    pub skipped: Vec<SkippedBus>,
}

/// Build the search graph from buses and their stop sequences.
///
/// A malformed stop sequence skips that bus's stop-derived edges but
/// keeps its declared whole-route edge, so the bus stays routable end
/// to end.
pub fn build_location_graph(buses: &[Arc<Bus>], stops: &StopCatalog) -> GraphBuild {
    let mut build = GraphBuild::default();
    let mut seen: HashSet<(BusId, LocationId, LocationId)> = HashSet::new();

    for bus in buses {
        let sequence = stops.stops_for(bus.id);
        match duplicate_order(sequence) {
            Some(order) => {
                warn!(bus = %bus.id, order, "skipping stops with repeated order");
                build.skipped.push(SkippedBus {
                    bus: bus.id,
                    reason: SkipReason::DuplicateStopOrder { order },
                });
            }
            None => {
                for (i, board) in sequence.iter().enumerate() {
                    for (j, alight) in sequence.iter().enumerate().skip(i + 1) {
                        push_edge(
                            &mut build.graph,
                            &mut seen,
                            Edge {
                                bus: Arc::clone(bus),
                                from: Arc::clone(&board.location),
                                to: Arc::clone(&alight.location),
                                span: j - i,
                            },
                        );
                    }
                }
            }
        }

        // Declared run last, so a duplicate of a stop-derived ride
        // dedups away and keeps its span.
        if let (Some(origin), Some(destination)) = (&bus.origin, &bus.destination) {
            push_edge(
                &mut build.graph,
                &mut seen,
                Edge {
                    bus: Arc::clone(bus),
                    from: Arc::clone(origin),
                    to: Arc::clone(destination),
                    span: 0,
                },
            );
        }
    }

    debug!(
        buses = buses.len(),
        locations = build.graph.location_count(),
        edges = build.graph.edge_count(),
        skipped = build.skipped.len(),
        "built location graph"
    );
    build
}

/// One edge per (bus, from, to); later duplicates are dropped.
fn push_edge(
    graph: &mut LocationGraph,
    seen: &mut HashSet<(BusId, LocationId, LocationId)>,
    edge: Edge,
) {
    // Stop lists can revisit a location; never emit a self-loop.
    if edge.from.id == edge.to.id {
        return;
    }
    if !seen.insert((edge.bus.id, edge.from.id, edge.to.id)) {
        return;
    }
    graph.edges.entry(edge.from.id).or_default().push(edge);
}

/// First stop order that appears twice, if any. Sequences are sorted,
/// so equal orders sit next to each other.
fn duplicate_order(sequence: &[Stop]) -> Option<u32> {
    sequence
        .windows(2)
        .find(|pair| pair[0].order == pair[1].order)
        .map(|pair| pair[0].order)
}
