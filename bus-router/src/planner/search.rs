//! Breadth-first search for connecting routes.
//!
//! The planner walks the ride graph breadth-first from the origin and
//! hands completed paths to assembly. Paths never revisit a location
//! they have already boarded at. Expansion stops once a path cannot
//! beat the shortest completed one, so the walk finishes even on
//! cyclic networks.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveTime;
use tracing::{debug, trace};

use crate::domain::{Bus, ConnectingRoute, Location, LocationId};
use crate::stops::StopCatalog;

use super::assemble::{DroppedCandidate, assemble_routes, filter_departing_after, rank_routes};
use super::config::SearchConfig;
use super::graph::{Edge, LocationGraph, SkippedBus, build_location_graph};

/// A search for connecting routes between two locations.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Where the journey starts.
    pub origin: Arc<Location>,

    /// Where the journey ends.
    pub destination: Arc<Location>,

    /// Cap on bus changes for this search; falls back to the configured
    /// default when unset.
    pub max_transfers: Option<usize>,

    /// Only offer routes departing at or after this time.
    pub departure_after: Option<NaiveTime>,
}

impl SearchRequest {
    /// A search with no per-request overrides.
    pub fn new(origin: Arc<Location>, destination: Arc<Location>) -> Self {
        Self {
            origin,
            destination,
            max_transfers: None,
            departure_after: None,
        }
    }
}

/// The outcome of a search.
///
/// A search that finds nothing is still a successful search; the
/// diagnostic fields say what was examined and what was rejected along
/// the way.
#[derive(Debug, Default)]
pub struct SearchResult {
    /// Ranked routes, best first.
    pub routes: Vec<ConnectingRoute>,

    /// Number of partial paths the search examined.
    pub paths_explored: usize,

    /// Buses whose stop sequences were unusable.
    pub skipped: Vec<SkippedBus>,

    /// Candidate paths rejected during assembly.
    pub dropped: Vec<DroppedCandidate>,
}

impl SearchResult {
    /// A result with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Finds connecting routes across a fleet of buses.
#[derive(Debug)]
pub struct Planner<'a> {
    buses: &'a [Arc<Bus>],
    stops: &'a StopCatalog,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// A planner over the given fleet and stop data.
    pub fn new(buses: &'a [Arc<Bus>], stops: &'a StopCatalog, config: &'a SearchConfig) -> Self {
        Self {
            buses,
            stops,
            config,
        }
    }

    /// Find ranked connecting routes for a request.
    ///
    /// Searching never fails: an unreachable destination, an origin
    /// equal to the destination, or a fleet with no usable buses all
    /// come back as an empty result.
    pub fn find_routes(&self, request: &SearchRequest) -> SearchResult {
        let max_transfers = request.max_transfers.unwrap_or(self.config.max_transfers);
        // A route of N buses makes N - 1 changes.
        let max_edges = max_transfers + 1;

        debug!(
            origin = %request.origin.id,
            destination = %request.destination.id,
            max_transfers,
            "searching for connecting routes"
        );

        if request.origin.id == request.destination.id {
            return SearchResult::empty();
        }

        let build = build_location_graph(self.buses, self.stops);
        let (paths, paths_explored) = find_paths(
            &build.graph,
            request.origin.id,
            request.destination.id,
            max_edges,
        );

        let assembly = assemble_routes(paths, self.stops, self.config);
        let mut routes = filter_departing_after(assembly.routes, request.departure_after);
        rank_routes(&mut routes);
        routes.truncate(self.config.max_results);

        debug!(
            routes = routes.len(),
            paths_explored,
            dropped = assembly.dropped.len(),
            skipped = build.skipped.len(),
            "search finished"
        );

        SearchResult {
            routes,
            paths_explored,
            skipped: build.skipped,
            dropped: assembly.dropped,
        }
    }
}

/// One hop on a candidate path. Steps live in an arena and link back to
/// their parent, so partial paths share their common prefix instead of
/// copying it.
#[derive(Debug, Clone, Copy)]
struct PathStep<'g> {
    edge: &'g Edge,
    parent: Option<usize>,
    depth: usize,
}

/// Breadth-first search for edge paths from `origin` to `destination`
/// of at most `max_edges` edges. Returns the completed paths and the
/// number of partial paths examined.
fn find_paths(
    graph: &LocationGraph,
    origin: LocationId,
    destination: LocationId,
    max_edges: usize,
) -> (Vec<Vec<Edge>>, usize) {
    let mut arena: Vec<PathStep<'_>> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut completed: Vec<usize> = Vec::new();
    let mut shortest = usize::MAX;

    for edge in graph.edges_from(origin) {
        arena.push(PathStep {
            edge,
            parent: None,
            depth: 1,
        });
        queue.push_back(arena.len() - 1);
    }

    let mut examined = 0;
    while let Some(index) = queue.pop_front() {
        examined += 1;
        let step = arena[index];
        trace!(head = %step.edge.to.id, depth = step.depth, "expanding path");

        // Destination check first: paths equal in length to the
        // shortest completed one still count.
        if step.edge.to.id == destination {
            shortest = shortest.min(step.depth);
            completed.push(index);
            continue;
        }
        if step.depth >= max_edges {
            continue;
        }
        if step.depth >= shortest {
            continue;
        }

        for edge in graph.edges_from(step.edge.to.id) {
            if visits_ancestor(&arena, index, edge.to.id) {
                continue;
            }
            arena.push(PathStep {
                edge,
                parent: Some(index),
                depth: step.depth + 1,
            });
            queue.push_back(arena.len() - 1);
        }
    }

    let paths = completed
        .iter()
        .map(|&index| materialize(&arena, index))
        .collect();
    (paths, examined)
}

/// Whether `location` is the boarding side of any edge on the path
/// ending at `index`. Alighting sides need no check: edges never loop,
/// so the head cannot equal its own boarding location.
fn visits_ancestor(arena: &[PathStep<'_>], index: usize, location: LocationId) -> bool {
    let mut cursor = Some(index);
    while let Some(i) = cursor {
        let step = arena[i];
        if step.edge.from.id == location {
            return true;
        }
        cursor = step.parent;
    }
    false
}

/// Rebuild the edge path ending at `index`, origin first.
fn materialize(arena: &[PathStep<'_>], index: usize) -> Vec<Edge> {
    let mut path = Vec::with_capacity(arena[index].depth);
    let mut cursor = Some(index);
    while let Some(i) = cursor {
        let step = arena[i];
        path.push(step.edge.clone());
        cursor = step.parent;
    }
    path.reverse();
    path
}
