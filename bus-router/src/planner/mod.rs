//! Connecting-route planner using BFS search.
//!
//! This module implements the planning pipeline that answers: "no bus
//! runs the whole way - which chains of buses do?"
//!
//! A search builds a graph of single-bus rides from the fleet snapshot
//! and explores it breadth-first under a transfer bound. Paths that
//! survive assembly come back as ranked routes.

mod assemble;
mod config;
mod estimate;
mod graph;
mod search;

pub use assemble::{DropReason, DroppedCandidate};
pub use config::SearchConfig;
pub use graph::{Edge, GraphBuild, LocationGraph, SkipReason, SkippedBus, build_location_graph};
pub use search::{Planner, SearchRequest, SearchResult};
