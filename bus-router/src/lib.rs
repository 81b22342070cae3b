//! Connecting bus route finder.
//!
//! A search library that answers: "no single bus goes there, so which
//! chain of buses does?"

pub mod domain;
pub mod planner;
pub mod stops;
