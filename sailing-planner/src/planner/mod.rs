//! Route planner using depth-first search.
//!
//! This module answers: "what is the best way to ship from this port to
//! that one?" where best is either cheapest or fastest.
//!
//! The catalog is reduced to the best direct leg per port pair, then every
//! loop-free chain of those edges from origin to destination is enumerated
//! depth-first, within an optional bound on the number of legs.

mod config;
mod criterion;
mod dto;
mod edges;
mod rank;
mod search;

pub use config::PlannerConfig;
pub use criterion::{Criterion, InvalidCriterion};
pub use dto::{LegRecord, itinerary_records};
pub use edges::{BestEdges, Edge, EdgeId};
pub use search::{Planner, SearchError, SearchOptions, SearchOutcome, SearchRequest};
