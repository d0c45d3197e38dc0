//! Shortest-path search over lazily expanded graphs.
//!
//! Vertices are any `Clone + Eq + Hash` value owned by the caller; the graph
//! is never built up front but discovered through a neighbour callback as
//! the search proceeds.
//!
//! - **Single target** ([`search`]): Dijkstra, or A* when the pather
//!   supplies an admissible estimate. Stops at the first popped vertex
//!   accepted by an end predicate and returns its cost and path.
//! - **All reachable** ([`search_all`]): multi-source Dijkstra with a
//!   per-source initial cost. Returns a [`MultiPath`] answering cost, path,
//!   root and ancestor queries for every reached vertex.
//!
//! Edge costs must be non-negative. Each call owns its frontier and
//! settled-set; nothing is shared between calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour expansion |
//! | [`WeightedPather`] : [`Pather`] | [`search_all`] |
//! | [`AstarPather`] : [`WeightedPather`] | [`search`] |
//!
//! [`FnPather`] builds all three from closures; [`GridPather`] covers the
//! common case of walking a [`TextGrid`](lodestar_core::TextGrid).

mod astar;
mod config;
mod dijkstra;
mod distance;
mod error;
mod fn_pather;
mod frontier;
mod grid;
mod settled;
mod traits;

#[cfg(test)]
mod testgraph;

pub use astar::{Found, search, search_with};
pub use config::SearchConfig;
pub use dijkstra::{MultiPath, search_all, search_all_with};
pub use distance::{chebyshev, manhattan};
pub use error::SearchError;
pub use fn_pather::{EdgeCost, FnPather, Heuristic, NoHeuristic, UnitCost};
pub use grid::{GridPather, Moves};
pub use traits::{AstarPather, Pather, WeightedPather};

/// Path cost. Edge costs and estimates must be non-negative.
pub type Cost = i64;
