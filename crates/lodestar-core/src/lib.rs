//! **lodestar-core**: geometry and grid primitives for search graphs.
//!
//! This crate provides the value types that callers of `lodestar-search`
//! most often use as vertices: integer points, half-open rectangles, and a
//! character grid parsed from text.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{GridError, TextGrid};
