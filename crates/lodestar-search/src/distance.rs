use lodestar_core::Point;

use crate::Cost;

/// Manhattan (L1) distance between two points.
///
/// Admissible for unit-cost cardinal moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    Cost::from((a.x - b.x).abs()) + Cost::from((a.y - b.y).abs())
}

/// Chebyshev (L∞) distance between two points.
///
/// Admissible for unit-cost moves in all eight directions.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> Cost {
    Cost::from((a.x - b.x).abs().max((a.y - b.y).abs()))
}
