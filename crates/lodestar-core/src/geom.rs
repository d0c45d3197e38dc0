//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Both are small `Copy` values, hashable so they can serve directly as
//! search vertices.

use std::cmp::Ordering;
use std::fmt;

/// A cell position. X grows right, Y grows down, matching text layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The top-left cell.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Edge-adjacent cells: up, right, down, left.
    pub fn neighbors_4(self) -> [Point; 4] {
        let Self { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
        ]
    }

    /// Edge- and corner-adjacent cells, clockwise from up.
    pub fn neighbors_8(self) -> [Point; 8] {
        let Self { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y - 1),
            Self::new(x + 1, y),
            Self::new(x + 1, y + 1),
            Self::new(x, y + 1),
            Self::new(x - 1, y + 1),
            Self::new(x - 1, y),
            Self::new(x - 1, y - 1),
        ]
    }
}

// Row-major, so sorting points reads like the text they came from.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half-open rectangle of cells: `min` is inside, `max` is just outside.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle spanned by two opposite corners, given in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Number of cells.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.columns() * (self.max.y - self.min.y) as usize
        }
    }

    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every cell, row by row.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            end: self.len(),
        }
    }

    fn columns(self) -> usize {
        (self.max.x - self.min.x).max(0) as usize
    }
}

/// Row-major iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let w = self.range.columns();
        let (dx, dy) = (self.next % w, self.next / w);
        self.next += 1;
        let min = self.range.min;
        Some(Point::new(min.x + dx as i32, min.y + dy as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
