use lodestar_core::{Point, TextGrid};

use crate::Cost;
use crate::distance::{chebyshev, manhattan};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Which steps a [`GridPather`] may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Moves {
    /// Up, right, down, left.
    #[default]
    Cardinal,
    /// Cardinal moves plus the four diagonals.
    All,
}

/// Unit-cost pather over the passable cells of a [`TextGrid`].
///
/// With a goal set via [`toward`](Self::toward), the estimate is the
/// Manhattan or Chebyshev distance to it (matching [`Moves`]), which is
/// admissible for unit steps. Without a goal the estimate is 0.
pub struct GridPather<'a, F> {
    grid: &'a TextGrid,
    passable: F,
    moves: Moves,
    goal: Option<Point>,
}

impl<'a, F: Fn(char) -> bool> GridPather<'a, F> {
    /// Create a cardinal-move pather; `passable` decides which characters
    /// can be stepped on.
    pub fn new(grid: &'a TextGrid, passable: F) -> Self {
        Self {
            grid,
            passable,
            moves: Moves::Cardinal,
            goal: None,
        }
    }

    /// Set the allowed moves.
    pub fn moves(mut self, moves: Moves) -> Self {
        self.moves = moves;
        self
    }

    /// Guide the search toward `goal`.
    pub fn toward(mut self, goal: Point) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Whether `p` is inside the grid and passable.
    pub fn is_passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|ch| (self.passable)(ch))
    }
}

impl<F: Fn(char) -> bool> Pather<Point> for GridPather<'_, F> {
    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        let keep = |q: &Point| self.is_passable(*q);
        match self.moves {
            Moves::Cardinal => buf.extend(p.neighbors_4().into_iter().filter(keep)),
            Moves::All => buf.extend(p.neighbors_8().into_iter().filter(keep)),
        }
    }
}

impl<F: Fn(char) -> bool> WeightedPather<Point> for GridPather<'_, F> {}

impl<F: Fn(char) -> bool> AstarPather<Point> for GridPather<'_, F> {
    fn estimate(&self, p: &Point) -> Cost {
        match (self.goal, self.moves) {
            (None, _) => 0,
            (Some(g), Moves::Cardinal) => manhattan(*p, g),
            (Some(g), Moves::All) => chebyshev(*p, g),
        }
    }
}
