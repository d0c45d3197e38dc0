//! Maze solving shared by the demo binaries.
//!
//! A maze is ASCII art with `#` walls, one `S` start and one `E` exit.

use std::fmt;

use lodestar_core::{GridError, Point, TextGrid};
use lodestar_search::{Cost, GridPather, Moves, SearchError, search, search_all};

pub const WALL: char = '#';
pub const START: char = 'S';
pub const EXIT: char = 'E';
pub const TRAIL: char = 'o';

pub const SAMPLE: &str = "\
###########
#S..#.....#
#.#.#.###.#
#.#...#...#
#.#####.#.#
#.....#.#E#
###########";

/// Everything the demo prints about one maze.
#[derive(Debug, Clone)]
pub struct Report {
    /// Cost of the cheapest route from `S` to `E`.
    pub cost: Cost,
    /// Vertices expanded while finding it.
    pub expanded: usize,
    /// The maze with the route drawn in [`TRAIL`].
    pub overlay: TextGrid,
    /// Cell farthest from `S`, with its distance.
    pub farthest: (Point, Cost),
}

/// Solve a maze given as text.
pub fn solve(text: &str, moves: Moves) -> Result<Report, DemoError> {
    let grid = TextGrid::with_runes(text, "#.SE")?;
    let start = grid.find(START).ok_or(DemoError::Missing(START))?;
    let exit = grid.find(EXIT).ok_or(DemoError::Missing(EXIT))?;
    let passable = |ch: char| ch != WALL;

    let pather = GridPather::new(&grid, passable).moves(moves).toward(exit);
    let found = search(&pather, start, |&p| p == exit)?;

    let mut overlay = grid.clone();
    let inner = found.path.len().saturating_sub(2);
    for &p in found.path.iter().skip(1).take(inner) {
        overlay.set(p, TRAIL);
    }

    // Distances from the start, ignoring the goal.
    let map = search_all(&GridPather::new(&grid, passable).moves(moves), [(start, 0)]);
    let farthest = map
        .costs()
        .map(|(&p, c)| (p, c))
        .max_by_key(|&(p, c)| (c, std::cmp::Reverse(p)))
        .unwrap_or((start, 0));

    Ok(Report {
        cost: found.cost,
        expanded: found.expanded,
        overlay,
        farthest,
    })
}

/// Errors from [`solve`].
#[derive(Debug)]
pub enum DemoError {
    /// The maze text is malformed.
    Grid(GridError),
    /// The maze lacks a required marker.
    Missing(char),
    /// The exit cannot be reached.
    Search(SearchError<Point>),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "bad maze: {e}"),
            Self::Missing(ch) => write!(f, "maze has no \u{201c}{ch}\u{201d}"),
            Self::Search(e) => write!(f, "maze cannot be solved: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Missing(_) => None,
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError<Point>> for DemoError {
    fn from(e: SearchError<Point>) -> Self {
        Self::Search(e)
    }
}
