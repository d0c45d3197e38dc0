//! A character grid parsed from ASCII art.
//!
//! [`TextGrid`] is the usual input shape for grid puzzles: every line is a
//! row, every character a cell. Positions are [`Point`]s with the origin at
//! the top-left character.

use std::fmt;

use crate::geom::{Point, Range};

/// A rectangular grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cells: Vec<char>,
    size: Point,
}

impl TextGrid {
    /// Parse a grid from text, allowing any character.
    ///
    /// See [`with_runes`](Self::with_runes) for format requirements.
    pub fn new(s: &str) -> Result<Self, GridError> {
        Self::with_runes(s, "")
    }

    /// Parse a grid from text.
    ///
    /// Leading and trailing blank lines are ignored, as are `'\r'` line
    /// terminators. Every remaining line must have the same width. If
    /// `runes` is non-empty, any character outside it is rejected.
    pub fn with_runes(s: &str, runes: &str) -> Result<Self, GridError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut height = 0;

        if !s.is_empty() {
            for (y, line) in s.split('\n').enumerate() {
                let line = line.strip_suffix('\r').unwrap_or(line);
                let mut x = 0;
                for ch in line.chars() {
                    if !runes.is_empty() && !runes.contains(ch) {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x, y as i32),
                        });
                    }
                    cells.push(ch);
                    x += 1;
                }
                match width {
                    None => width = Some(x),
                    Some(w) if w != x => {
                        return Err(GridError::InconsistentSize {
                            line: y,
                            expected: w,
                            found: x,
                        });
                    }
                    Some(_) => {}
                }
                height += 1;
            }
        }

        Ok(Self {
            cells,
            size: Point::new(width.unwrap_or(0), height),
        })
    }

    /// The (width, height) size of the grid in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// The range covering every cell.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Get the character at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the character at a point. Returns `false` if out of bounds.
    pub fn set(&mut self, p: Point, ch: char) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    /// First position (row-major) holding `ch`.
    pub fn find(&self, ch: char) -> Option<Point> {
        self.positions(ch).next()
    }

    /// All positions holding `ch`, in row-major order.
    pub fn positions(&self, ch: char) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, c)| c == ch).map(|(p, _)| p)
    }

    /// Iterate over all positions and their characters, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.size.x + p.x) as usize)
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.size.x.max(0) as usize;
        if w == 0 {
            return Ok(());
        }
        for (y, row) in self.cells.chunks(w).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`TextGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A line's width differs from the first line's.
    InconsistentSize {
        line: usize,
        expected: i32,
        found: i32,
    },
    /// A character not in the allowed set was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
