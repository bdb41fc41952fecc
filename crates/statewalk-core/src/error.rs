//! Errors raised while building grids or parsing coordinates.

use std::fmt;

use crate::geom::Coord;

/// Errors that can occur when constructing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell inside the inferred bounds was never set.
    MissingCell(Coord),
    /// A cell was set at a negative coordinate.
    NegativeCoord(Coord),
    /// A cell was set so far out that the grid size overflows.
    TooLarge(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells in input"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::MissingCell(c) => write!(f, "grid: no node set at ({c})"),
            Self::NegativeCoord(c) => write!(f, "grid: negative coordinate ({c})"),
            Self::TooLarge(c) => write!(f, "grid: bounds up to ({c}) are too large"),
        }
    }
}

impl std::error::Error for GridError {}

/// Error returned when a `"row,col"` string cannot be parsed as a
/// [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError {
    input: String,
}

impl ParseCoordError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid coordinate \u{201c}{}\u{201d}, expected row,col", self.input)
    }
}

impl std::error::Error for ParseCoordError {}
