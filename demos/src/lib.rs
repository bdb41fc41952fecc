//! Sample puzzles driven by the statewalk toolkit, plus the small harness
//! the demo binaries share.
//!
//! - [`courier`]: shortest tour through numbered points in a duct maze.
//! - [`cubicle`]: distances through a formula-generated office layout.

pub mod courier;
pub mod cubicle;

use std::fmt;

use statewalk_core::GridError;

/// Errors raised while loading a puzzle.
#[derive(Debug)]
pub enum PuzzleError {
    Io(std::io::Error),
    Grid(GridError),
    /// The maze has no start marker.
    MissingStart,
    /// The input should contain a number but does not.
    NotANumber(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading input: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::MissingStart => f.write_str("maze has no start marker"),
            Self::NotANumber(s) => write!(f, "expected a number, got {s:?}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for PuzzleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Install the logger. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Puzzle text from the file named by the first argument, or `sample` when
/// no argument is given. The flag tells whether the sample was used.
pub fn read_input(sample: &str) -> Result<(String, bool), PuzzleError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("reading {path}");
            Ok((std::fs::read_to_string(path)?, false))
        }
        None => {
            log::info!("no input file given, using the built-in sample");
            Ok((sample.to_string(), true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(PuzzleError::MissingStart.to_string(), "maze has no start marker");
        assert_eq!(
            PuzzleError::NotANumber("x".into()).to_string(),
            "expected a number, got \"x\""
        );
        let grid: PuzzleError = GridError::Empty.into();
        assert!(std::error::Error::source(&grid).is_some());
    }
}
