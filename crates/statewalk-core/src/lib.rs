//! **statewalk-core**: grid geometry for puzzle state-space search.
//!
//! This crate provides the foundational types used by `statewalk-search`:
//! row/column coordinates, the four orthogonal directions with their
//! rotation tables, an owned rectangular [`Grid`] generic over its node
//! payload, and a grid-independent [`CoordSet`].

pub mod coord_set;
pub mod error;
pub mod geom;
pub mod grid;

pub use coord_set::CoordSet;
pub use error::{GridError, ParseCoordError};
pub use geom::{Coord, Direction, manhattan};
pub use grid::{Grid, GridBuilder};
