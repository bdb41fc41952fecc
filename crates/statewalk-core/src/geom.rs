//! Geometry primitives: [`Coord`] and [`Direction`].
//!
//! Rows grow downwards and columns grow to the right, so moving
//! [`Direction::Up`] decreases the row.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParseCoordError;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D integer coordinate addressed as (row, column).
///
/// Equality and hashing are by value. The canonical text form used for
/// keys is `"row,col"` (see the [`Display`](fmt::Display) and [`FromStr`]
/// impls).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        self.moved(dir, 1)
    }

    /// The coordinate `distance` steps away in `dir`.
    ///
    /// No bounds are applied: `(2, 2)` moved up by 3 is `(-1, 2)`.
    #[inline]
    pub const fn moved(self, dir: Direction, distance: i32) -> Self {
        let (dr, dc) = dir.offset();
        Self {
            row: self.row + dr * distance,
            col: self.col + dc * distance,
        }
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [(Direction, Coord); 4] {
        Direction::ALL.map(|d| (d, self.step(d)))
    }
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| ParseCoordError::new(s))?;
        let row = row.trim().parse().map_err(|_| ParseCoordError::new(s))?;
        let col = col.trim().parse().map_err(|_| ParseCoordError::new(s))?;
        Ok(Self { row, col })
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal directions.
///
/// [`clockwise`](Self::clockwise) and
/// [`counter_clockwise`](Self::counter_clockwise) are inverse permutations
/// of order 4.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order up, down, left, right.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Rotate a quarter turn clockwise.
    #[inline]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Rotate a quarter turn counter-clockwise.
    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// `(d_row, d_col)` for a single step.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Parse a move letter: `U`/`D`/`L`/`R` or compass `N`/`S`/`W`/`E`,
    /// case-insensitive.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'U' | 'N' => Some(Self::Up),
            'D' | 'S' => Some(Self::Down),
            'L' | 'W' => Some(Self::Left),
            'R' | 'E' => Some(Self::Right),
            _ => None,
        }
    }

    /// The `U`/`D`/`L`/`R` letter for this direction.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
    }

    #[test]
    fn coords_in_direction_are_unclamped() {
        let c = Coord::new(2, 2);
        assert_eq!(c.moved(Direction::Up, 3), Coord::new(-1, 2));
        assert_eq!(c.moved(Direction::Down, 3), Coord::new(5, 2));
        assert_eq!(c.moved(Direction::Left, 1), Coord::new(2, 1));
        assert_eq!(c.moved(Direction::Right, 4), Coord::new(2, 6));
        assert_eq!(c.step(Direction::Up), Coord::new(1, 2));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(2, 2)), 4);
        assert_eq!(manhattan(Coord::new(-3, 4), Coord::new(1, -1)), 9);
        assert_eq!(manhattan(Coord::new(5, 5), Coord::new(5, 5)), 0);
    }

    #[test]
    fn rotation_group_law() {
        for d in Direction::ALL {
            assert_eq!(d.clockwise().counter_clockwise(), d);
            assert_eq!(d.counter_clockwise().clockwise(), d);
            assert_eq!(d.clockwise().clockwise().clockwise().clockwise(), d);
            assert_eq!(
                d.counter_clockwise()
                    .counter_clockwise()
                    .counter_clockwise()
                    .counter_clockwise(),
                d
            );
            assert_eq!(d.clockwise().clockwise(), d.opposite());
        }
    }

    #[test]
    fn rotation_is_a_permutation() {
        let cw: HashSet<_> = Direction::ALL.iter().map(|d| d.clockwise()).collect();
        let ccw: HashSet<_> = Direction::ALL.iter().map(|d| d.counter_clockwise()).collect();
        assert_eq!(cw.len(), 4);
        assert_eq!(ccw.len(), 4);
        assert_eq!(Direction::Up.clockwise(), Direction::Right);
        assert_eq!(Direction::Up.counter_clockwise(), Direction::Left);
    }

    #[test]
    fn walking_a_square_returns_home() {
        // R2, R2, R2, R2 starting north.
        let mut dir = Direction::Up;
        let mut pos = Coord::ZERO;
        for _ in 0..4 {
            dir = dir.clockwise();
            pos = pos.moved(dir, 2);
        }
        assert_eq!(pos, Coord::ZERO);
        assert_eq!(dir, Direction::Up);
    }

    #[test]
    fn direction_letters() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_letter(d.letter()), Some(d));
        }
        assert_eq!(Direction::from_letter('n'), Some(Direction::Up));
        assert_eq!(Direction::from_letter('x'), None);
    }

    #[test]
    fn canonical_text_form() {
        let c = Coord::new(-1, 12);
        assert_eq!(c.to_string(), "-1,12");
        assert_eq!("-1,12".parse::<Coord>().unwrap(), c);
        assert_eq!(" 3 , 4 ".parse::<Coord>().unwrap(), Coord::new(3, 4));
        assert!("3;4".parse::<Coord>().is_err());
        assert!("a,4".parse::<Coord>().is_err());
    }

    #[test]
    fn coord_order_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbors_4_order() {
        let n = Coord::new(1, 1).neighbors_4();
        assert_eq!(n[0], (Direction::Up, Coord::new(0, 1)));
        assert_eq!(n[1], (Direction::Down, Coord::new(2, 1)));
        assert_eq!(n[2], (Direction::Left, Coord::new(1, 0)));
        assert_eq!(n[3], (Direction::Right, Coord::new(1, 2)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, -7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn direction_round_trip() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::Left);
    }
}
