//! A value-keyed set of coordinates, independent of any grid.

use std::collections::HashSet;
use std::collections::hash_set;

use crate::geom::Coord;

/// A set of [`Coord`]s compared by value.
///
/// Used for visited-tracking where no richer per-cell payload is needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordSet {
    inner: HashSet<Coord>,
}

impl CoordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `c`. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, c: Coord) -> bool {
        self.inner.insert(c)
    }

    /// Whether `c` is in the set.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.inner.contains(&c)
    }

    /// Remove `c`. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, c: Coord) -> bool {
        self.inner.remove(&c)
    }

    /// Number of coordinates in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove every coordinate.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterate over the coordinates in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.inner.iter()
    }

    /// The coordinates in row-major order.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.inner.iter().copied().collect();
        v.sort();
        v
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for CoordSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CoordSet {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for CoordSet {
    type Item = Coord;
    type IntoIter = hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
