//! The [`Grid`] type: an owned rectangular grid generic over its node
//! payload.
//!
//! A grid can be built from a size and a per-cell generator, from text
//! (one row per line), from a 2D array of raw values, or one cell at a time
//! through a [`GridBuilder`] whose bounds are inferred from the largest
//! coordinate set. Once built, every in-bounds coordinate holds a node and
//! lookups outside the bounds return `None`.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::GridError;
use crate::geom::{Coord, Direction, manhattan};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `width × height` grid of nodes stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<N> {
    nodes: Vec<N>,
    width: i32,
    height: i32,
}

impl<N> Grid<N> {
    /// Create a grid of the given size, producing each node from its
    /// coordinate.
    ///
    /// Negative dimensions are treated as zero.
    pub fn from_size(width: i32, height: i32, mut f: impl FnMut(Coord) -> N) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut nodes = Vec::with_capacity((width as usize) * (height as usize));
        for row in 0..height {
            for col in 0..width {
                nodes.push(f(Coord::new(row, col)));
            }
        }
        Self {
            nodes,
            width,
            height,
        }
    }

    /// Build a grid from text, one row per line.
    ///
    /// Blank lines before the first row and after the last row are ignored.
    /// All rows must have the same number of characters.
    pub fn parse(text: &str, mut f: impl FnMut(char, Coord) -> N) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = text_rows(text).map(|l| l.chars().collect()).collect();
        Self::from_rows(rows, |ch, c| f(ch, c))
    }

    /// Like [`parse`](Self::parse), but rows shorter than the longest row
    /// are padded on the right with `fill` instead of being rejected.
    pub fn parse_padded(
        text: &str,
        fill: char,
        f: impl FnMut(char, Coord) -> N,
    ) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<char>> = text_rows(text).map(|l| l.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for r in rows.iter_mut() {
            r.resize(width, fill);
        }
        Self::from_rows(rows, f)
    }

    /// Build a grid from a 2D array of raw values, mapping each through
    /// `f` together with its coordinate.
    ///
    /// Fails with [`GridError::RaggedRows`] if the rows differ in length.
    pub fn from_rows<T, R, I>(rows: I, mut f: impl FnMut(T, Coord) -> N) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut nodes = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        for (r, row) in rows.into_iter().enumerate() {
            let before = nodes.len();
            for (c, value) in row.into_iter().enumerate() {
                nodes.push(f(value, Coord::new(r as i32, c as i32)));
            }
            let found = nodes.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRows {
                        row: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            nodes,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Build a grid from `(coordinate, node)` pairs. Bounds are inferred
    /// from the largest row and column seen.
    ///
    /// See [`GridBuilder::build`] for the failure cases.
    pub fn from_cells(cells: impl IntoIterator<Item = (Coord, N)>) -> Result<Self, GridError> {
        let mut b = GridBuilder::new();
        for (c, n) in cells {
            b.set(c, n);
        }
        b.build()
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.height && c.col < self.width
    }

    /// Flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row * self.width + c.col) as usize)
        } else {
            None
        }
    }

    /// Coordinate of a flat index produced by [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        let w = self.width.max(1) as usize;
        Coord::new((idx / w) as i32, (idx % w) as i32)
    }

    /// The node at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&N> {
        self.index_of(c).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut N> {
        self.index_of(c).map(|i| &mut self.nodes[i])
    }

    /// Shorthand for `get(Coord::new(row, col))`.
    #[inline]
    pub fn at(&self, row: i32, col: i32) -> Option<&N> {
        self.get(Coord::new(row, col))
    }

    /// Replace the node at `c`, returning the previous one. No-op (and
    /// `None`) if `c` is out of bounds.
    pub fn set(&mut self, c: Coord, node: N) -> Option<N> {
        let slot = self.get_mut(c)?;
        Some(std::mem::replace(slot, node))
    }

    /// Row-major iterator over every coordinate.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<N> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |row| (0..w).map(move |col| Coord::new(row, col)))
    }

    /// Row-major iterator over `(Coord, &N)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &N)> {
        self.coords().zip(self.nodes.iter())
    }

    /// Row-major iterator over `(Coord, &mut N)` pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coord, &mut N)> {
        self.coords().zip(self.nodes.iter_mut())
    }

    /// First node (row-major) matching `pred`, with its coordinate.
    pub fn find(&self, mut pred: impl FnMut(Coord, &N) -> bool) -> Option<(Coord, &N)> {
        self.iter().find(|(c, n)| pred(*c, n))
    }

    /// Number of nodes matching `pred`.
    pub fn count(&self, mut pred: impl FnMut(Coord, &N) -> bool) -> usize {
        self.iter().filter(|(c, n)| pred(*c, n)).count()
    }

    /// The nodes of row `row`, left to right. Empty if out of bounds.
    pub fn row(&self, row: i32) -> impl Iterator<Item = &N> {
        let slice = if row >= 0 && row < self.height {
            let start = (row * self.width) as usize;
            &self.nodes[start..start + self.width as usize]
        } else {
            &self.nodes[..0]
        };
        slice.iter()
    }

    /// The nodes of column `col`, top to bottom. Empty if out of bounds.
    pub fn column(&self, col: i32) -> impl Iterator<Item = &N> {
        (0..self.height).filter_map(move |row| self.get(Coord::new(row, col)))
    }

    /// In-bounds orthogonal neighbours of `c` (up to 4, fewer at edges), in
    /// [`Direction::ALL`] order.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = (Direction, Coord, &N)> {
        c.neighbors_4()
            .into_iter()
            .filter_map(move |(d, n)| self.get(n).map(|node| (d, n, node)))
    }

    /// The neighbour of `c` one step in `dir`, if in bounds.
    #[inline]
    pub fn neighbor(&self, c: Coord, dir: Direction) -> Option<&N> {
        self.get(c.step(dir))
    }

    /// The coordinate `distance` steps from `c` in `dir`. Not clamped to
    /// the grid.
    #[inline]
    pub fn coords_in_direction(c: Coord, dir: Direction, distance: i32) -> Coord {
        c.moved(dir, distance)
    }

    /// Manhattan distance between two coordinates.
    #[inline]
    pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
        manhattan(a, b)
    }

    /// Build a new grid of the same shape by mapping every node.
    pub fn map<M>(&self, mut f: impl FnMut(Coord, &N) -> M) -> Grid<M> {
        Grid {
            nodes: self.iter().map(|(c, n)| f(c, n)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Render the grid as text, one line per row, using `f` to pick the
    /// character of each node.
    pub fn render(&self, mut f: impl FnMut(Coord, &N) -> char) -> String {
        let mut s = String::with_capacity(self.nodes.len() + self.height as usize);
        for (c, n) in self.iter() {
            if c.col == 0 && c.row > 0 {
                s.push('\n');
            }
            s.push(f(c, n));
        }
        s
    }
}

impl<N> Index<Coord> for Grid<N> {
    type Output = N;

    /// Panics if `c` is out of bounds. Use [`Grid::get`] when the
    /// coordinate is not known to be valid.
    fn index(&self, c: Coord) -> &N {
        match self.get(c) {
            Some(n) => n,
            None => panic!(
                "coordinate ({c}) outside {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<N> IndexMut<Coord> for Grid<N> {
    fn index_mut(&mut self, c: Coord) -> &mut N {
        let (w, h) = (self.width, self.height);
        match self.get_mut(c) {
            Some(n) => n,
            None => panic!("coordinate ({c}) outside {w}x{h} grid"),
        }
    }
}

impl<N: fmt::Display> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, n) in self.iter() {
            if c.col == 0 && c.row > 0 {
                writeln!(f)?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

fn text_rows(text: &str) -> impl Iterator<Item = &str> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let range = match (first, last) {
        (Some(a), Some(b)) => a..b + 1,
        _ => 0..0,
    };
    lines.into_iter().take(range.end).skip(range.start)
}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Incremental grid construction, one cell at a time.
///
/// The bounds of the built grid are `max_row + 1` by `max_col + 1` over all
/// coordinates set.
#[derive(Debug)]
pub struct GridBuilder<N> {
    cells: HashMap<Coord, N>,
    max: Option<Coord>,
    negative: Option<Coord>,
}

impl<N> Default for GridBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GridBuilder<N> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            max: None,
            negative: None,
        }
    }

    /// Set the node at `c`, replacing any earlier one.
    pub fn set(&mut self, c: Coord, node: N) {
        if c.row < 0 || c.col < 0 {
            self.negative.get_or_insert(c);
            return;
        }
        self.max = Some(match self.max {
            Some(m) => Coord::new(m.row.max(c.row), m.col.max(c.col)),
            None => c,
        });
        self.cells.insert(c, node);
    }

    /// Number of distinct cells set so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been set.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Finish the grid.
    ///
    /// Fails with [`GridError::NegativeCoord`] if any negative coordinate
    /// was set, [`GridError::Empty`] if nothing was set,
    /// [`GridError::TooLarge`] if the bounds do not fit in memory indices,
    /// and [`GridError::MissingCell`] for the first (row-major) in-bounds
    /// cell that was never set. Gaps are detected before any allocation.
    pub fn build(mut self) -> Result<Grid<N>, GridError> {
        if let Some(c) = self.negative {
            return Err(GridError::NegativeCoord(c));
        }
        let Some(max) = self.max else {
            return Err(GridError::Empty);
        };
        let (Some(width), Some(height)) = (max.col.checked_add(1), max.row.checked_add(1)) else {
            return Err(GridError::TooLarge(max));
        };
        let Some(area) = (width as usize).checked_mul(height as usize) else {
            return Err(GridError::TooLarge(max));
        };
        if self.cells.len() != area {
            // Fewer cells than the area, so a gap shows up within the
            // first `len + 1` row-major positions.
            let w = width as usize;
            let gap = (0..area)
                .map(|i| Coord::new((i / w) as i32, (i % w) as i32))
                .find(|c| !self.cells.contains_key(c))
                .unwrap_or(max);
            return Err(GridError::MissingCell(gap));
        }
        let mut nodes = Vec::with_capacity(area);
        for row in 0..height {
            for col in 0..width {
                let c = Coord::new(row, col);
                match self.cells.remove(&c) {
                    Some(n) => nodes.push(n),
                    None => return Err(GridError::MissingCell(c)),
                }
            }
        }
        log::debug!("built {width}x{height} grid cell by cell");
        Ok(Grid {
            nodes,
            width,
            height,
        })
    }
}
