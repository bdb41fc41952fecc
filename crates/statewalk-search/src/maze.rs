//! Obstacle mazes with breadth-first distances and shortest-path marking.
//!
//! Every step between orthogonal open cells costs 1. Distances are
//! computed with an iterative BFS over flat grid indices; unreachable cells
//! carry [`UNREACHABLE`].

use std::collections::VecDeque;
use std::fmt;

use statewalk_core::{Coord, CoordSet, Grid, GridError, manhattan};

/// Distance reported for cells that cannot be reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// One maze cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeNode {
    pub obstacle: bool,
    /// Set by [`Maze::find_best_path`] on cells that lie on some shortest
    /// path between its endpoints.
    pub best_path: bool,
    /// The character this cell was parsed from, unless it was `.` or an
    /// obstacle.
    pub label: Option<char>,
}

/// Characters recognised by [`Maze::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeSymbols {
    pub obstacle: char,
    /// Label of the start cell, if the text marks one.
    pub start: Option<char>,
}

impl Default for MazeSymbols {
    fn default() -> Self {
        Self {
            obstacle: '#',
            start: None,
        }
    }
}

/// A rectangular maze of [`MazeNode`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<MazeNode>,
}

impl Maze {
    /// An open maze with no obstacles.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: Grid::from_size(width, height, |_| MazeNode::default()),
        }
    }

    pub fn from_grid(grid: Grid<MazeNode>) -> Self {
        Self { grid }
    }

    /// Parse a maze drawn as text.
    ///
    /// `symbols.obstacle` marks obstacles, `.` is open floor and any other
    /// character is an open cell labelled with it. Returns the maze and the
    /// first cell (row-major) labelled `symbols.start`, if any.
    pub fn parse(text: &str, symbols: MazeSymbols) -> Result<(Self, Option<Coord>), GridError> {
        let grid = Grid::parse(text, |ch, _| MazeNode {
            obstacle: ch == symbols.obstacle,
            best_path: false,
            label: (ch != '.' && ch != symbols.obstacle).then_some(ch),
        })?;
        let maze = Self { grid };
        let start = symbols.start.and_then(|s| maze.find_label(s));
        log::debug!(
            "parsed {}x{} maze, start {start:?}",
            maze.grid.width(),
            maze.grid.height()
        );
        Ok((maze, start))
    }

    pub fn grid(&self) -> &Grid<MazeNode> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<MazeNode> {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid<MazeNode> {
        self.grid
    }

    /// Whether `c` is blocked. Cells outside the maze count as blocked.
    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.grid.get(c).is_none_or(|n| n.obstacle)
    }

    /// Block or clear `c`. No-op outside the maze.
    pub fn set_obstacle(&mut self, c: Coord, obstacle: bool) {
        if let Some(n) = self.grid.get_mut(c) {
            n.obstacle = obstacle;
        }
    }

    /// Whether the last [`find_best_path`](Self::find_best_path) marked `c`.
    pub fn is_best_path(&self, c: Coord) -> bool {
        self.grid.get(c).is_some_and(|n| n.best_path)
    }

    /// First cell (row-major) carrying `label`.
    pub fn find_label(&self, label: char) -> Option<Coord> {
        self.grid
            .find(|_, n| n.label == Some(label))
            .map(|(c, _)| c)
    }

    /// BFS distances from `start` indexed like the grid's flat storage.
    ///
    /// Cells farther than `max_dist` are left unreached. The search stops
    /// early once the cell at index `stop` is taken from the queue.
    fn bfs(&self, start: Coord, max_dist: i32, stop: Option<usize>) -> Vec<i32> {
        let mut dist = vec![UNREACHABLE; self.grid.len()];
        let Some(si) = self.grid.index_of(start) else {
            return dist;
        };
        dist[si] = 0;
        let mut queue: VecDeque<usize> = VecDeque::from([si]);

        while let Some(ci) = queue.pop_front() {
            if stop == Some(ci) {
                break;
            }
            let d = dist[ci];
            if d >= max_dist {
                continue;
            }
            for (_, nc, node) in self.grid.neighbors(self.grid.coord_of(ci)) {
                if node.obstacle {
                    continue;
                }
                let Some(ni) = self.grid.index_of(nc) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                dist[ni] = d + 1;
                queue.push_back(ni);
            }
        }
        dist
    }

    /// Length of the shortest obstacle-avoiding path from `start` to `end`,
    /// or [`UNREACHABLE`].
    ///
    /// Endpoints outside the maze are unreachable. Endpoints on obstacles
    /// are not checked.
    pub fn score(&self, start: Coord, end: Coord) -> i32 {
        let Some(ei) = self.grid.index_of(end) else {
            return UNREACHABLE;
        };
        let d = self.bfs(start, UNREACHABLE, Some(ei))[ei];
        log::trace!("maze score ({start}) -> ({end}) = {d}");
        d
    }

    /// Distance from `start` to every cell, [`UNREACHABLE`] where no path
    /// exists.
    pub fn distances_from(&self, start: Coord) -> Grid<i32> {
        let dist = self.bfs(start, UNREACHABLE, None);
        self.grid
            .map(|c, _| self.grid.index_of(c).map_or(UNREACHABLE, |i| dist[i]))
    }

    /// Every cell reachable from `start` in at most `max_steps` steps,
    /// `start` included.
    pub fn reachable_within(&self, start: Coord, max_steps: i32) -> CoordSet {
        self.bfs(start, max_steps, None)
            .into_iter()
            .enumerate()
            .filter(|&(_, d)| d != UNREACHABLE)
            .map(|(i, _)| self.grid.coord_of(i))
            .collect()
    }

    /// Mark every cell lying on at least one shortest path from `start` to
    /// `end` and return the path length.
    ///
    /// Marks from earlier calls are cleared first. When `end` is
    /// unreachable nothing is marked and [`UNREACHABLE`] is returned.
    pub fn find_best_path(&mut self, start: Coord, end: Coord) -> i32 {
        for (_, n) in self.grid.iter_mut() {
            n.best_path = false;
        }
        let Some(ei) = self.grid.index_of(end) else {
            return UNREACHABLE;
        };
        let from_start = self.bfs(start, UNREACHABLE, None);
        let total = from_start[ei];
        if total == UNREACHABLE {
            log::trace!("no path ({start}) -> ({end})");
            return UNREACHABLE;
        }
        let from_end = self.bfs(end, total, None);

        let mut marked = 0usize;
        for (i, (_, node)) in self.grid.iter_mut().enumerate() {
            let (ds, de) = (from_start[i], from_end[i]);
            if ds <= total && de <= total && ds + de == total {
                node.best_path = true;
                marked += 1;
            }
        }
        log::trace!("best path ({start}) -> ({end}) = {total}, {marked} cells marked");
        total
    }

    /// Manhattan distance between two cells, ignoring obstacles.
    #[inline]
    pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
        manhattan(a, b)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.grid.render(|_, n| {
            if n.obstacle {
                '#'
            } else if n.best_path {
                'O'
            } else {
                n.label.unwrap_or('.')
            }
        });
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Office layout where a cell is a wall when
    /// `x*x + 3*x + 2*x*y + y + y*y + designer` has an odd number of set
    /// bits (x is the column, y the row).
    fn cubicles(designer: i32, width: i32, height: i32) -> Maze {
        let grid = Grid::from_size(width, height, |c| {
            let (x, y) = (c.col, c.row);
            let v = x * x + 3 * x + 2 * x * y + y + y * y + designer;
            MazeNode {
                obstacle: v.count_ones() % 2 == 1,
                ..MazeNode::default()
            }
        });
        Maze::from_grid(grid)
    }

    #[test]
    fn open_maze_distance() {
        let m = Maze::new(3, 3);
        assert_eq!(m.score(Coord::new(0, 0), Coord::new(2, 2)), 4);
        assert_eq!(m.score(Coord::new(1, 1), Coord::new(1, 1)), 0);
    }

    #[test]
    fn wall_makes_end_unreachable() {
        let (m, _) = Maze::parse("...\n###\n...", MazeSymbols::default()).unwrap();
        assert_eq!(m.score(Coord::new(0, 0), Coord::new(2, 2)), UNREACHABLE);
        assert_eq!(m.score(Coord::new(0, 0), Coord::new(0, 2)), 2);
    }

    #[test]
    fn out_of_range_endpoints() {
        let m = Maze::new(2, 2);
        assert_eq!(m.score(Coord::new(0, 0), Coord::new(5, 5)), UNREACHABLE);
        assert_eq!(m.score(Coord::new(-1, 0), Coord::new(1, 1)), UNREACHABLE);
        assert!(m.is_obstacle(Coord::new(2, 0)));
    }

    #[test]
    fn cubicle_example() {
        let m = cubicles(10, 10, 7);
        let expected = "\
.#.####.##
..#..#...#
#....##...
###.#.###.
.##..#..#.
..##....#.
#...##.###";
        assert_eq!(m.to_string(), expected);
        assert_eq!(m.score(Coord::new(1, 1), Coord::new(4, 7)), 11);
    }

    #[test]
    fn best_path_marks_only_shortest_routes() {
        let text = ".....\n.###.\n.....";
        let (mut m, _) = Maze::parse(text, MazeSymbols::default()).unwrap();

        assert_eq!(m.find_best_path(Coord::new(0, 0), Coord::new(0, 4)), 4);
        let marked = m.grid().count(|_, n| n.best_path);
        assert_eq!(marked, 5);
        assert!((0..5).all(|col| m.is_best_path(Coord::new(0, col))));
        assert!(!m.is_best_path(Coord::new(2, 2)));

        // Both corridors are shortest between the side cells.
        assert_eq!(m.find_best_path(Coord::new(1, 0), Coord::new(1, 4)), 6);
        assert_eq!(m.grid().count(|_, n| n.best_path), 12);
        assert_eq!(m.to_string(), "OOOOO\nO###O\nOOOOO");
    }

    #[test]
    fn best_path_clears_old_marks_when_unreachable() {
        let (mut m, _) = Maze::parse("..#..", MazeSymbols::default()).unwrap();
        assert_eq!(m.find_best_path(Coord::new(0, 0), Coord::new(0, 1)), 1);
        assert_eq!(m.grid().count(|_, n| n.best_path), 2);
        assert_eq!(m.find_best_path(Coord::new(0, 0), Coord::new(0, 4)), UNREACHABLE);
        assert_eq!(m.grid().count(|_, n| n.best_path), 0);
    }

    #[test]
    fn reachable_within_budget() {
        let m = Maze::new(5, 5);
        let reach = m.reachable_within(Coord::new(2, 2), 2);
        assert_eq!(reach.len(), 13);
        assert!(reach.contains(Coord::new(0, 2)));
        assert!(!reach.contains(Coord::new(0, 0)));

        let office = cubicles(10, 10, 7);
        assert!(office.reachable_within(Coord::new(1, 1), 11).contains(Coord::new(4, 7)));
        assert!(!office.reachable_within(Coord::new(1, 1), 10).contains(Coord::new(4, 7)));
    }

    #[test]
    fn distance_map() {
        let (m, _) = Maze::parse(".#.\n...", MazeSymbols::default()).unwrap();
        let d = m.distances_from(Coord::new(0, 0));
        assert_eq!(d.to_string(), "0{}4\n123".replace("{}", &UNREACHABLE.to_string()));
        assert_eq!(d[Coord::new(0, 2)], 4);
    }

    const DUCTS: &str = "
###########
#0.1.....2#
#.#######.#
#4.......3#
###########";

    #[test]
    fn labelled_maze() {
        let symbols = MazeSymbols {
            obstacle: '#',
            start: Some('0'),
        };
        let (m, start) = Maze::parse(DUCTS, symbols).unwrap();
        assert_eq!(start, Some(Coord::new(1, 1)));
        let at = |ch| m.find_label(ch).unwrap();
        assert_eq!(m.score(at('0'), at('4')), 2);
        assert_eq!(m.score(at('4'), at('1')), 4);
        assert_eq!(m.score(at('1'), at('2')), 6);
        assert_eq!(m.score(at('2'), at('3')), 2);
        assert_eq!(m.score(at('4'), at('3')), 8);
        assert_eq!(m.find_label('7'), None);
        assert_eq!(m.to_string(), DUCTS.trim());
    }

    #[test]
    fn set_obstacle_reroutes() {
        let mut m = Maze::new(3, 2);
        assert_eq!(m.score(Coord::new(0, 0), Coord::new(0, 2)), 2);
        m.set_obstacle(Coord::new(0, 1), true);
        m.set_obstacle(Coord::new(9, 9), true);
        assert!(m.is_obstacle(Coord::new(0, 1)));
        assert_eq!(m.score(Coord::new(0, 0), Coord::new(0, 2)), 4);
        assert_eq!(Maze::manhattan_distance(Coord::new(0, 0), Coord::new(0, 2)), 2);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_round_trip() {
        let node = MazeNode {
            obstacle: false,
            best_path: true,
            label: Some('3'),
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: MazeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
