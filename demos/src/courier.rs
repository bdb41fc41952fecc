//! Shortest tour through every numbered point of a duct maze.
//!
//! Pairwise distances come from [`Maze::score`]; the tour itself is a
//! best-first [`StateMachine`] search over `(current point, visited set)`
//! with a [`BestCosts`] table pruning re-derived states.

use statewalk_core::Coord;
use statewalk_search::{BestCosts, Maze, MazeSymbols, PriorityQueue, StateMachine, UNREACHABLE};

use crate::PuzzleError;

pub const SAMPLE: &str = "\
###########
#0.1.....2#
#.#######.#
#4.......3#
###########";

/// A duct maze with its numbered points and the distances between them.
#[derive(Debug)]
pub struct Ducts {
    maze: Maze,
    /// Point coordinates by ascending digit, at most ten; index 0 is the
    /// start.
    points: Vec<Coord>,
    /// `dist[a][b]`, [`UNREACHABLE`] where no path exists.
    dist: Vec<Vec<i32>>,
}

#[derive(Clone, Copy, Debug)]
struct Leg {
    at: usize,
    visited: u32,
    steps: i32,
}

#[derive(Default)]
struct Tour {
    best: BestCosts<(usize, u32), i32>,
    answer: Option<i32>,
}

impl Ducts {
    /// Parse a maze where `#` is a wall and digits mark the points to visit.
    /// `0` is the start.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let symbols = MazeSymbols {
            obstacle: '#',
            start: Some('0'),
        };
        let (maze, start) = Maze::parse(text, symbols)?;
        if start.is_none() {
            return Err(PuzzleError::MissingStart);
        }

        // One point per digit, at its first cell in row-major order.
        let mut by_digit: [Option<Coord>; 10] = [None; 10];
        for (c, n) in maze.grid().iter() {
            if let Some(d) = n.label.and_then(|ch| ch.to_digit(10)) {
                by_digit[d as usize].get_or_insert(c);
            }
        }
        let points: Vec<Coord> = by_digit.into_iter().flatten().collect();

        let dist = points
            .iter()
            .map(|&a| points.iter().map(|&b| maze.score(a, b)).collect())
            .collect();
        log::debug!("{} points to visit", points.len());
        Ok(Self { maze, points, dist })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Distance between points `a` and `b` (by index).
    pub fn distance(&self, a: usize, b: usize) -> i32 {
        self.dist[a][b]
    }

    /// Fewest steps visiting every point from `0`, optionally ending back
    /// at `0`. `None` if some point cannot be reached.
    pub fn shortest_tour(&self, return_home: bool) -> Option<i32> {
        let n = self.points.len();
        // At most ten points, one per digit.
        let all = (1u32 << n) - 1;
        let dist = &self.dist;

        let mut machine = StateMachine::new(
            Tour::default(),
            move |_, leg: &Leg| leg.visited == all && (!return_home || leg.at == 0),
            |tour, leg| {
                if tour.answer.is_none_or(|a| leg.steps < a) {
                    log::debug!("tour of {} steps", leg.steps);
                    tour.answer = Some(leg.steps);
                }
            },
            move |tour, leg| {
                let mut next = Vec::new();
                for to in 0..n {
                    let bit = 1u32 << to;
                    let homeward = return_home && leg.visited == all && to == 0;
                    if to == leg.at || (leg.visited & bit != 0 && !homeward) {
                        continue;
                    }
                    let d = dist[leg.at][to];
                    if d == UNREACHABLE {
                        continue;
                    }
                    let steps = leg.steps + d;
                    if tour.answer.is_some_and(|a| steps >= a) {
                        continue;
                    }
                    let visited = leg.visited | bit;
                    if tour.best.record((to, visited), steps) {
                        next.push(Leg { at: to, visited, steps });
                    }
                }
                next
            },
        );

        let start = Leg {
            at: 0,
            visited: 1,
            steps: 0,
        };
        let stats = machine.run_with(PriorityQueue::by_key(|leg: &Leg| leg.steps), start);
        log::debug!("tour search: {stats}");
        machine.into_session().answer
    }
}
