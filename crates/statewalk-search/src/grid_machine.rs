//! Search over states pinned to a grid cell.
//!
//! A [`GridStateMachine`] expands a state by asking the caller which
//! directions are currently legal, dropping the ones that leave the grid,
//! and folding each remaining move into the caller payload. Everything else
//! is the generic driver in [`crate::search`].

use statewalk_core::{Coord, Direction, Grid};

use crate::machine::{SearchProblem, SearchStats, search};
use crate::worklist::{Fifo, Worklist};

/// A search state: the current cell plus a caller payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridState<D> {
    pub coord: Coord,
    pub data: D,
}

/// One candidate move, handed to the payload update.
#[derive(Debug)]
pub struct GridMove<'m, N, D> {
    /// The state being expanded.
    pub state: &'m GridState<D>,
    pub direction: Direction,
    /// The in-bounds cell the move lands on.
    pub next: Coord,
    pub next_node: &'m N,
}

type IsGoal<'a, N> = Box<dyn Fn(Coord, &N) -> bool + 'a>;
type OnEnd<'a, D, C> = Box<dyn FnMut(&mut C, GridState<D>) + 'a>;
type ValidMoves<'a, D, C> = Box<dyn FnMut(&mut C, &GridState<D>) -> Vec<Direction> + 'a>;
type NextState<'a, N, D, C> = Box<dyn FnMut(&mut C, GridMove<'_, N, D>) -> D + 'a>;

/// A search problem whose states walk a borrowed [`Grid`] one orthogonal
/// step at a time.
///
/// - `is_goal(coord, node)`: terminal test on the current cell.
/// - `on_end(session, state)`: called for every terminal state.
/// - `valid_moves(session, state)`: the directions legal from `state`,
///   regardless of grid bounds.
/// - `next_state(session, move)`: the payload after taking `move`.
///
/// No deduplication or cost tracking is added; callers prune inside
/// `valid_moves` exactly as with [`StateMachine`](crate::StateMachine).
pub struct GridStateMachine<'a, N, D, C = ()> {
    grid: &'a Grid<N>,
    session: C,
    is_goal: IsGoal<'a, N>,
    on_end: OnEnd<'a, D, C>,
    valid_moves: ValidMoves<'a, D, C>,
    next_state: NextState<'a, N, D, C>,
}

impl<'a, N, D, C> GridStateMachine<'a, N, D, C> {
    pub fn new(
        grid: &'a Grid<N>,
        session: C,
        is_goal: impl Fn(Coord, &N) -> bool + 'a,
        on_end: impl FnMut(&mut C, GridState<D>) + 'a,
        valid_moves: impl FnMut(&mut C, &GridState<D>) -> Vec<Direction> + 'a,
        next_state: impl FnMut(&mut C, GridMove<'_, N, D>) -> D + 'a,
    ) -> Self {
        Self {
            grid,
            session,
            is_goal: Box::new(is_goal),
            on_end: Box::new(on_end),
            valid_moves: Box::new(valid_moves),
            next_state: Box::new(next_state),
        }
    }

    /// Breadth-first walk from `start` carrying `data`.
    pub fn walk(&mut self, start: Coord, data: D) -> SearchStats {
        self.walk_with(Fifo::new(), start, data)
    }

    /// Walk from `start` in the order `worklist` imposes.
    pub fn walk_with<W>(&mut self, mut worklist: W, start: Coord, data: D) -> SearchStats
    where
        W: Worklist<GridState<D>>,
    {
        log::debug!("grid walk from ({start})");
        search(self, &mut worklist, GridState { coord: start, data })
    }

    pub fn grid(&self) -> &'a Grid<N> {
        self.grid
    }

    pub fn session(&self) -> &C {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut C {
        &mut self.session
    }

    pub fn into_session(self) -> C {
        self.session
    }
}

impl<N, D, C> SearchProblem for GridStateMachine<'_, N, D, C> {
    type State = GridState<D>;

    fn is_end(&mut self, state: &GridState<D>) -> bool {
        self.grid
            .get(state.coord)
            .is_some_and(|node| (self.is_goal)(state.coord, node))
    }

    fn on_end(&mut self, state: GridState<D>) {
        (self.on_end)(&mut self.session, state)
    }

    fn next_states(&mut self, state: &GridState<D>, out: &mut Vec<GridState<D>>) {
        let grid = self.grid;
        for direction in (self.valid_moves)(&mut self.session, state) {
            let next = state.coord.step(direction);
            let Some(next_node) = grid.get(next) else {
                continue;
            };
            let mv = GridMove {
                state,
                direction,
                next,
                next_node,
            };
            let data = (self.next_state)(&mut self.session, mv);
            out.push(GridState { coord: next, data });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best::BestCosts;
    use crate::worklist::{Lifo, PriorityQueue};

    #[test]
    fn open_grid_shortest_paths() {
        let grid = Grid::from_size(4, 4, |_| ());
        let goal = Coord::new(3, 3);
        let mut m = GridStateMachine::new(
            &grid,
            Vec::new(),
            |c, _| c == goal,
            |paths: &mut Vec<String>, s| paths.push(s.data),
            |_, s: &GridState<String>| {
                if s.data.len() < 6 {
                    Direction::ALL.to_vec()
                } else {
                    Vec::new()
                }
            },
            |_, mv| {
                let mut path = mv.state.data.clone();
                path.push(mv.direction.letter());
                path
            },
        );
        m.walk(Coord::ZERO, String::new());
        let paths = m.into_session();
        assert_eq!(paths.len(), 20);
        assert!(paths.iter().all(|p| p.len() == 6));
        assert!(paths.iter().all(|p| p.matches('D').count() == 3));
        assert!(paths.contains(&"RRRDDD".to_string()));
    }

    #[test]
    fn out_of_bounds_moves_are_dropped() {
        let grid = Grid::from_size(2, 1, |c| c.col);
        let mut landed = Vec::new();
        let mut m = GridStateMachine::new(
            &grid,
            (),
            |_, node| *node == 1,
            |_, _| {},
            |_, _: &GridState<u8>| Direction::ALL.to_vec(),
            |_, mv| {
                landed.push((mv.direction, *mv.next_node));
                mv.state.data + 1
            },
        );
        let stats = m.walk(Coord::ZERO, 0);
        drop(m);
        assert_eq!(landed, vec![(Direction::Right, 1)]);
        assert_eq!(stats.generated, 1);
        assert_eq!(stats.terminal, 1);
    }

    const WALLED: &str = "
.#..
.#.#
....";

    struct Route {
        best: BestCosts<Coord>,
        answer: Option<u32>,
    }

    fn route_machine<'a>(grid: &'a Grid<bool>) -> GridStateMachine<'a, bool, u32, Route> {
        let mut best = BestCosts::new();
        best.record(Coord::ZERO, 0);
        GridStateMachine::new(
            grid,
            Route { best, answer: None },
            |c, _| c == Coord::new(0, 2),
            |r, s| {
                if r.answer.is_none_or(|a| s.data < a) {
                    r.answer = Some(s.data);
                }
            },
            move |r, s| {
                Direction::ALL
                    .into_iter()
                    .filter(|&d| {
                        let next = s.coord.step(d);
                        grid.get(next).is_some_and(|wall| !wall)
                            && r.best.record(next, s.data + 1)
                    })
                    .collect()
            },
            |_, mv| mv.state.data + 1,
        )
    }

    #[test]
    fn walled_maze_breadth_first() {
        let grid = Grid::parse(WALLED, |ch, _| ch == '#').unwrap();
        let mut m = route_machine(&grid);
        m.walk(Coord::ZERO, 0);
        assert_eq!(m.session().answer, Some(6));
    }

    #[test]
    fn walled_maze_best_first() {
        let grid = Grid::parse(WALLED, |ch, _| ch == '#').unwrap();
        let mut m = route_machine(&grid);
        let pq = PriorityQueue::by_key(|s: &GridState<u32>| s.data);
        let stats = m.walk_with(pq, Coord::ZERO, 0);
        assert_eq!(m.session().answer, Some(6));
        assert_eq!(stats.terminal, 1);
        assert_eq!(m.grid().count(|_, wall| *wall), 3);
    }

    #[test]
    fn longest_self_avoiding_route_depth_first() {
        let grid = Grid::from_size(3, 3, |_| ());
        let mut m = GridStateMachine::new(
            &grid,
            Vec::new(),
            |c, _| c == Coord::new(2, 2),
            |lengths: &mut Vec<usize>, s: GridState<Vec<Coord>>| lengths.push(s.data.len() - 1),
            |_, s: &GridState<Vec<Coord>>| {
                Direction::ALL
                    .into_iter()
                    .filter(|&d| !s.data.contains(&s.coord.step(d)))
                    .collect()
            },
            |_, mv| {
                let mut path = mv.state.data.clone();
                path.push(mv.next);
                path
            },
        );
        m.walk_with(Lifo::new(), Coord::ZERO, vec![Coord::ZERO]);
        let lengths = m.session();
        assert_eq!(lengths.len(), 12);
        assert_eq!(lengths.iter().max(), Some(&8));
        assert_eq!(lengths.iter().min(), Some(&4));
    }
}
