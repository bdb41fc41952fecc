//! State-space search for puzzles modelled as implicit graphs.
//!
//! This crate provides a small search toolkit on top of `statewalk-core`:
//!
//! - **Worklists** ([`Fifo`], [`Lifo`], [`PriorityQueue`]) behind the
//!   [`Worklist`] trait; the worklist decides the exploration order.
//! - A **generic driver** ([`search`], [`StateMachine`]) that repeatedly
//!   takes a state, reports it if terminal and otherwise expands it.
//! - A **grid driver** ([`GridStateMachine`]) whose states carry a current
//!   grid coordinate and move one orthogonal step at a time.
//! - A **maze** ([`Maze`]) with BFS distances and shortest-path marking.
//! - [`BestCosts`], the best-cost-per-key table callers use to prune
//!   re-derived states.
//!
//! The drivers never deduplicate states, check comparators, or cap
//! iterations. Optimality and termination come from the caller's
//! expansion function, which is expected to drop candidates that do not
//! improve on the best known cost for their canonical key.
//!
//! # Trait hierarchy
//!
//! | Trait | Implemented by |
//! |---|---|
//! | [`Worklist`] | [`Fifo`], [`Lifo`], [`PriorityQueue`] |
//! | [`SearchProblem`] | [`StateMachine`], [`GridStateMachine`], caller types |

mod best;
mod grid_machine;
mod machine;
mod maze;
mod worklist;

pub use best::BestCosts;
pub use grid_machine::{GridMove, GridState, GridStateMachine};
pub use machine::{SearchProblem, SearchStats, StateMachine, search};
pub use maze::{Maze, MazeNode, MazeSymbols, UNREACHABLE};
pub use worklist::{BoxedCompare, Fifo, Lifo, PriorityQueue, Worklist};

pub use statewalk_core::{Coord, CoordSet, Direction, Grid, GridError, manhattan};
