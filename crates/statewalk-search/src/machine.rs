//! The generic search driver.
//!
//! [`search`] is the drain loop shared by every front-end: it seeds a
//! worklist with the start state, then repeatedly takes a state, reports it
//! if it is terminal and otherwise expands it. The loop never deduplicates,
//! never checks a comparator and has no iteration cap; it terminates only
//! if the caller's expansion function eventually stops producing states.

use std::fmt;

use crate::worklist::{Fifo, Worklist};

// ---------------------------------------------------------------------------
// SearchStats
// ---------------------------------------------------------------------------

/// Counters collected during one driver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States taken from the worklist.
    pub dequeued: usize,
    /// States for which the terminal test held.
    pub terminal: usize,
    /// Non-terminal states handed to the expansion function.
    pub expanded: usize,
    /// Successors returned by the expansion function.
    pub generated: usize,
    /// Largest number of pending states observed.
    pub peak_frontier: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dequeued, {} terminal, {} expanded, {} generated, peak frontier {}",
            self.dequeued, self.terminal, self.expanded, self.generated, self.peak_frontier
        )
    }
}

// ---------------------------------------------------------------------------
// SearchProblem
// ---------------------------------------------------------------------------

/// A search problem the driver can run.
///
/// The implementor owns whatever session state the search needs (best
/// answer so far, best cost per canonical key) and updates it from
/// [`on_end`](Self::on_end) and [`next_states`](Self::next_states).
pub trait SearchProblem {
    type State;

    /// Whether `state` is terminal.
    fn is_end(&mut self, state: &Self::State) -> bool;

    /// Called once for every terminal state taken from the worklist.
    fn on_end(&mut self, state: Self::State);

    /// Push the successors of the non-terminal `state` into `out`.
    ///
    /// `out` is empty on entry. Returning improving candidates only is how
    /// callers get termination and optimality.
    fn next_states(&mut self, state: &Self::State, out: &mut Vec<Self::State>);
}

/// Run `problem` from `start`, exploring in the order `worklist` imposes.
///
/// Terminal states go to [`SearchProblem::on_end`] and are not expanded.
/// Every successor of a non-terminal state is added to the worklist.
/// States already pending in `worklist` are processed as well.
pub fn search<P, W>(problem: &mut P, worklist: &mut W, start: P::State) -> SearchStats
where
    P: SearchProblem + ?Sized,
    W: Worklist<P::State>,
{
    let mut stats = SearchStats::default();
    let mut successors = Vec::new();
    worklist.add(start);
    stats.peak_frontier = worklist.len();

    worklist.process(|state, pending| {
        stats.dequeued += 1;
        if problem.is_end(&state) {
            stats.terminal += 1;
            log::trace!("terminal state after {} dequeued", stats.dequeued);
            problem.on_end(state);
            return;
        }
        stats.expanded += 1;
        problem.next_states(&state, &mut successors);
        stats.generated += successors.len();
        for next in successors.drain(..) {
            pending.add(next);
        }
        stats.peak_frontier = stats.peak_frontier.max(pending.len());
    });

    log::debug!("search finished: {stats}");
    stats
}

// ---------------------------------------------------------------------------
// StateMachine
// ---------------------------------------------------------------------------

type IsEnd<'a, S, C> = Box<dyn Fn(&C, &S) -> bool + 'a>;
type OnEnd<'a, S, C> = Box<dyn FnMut(&mut C, S) + 'a>;
type NextStates<'a, S, C> = Box<dyn FnMut(&mut C, &S) -> Vec<S> + 'a>;

/// A search problem assembled from closures.
///
/// The session value `C` is threaded into every closure, so the best answer
/// and any best-cost table live in one place that the caller can inspect
/// after the run.
///
/// ```
/// use statewalk_search::StateMachine;
///
/// // Count the ways to reach exactly 4 by steps of 1 or 2.
/// let mut m = StateMachine::new(
///     0u32,
///     |_, n: &u32| *n >= 4,
///     |ways, n| if n == 4 { *ways += 1 },
///     |_, n| vec![n + 1, n + 2],
/// );
/// m.run(0);
/// assert_eq!(*m.session(), 5);
/// ```
pub struct StateMachine<'a, S, C = ()> {
    session: C,
    is_end: IsEnd<'a, S, C>,
    on_end: OnEnd<'a, S, C>,
    next_states: NextStates<'a, S, C>,
}

impl<'a, S, C> StateMachine<'a, S, C> {
    pub fn new(
        session: C,
        is_end: impl Fn(&C, &S) -> bool + 'a,
        on_end: impl FnMut(&mut C, S) + 'a,
        next_states: impl FnMut(&mut C, &S) -> Vec<S> + 'a,
    ) -> Self {
        Self {
            session,
            is_end: Box::new(is_end),
            on_end: Box::new(on_end),
            next_states: Box::new(next_states),
        }
    }

    /// Breadth-first run from `start`.
    pub fn run(&mut self, start: S) -> SearchStats {
        self.run_with(Fifo::new(), start)
    }

    /// Run from `start` using `worklist` to order exploration. Pass a
    /// [`PriorityQueue`](crate::PriorityQueue) for best-first search.
    pub fn run_with<W: Worklist<S>>(&mut self, mut worklist: W, start: S) -> SearchStats {
        search(self, &mut worklist, start)
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

impl<S, C> SearchProblem for StateMachine<'_, S, C> {
    type State = S;

    fn is_end(&mut self, state: &S) -> bool {
        (self.is_end)(&self.session, state)
    }

    fn on_end(&mut self, state: S) {
        (self.on_end)(&mut self.session, state)
    }

    fn next_states(&mut self, state: &S, out: &mut Vec<S>) {
        out.extend((self.next_states)(&mut self.session, state));
    }
}

impl<S, C: fmt::Debug> fmt::Debug for StateMachine<'_, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            dequeued: 9,
            terminal: 2,
            expanded: 7,
            generated: 8,
            peak_frontier: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
