//! Worklists: the pending-state containers that decide exploration order.
//!
//! [`Worklist::process`] is a live loop. Items added by the callback while
//! it runs are taken in the same call, according to the worklist's
//! discipline.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A bag of pending items with a removal discipline.
pub trait Worklist<T> {
    /// Insert one pending item.
    fn add(&mut self, item: T);

    /// Remove the next item according to the discipline.
    fn take(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// Whether no items are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take items one at a time and hand each to `f` until the worklist is
    /// empty.
    ///
    /// `f` receives the worklist itself so it can add further items; those
    /// are observed by this same call. Re-entering `process` from inside
    /// `f` is not supported.
    fn process(&mut self, mut f: impl FnMut(T, &mut Self))
    where
        Self: Sized,
    {
        while let Some(item) = self.take() {
            f(item, self);
        }
    }
}

// ---------------------------------------------------------------------------
// Fifo
// ---------------------------------------------------------------------------

/// First-in first-out queue. Yields breadth-first exploration.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Worklist<T> for Fifo<T> {
    #[inline]
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// Lifo
// ---------------------------------------------------------------------------

/// Last-in first-out stack. Yields depth-first exploration, which keeps the
/// frontier small for exhaustive enumerations.
#[derive(Debug, Clone)]
pub struct Lifo<T> {
    items: Vec<T>,
}

impl<T> Lifo<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Worklist<T> for Lifo<T> {
    #[inline]
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// PriorityQueue
// ---------------------------------------------------------------------------

/// A boxed comparator, the comparator type produced by
/// [`PriorityQueue::by_key`].
pub type BoxedCompare<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// An entry in the heap.
#[derive(Debug, Clone)]
struct Entry<T> {
    item: T,
    /// Insertion counter; breaks comparator ties so equal items leave in
    /// insertion order.
    seq: u64,
}

/// Binary min-heap ordered by a caller comparator.
///
/// The item for which `compare` returns [`Ordering::Less`] against all
/// others is taken first. Items the comparator considers equal are taken
/// in insertion order. `compare` must be a total order; otherwise the
/// order of removal is unspecified.
pub struct PriorityQueue<T, C> {
    heap: Vec<Entry<T>>,
    seq: u64,
    compare: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `compare` (smallest first).
    pub fn new(compare: C) -> Self {
        Self {
            heap: Vec::new(),
            seq: 0,
            compare,
        }
    }

    /// The item that [`take`](Worklist::take) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|e| &e.item)
    }

    /// Whether entry `a` must leave before entry `b`.
    #[inline]
    fn before(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.heap[a], &self.heap[b]);
        match (self.compare)(&ea.item, &eb.item) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => ea.seq < eb.seq,
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.before(i, parent) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.before(right, left) {
                right
            } else {
                left
            };
            if !self.before(child, i) {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }
}

impl<'a, T> PriorityQueue<T, BoxedCompare<'a, T>> {
    /// Create an empty queue ordered by ascending `key(item)`.
    pub fn by_key<K: Ord>(key: impl Fn(&T) -> K + 'a) -> Self {
        Self::new(Box::new(move |a: &T, b: &T| key(a).cmp(&key(b))))
    }
}

impl<T, C> Worklist<T> for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn add(&mut self, item: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { item, seq });
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    fn take(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let entry = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}
