use std::collections::HashMap;
use std::hash::Hash;

/// Best known cost per canonical state key.
///
/// Expansion functions call [`record`](Self::record) for every candidate
/// and keep it only when it returns `true`, which turns an un-deduplicated
/// driver run into one that terminates on any finite key space.
#[derive(Clone, Debug)]
pub struct BestCosts<K, V = u32> {
    best: HashMap<K, V>,
}

impl<K, V> Default for BestCosts<K, V> {
    fn default() -> Self {
        Self {
            best: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq, V: Ord + Copy> BestCosts<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The best cost recorded for `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<V> {
        self.best.get(key).copied()
    }

    /// Store `cost` for `key` if it is strictly lower than the stored one.
    /// Returns whether it was stored.
    pub fn record(&mut self, key: K, cost: V) -> bool {
        match self.best.get_mut(&key) {
            Some(old) if *old <= cost => false,
            Some(old) => {
                *old = cost;
                true
            }
            None => {
                self.best.insert(key, cost);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}
