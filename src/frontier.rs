//! Open set of the search: a logical map from discovered, not yet finalized nodes to their
//! current key, backed by a binary heap with lazy decrease-key.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestKeyHolder<K> {
    key: K,
    seq: u64,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestKeyHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestKeyHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key.eq(&other.key) && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestKeyHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestKeyHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest key wins, then the earliest insertion
        match other.key.cmp(&self.key) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Min-priority frontier over node indices. Equal keys leave in insertion order, so a
/// constant key turns the frontier into a plain FIFO queue.
///
/// Improving the key of an open node pushes a second heap entry instead of sifting the old
/// one; [pop](Self::pop) discards entries that no longer match the stored key.
pub struct Frontier<K> {
    heap: BinaryHeap<SmallestKeyHolder<K>>,
    open: FxIndexMap<usize, K>,
    next_seq: u64,
    high_water: usize,
}

impl<K: Ord + Copy> Default for Frontier<K> {
    fn default() -> Self {
        Frontier::new()
    }
}

impl<K: Ord + Copy> Frontier<K> {
    pub fn new() -> Frontier<K> {
        Frontier {
            heap: BinaryHeap::new(),
            open: FxIndexMap::default(),
            next_seq: 0,
            high_water: 0,
        }
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.open.clear();
        self.next_seq = 0;
        self.high_water = 0;
    }

    /// Inserts `index` with `key`, or lowers the key of an index already present. Returns
    /// [false] and leaves the frontier untouched if the index is present with a key that is
    /// not strictly larger.
    pub fn insert_or_update(&mut self, index: usize, key: K) -> bool {
        match self.open.entry(index) {
            Vacant(e) => {
                e.insert(key);
            }
            Occupied(mut e) => {
                if key < *e.get() {
                    e.insert(key);
                } else {
                    return false;
                }
            }
        }
        self.heap.push(SmallestKeyHolder {
            key,
            seq: self.next_seq,
            index,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.open.len());
        true
    }

    /// Removes and returns the index with the smallest key, earliest insertion first on ties.
    pub fn pop(&mut self) -> Option<(usize, K)> {
        while let Some(SmallestKeyHolder { key, index, .. }) = self.heap.pop() {
            // Stale entry: the node was popped already or its key improved since.
            if self.open.get(&index) != Some(&key) {
                continue;
            }
            self.open.swap_remove(&index);
            return Some((index, key));
        }
        None
    }

    pub fn contains(&self, index: usize) -> bool {
        self.open.contains_key(&index)
    }
    pub fn key(&self, index: usize) -> Option<K> {
        self.open.get(&index).copied()
    }
    pub fn len(&self) -> usize {
        self.open.len()
    }
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
    /// Largest number of open nodes held at once since the last [clear](Self::clear).
    pub fn high_water(&self) -> usize {
        self.high_water
    }
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.keys().copied()
    }
}
