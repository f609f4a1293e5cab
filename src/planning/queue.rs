//! Max-priority queue with at most one live entry per key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use fxhash::FxHashMap;

use super::error::PlanningError;

/// A total-order key for `f64` priorities using IEEE-754 total order
/// (`total_cmp`). NaNs are rejected before they reach the heap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priority(pub(crate) f64);

impl Priority {
    pub fn new(value: f64) -> Result<Self, PlanningError> {
        if value.is_nan() {
            Err(PlanningError::NanPriority)
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for Priority {}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
struct HeapEntry<K> {
    priority: Priority,
    seq: u64,
    key: K,
}

// Higher priority first; among equal priorities the earlier insertion wins.
impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for HeapEntry<K> {}

/// Priority queue keyed by `K`, popping the numerically highest priority.
///
/// Re-inserting a key supersedes its previous entry. Superseded entries stay
/// in the heap as tombstones and are skipped when they surface, so the heap
/// may be larger than the number of live entries.
///
/// # Invariants
///
/// - At most one live entry per key
/// - `is_empty()` and `len()` count live entries only
///
/// # Complexity
/// - `push`: O(log n) in live + tombstoned entries
/// - `pop`: amortized O(log n)
/// - `remove`, `is_empty`, `len`: O(1)
#[derive(Debug, Clone)]
pub struct PriorityQueue<K> {
    heap: BinaryHeap<HeapEntry<K>>,
    live: FxHashMap<K, u64>,
    counter: u64,
}

impl<K> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            counter: 0,
        }
    }
}

impl<K: Clone + Eq + Hash> PriorityQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of heap slots, tombstones included.
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    /// Adds `key` with `priority`, superseding any live entry for the key.
    pub fn push(&mut self, key: K, priority: f64) -> Result<(), PlanningError> {
        let priority = Priority::new(priority)?;
        let seq = self.counter;
        self.counter += 1;
        self.live.insert(key.clone(), seq);
        self.heap.push(HeapEntry { priority, seq, key });
        Ok(())
    }

    /// Tombstones the live entry for `key`. Returns true if one existed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.live.remove(key).is_some()
    }

    /// Removes and returns the live entry with the highest priority.
    pub fn pop(&mut self) -> Result<(K, f64), PlanningError> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.key) == Some(&entry.seq) {
                self.live.remove(&entry.key);
                return Ok((entry.key, entry.priority.value()));
            }
        }
        Err(PlanningError::EmptyQueue)
    }
}
