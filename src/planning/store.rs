//! Last-write-wins transition store keyed by state and action.

use std::hash::Hash;

use fxhash::FxHashMap;
use rand::Rng;

#[derive(Debug, Clone)]
struct StateRecord<S, A, V> {
    state: S,
    /// Tried actions in first-tried order, for uniform sampling.
    actions: Vec<A>,
    outcomes: FxHashMap<A, V>,
}

/// Experience store shared by the planning models.
///
/// States and their actions keep first-seen order, so sampling with a
/// seeded generator is reproducible.
///
/// # Complexity
/// - `insert`, `get`: O(1) amortized
/// - `sample`: O(1)
#[derive(Debug, Clone)]
pub struct ExperienceStore<S, A, V> {
    index: FxHashMap<S, usize>,
    records: Vec<StateRecord<S, A, V>>,
    transitions: usize,
}

impl<S, A, V> Default for ExperienceStore<S, A, V> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            records: Vec::new(),
            transitions: 0,
        }
    }
}

impl<S, A, V> ExperienceStore<S, A, V>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored state-action pairs.
    pub fn len(&self) -> usize {
        self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions == 0
    }

    /// Number of distinct states with at least one stored action.
    pub fn num_states(&self) -> usize {
        self.records.len()
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Stores `value` for `(state, action)`, replacing any previous value.
    pub fn insert(&mut self, state: &S, action: A, value: V) {
        let slot = match self.index.get(state) {
            Some(&slot) => slot,
            None => {
                let slot = self.records.len();
                self.records.push(StateRecord {
                    state: state.clone(),
                    actions: Vec::new(),
                    outcomes: FxHashMap::default(),
                });
                self.index.insert(state.clone(), slot);
                slot
            }
        };
        let record = &mut self.records[slot];
        if record.outcomes.insert(action, value).is_none() {
            record.actions.push(action);
            self.transitions += 1;
        }
    }

    pub fn get(&self, state: &S, action: &A) -> Option<&V> {
        let slot = *self.index.get(state)?;
        self.records[slot].outcomes.get(action)
    }

    /// Picks a stored state uniformly, then one of its tried actions
    /// uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&S, A, &V)> {
        if self.records.is_empty() {
            return None;
        }
        let record = &self.records[rng.gen_range(0..self.records.len())];
        let action = record.actions[rng.gen_range(0..record.actions.len())];
        let value = record.outcomes.get(&action)?;
        Some((&record.state, action, value))
    }
}
