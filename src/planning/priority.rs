//! Model for prioritized sweeping.

use std::hash::Hash;

use super::error::PlanningError;
use super::predecessors::PredecessorGraph;
use super::queue::PriorityQueue;
use super::store::ExperienceStore;
use super::types::{Outcome, Predecessor, PrioritySample};

/// Transition store plus priority queue plus predecessor index.
///
/// Real transitions are recorded with [`feed`](Self::feed). The planner
/// queues state-action pairs whose value is expected to change with
/// [`insert`](Self::insert), replays the most urgent one with
/// [`sample`](Self::sample), and walks [`predecessors`](Self::predecessors)
/// of the replayed state to propagate the change backward.
///
/// # Example
///
/// ```
/// use dynatile::planning::PriorityModel;
///
/// let mut model = PriorityModel::new();
/// model.feed(&(0, 0), 3u8, &(0, 1), 0.0);
/// model.feed(&(0, 1), 3u8, &(0, 2), 1.0);
/// model.insert(0.5, &(0, 0), 3).unwrap();
/// model.insert(1.0, &(0, 1), 3).unwrap();
///
/// let first = model.sample().unwrap();
/// assert_eq!(first.state, (0, 1));
/// assert_eq!(model.predecessors(&first.state).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityModel<S, A> {
    store: ExperienceStore<S, A, Outcome<S>>,
    queue: PriorityQueue<(S, A)>,
    predecessors: PredecessorGraph<S, A>,
}

impl<S, A> Default for PriorityModel<S, A> {
    fn default() -> Self {
        Self {
            store: ExperienceStore::default(),
            queue: PriorityQueue::default(),
            predecessors: PredecessorGraph::default(),
        }
    }
}

impl<S, A> PriorityModel<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the transition and indexes `(state, action)` as a
    /// predecessor of `next_state`. A later feed for the same pair replaces
    /// the stored outcome.
    pub fn feed(&mut self, state: &S, action: A, next_state: &S, reward: f64) {
        self.store.insert(
            state,
            action,
            Outcome {
                next_state: next_state.clone(),
                reward,
            },
        );
        self.predecessors.record(state, action, next_state);
    }

    /// Queues `(state, action)` with `priority`, superseding a queued entry
    /// for the same pair.
    pub fn insert(&mut self, priority: f64, state: &S, action: A) -> Result<(), PlanningError> {
        self.queue.push((state.clone(), action), priority)
    }

    /// True when no state-action pair is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued state-action pairs.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Number of recorded transitions.
    pub fn transitions(&self) -> usize {
        self.store.len()
    }

    /// Pops the highest-priority pair and returns it with its recorded
    /// transition.
    pub fn sample(&mut self) -> Result<PrioritySample<S, A>, PlanningError> {
        let ((state, action), priority) = self.queue.pop()?;
        let outcome = self
            .store
            .get(&state, &action)
            .ok_or(PlanningError::UnknownTransition)?;
        Ok(PrioritySample {
            priority,
            next_state: outcome.next_state.clone(),
            reward: outcome.reward,
            state,
            action,
        })
    }

    /// Every recorded pair whose transition led into `state`, with that
    /// transition's current reward. Empty for a state never reached.
    pub fn predecessors(&self, state: &S) -> Vec<Predecessor<S, A>> {
        self.predecessors
            .predecessors(state)
            .filter_map(|(pred, action)| {
                self.store.get(pred, &action).map(|outcome| Predecessor {
                    state: pred.clone(),
                    action,
                    reward: outcome.reward,
                })
            })
            .collect()
    }
}
