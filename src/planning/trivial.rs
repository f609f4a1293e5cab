//! Deterministic tabular model used by Dyna-Q.

use std::hash::Hash;

use rand::Rng;

use super::model::Model;
use super::store::ExperienceStore;
use super::types::{Experience, Outcome};

/// Remembers the last outcome of every tried state-action pair and replays
/// them uniformly at random.
#[derive(Debug, Clone)]
pub struct TrivialModel<S, A> {
    store: ExperienceStore<S, A, Outcome<S>>,
}

impl<S, A> Default for TrivialModel<S, A> {
    fn default() -> Self {
        Self {
            store: ExperienceStore::default(),
        }
    }
}

impl<S, A> TrivialModel<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of remembered state-action pairs.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<S, A> Model<S, A> for TrivialModel<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq + Hash,
{
    fn feed(&mut self, state: &S, action: A, next_state: &S, reward: f64) {
        self.store.insert(
            state,
            action,
            Outcome {
                next_state: next_state.clone(),
                reward,
            },
        );
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Experience<S, A>> {
        let (state, action, outcome) = self.store.sample(rng)?;
        Some(Experience {
            state: state.clone(),
            action,
            next_state: outcome.next_state.clone(),
            reward: outcome.reward,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_model_samples_nothing() {
        let model: TrivialModel<(usize, usize), u8> = TrivialModel::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(model.sample(&mut rng).is_none());
    }

    #[test]
    fn replays_the_latest_outcome() {
        let mut model = TrivialModel::new();
        model.feed(&(0, 0), 1u8, &(0, 1), 0.0);
        model.feed(&(0, 0), 1u8, &(1, 0), 1.0);
        assert_eq!(model.len(), 1);

        let mut rng = StdRng::seed_from_u64(1);
        let exp = model.sample(&mut rng).unwrap();
        assert_eq!(
            exp,
            Experience {
                state: (0, 0),
                action: 1,
                next_state: (1, 0),
                reward: 1.0,
            }
        );
    }

    #[test]
    fn samples_cover_all_pairs() {
        let mut model = TrivialModel::new();
        model.feed(&0u32, 0u8, &1, 0.0);
        model.feed(&0u32, 1u8, &2, 0.0);
        model.feed(&1u32, 0u8, &2, 1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let exp = model.sample(&mut rng).unwrap();
            seen.insert((exp.state, exp.action));
        }
        assert_eq!(seen.len(), 3);
    }
}
