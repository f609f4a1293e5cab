//! Time-aware model used by Dyna-Q+.

use std::hash::Hash;

use rand::Rng;

use super::model::Model;
use super::store::ExperienceStore;
use super::types::{Experience, TimedOutcome};

/// Tabular model that rewards revisiting long-untried transitions.
///
/// Every `feed` advances the model clock by one. A sampled reward is
/// `r + kappa * sqrt(now - last_visit)`. The first time a state is fed, every
/// other action in the action set is recorded as a zero-reward self-loop
/// stamped at time 1, so untried actions can be considered during planning.
#[derive(Debug, Clone)]
pub struct TimeModel<S, A> {
    store: ExperienceStore<S, A, TimedOutcome<S>>,
    actions: Vec<A>,
    time_weight: f64,
    time: u64,
}

impl<S, A> TimeModel<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq + Hash,
{
    /// Creates a model over the given action set with bonus weight `kappa`.
    pub fn new(actions: Vec<A>, time_weight: f64) -> Self {
        Self {
            store: ExperienceStore::new(),
            actions,
            time_weight,
            time: 0,
        }
    }

    /// Number of `feed` calls so far.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn time_weight(&self) -> f64 {
        self.time_weight
    }

    /// Number of remembered state-action pairs, untried actions included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn bonus(&self, last_visit: u64) -> f64 {
        self.time_weight * (self.time.saturating_sub(last_visit) as f64).sqrt()
    }
}

impl<S, A> Model<S, A> for TimeModel<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq + Hash,
{
    fn feed(&mut self, state: &S, action: A, next_state: &S, reward: f64) {
        self.time += 1;

        if !self.store.contains_state(state) {
            for &untried in self.actions.iter().filter(|&&a| a != action) {
                self.store.insert(
                    state,
                    untried,
                    TimedOutcome {
                        next_state: state.clone(),
                        reward: 0.0,
                        time: 1,
                    },
                );
            }
        }

        self.store.insert(
            state,
            action,
            TimedOutcome {
                next_state: next_state.clone(),
                reward,
                time: self.time,
            },
        );
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Experience<S, A>> {
        let (state, action, outcome) = self.store.sample(rng)?;
        Some(Experience {
            state: state.clone(),
            action,
            next_state: outcome.next_state.clone(),
            reward: outcome.reward + self.bonus(outcome.time),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn first_visit_fills_untried_actions() {
        let mut model = TimeModel::new(vec![0u8, 1, 2, 3], 0.0);
        model.feed(&(2, 0), 3, &(2, 1), 0.0);
        assert_eq!(model.len(), 4);
        assert_eq!(model.time(), 1);

        // A second visit does not add more placeholders.
        model.feed(&(2, 0), 1, &(1, 0), 0.0);
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn untried_actions_loop_back_with_zero_reward() {
        let mut model = TimeModel::new(vec![0u8, 1], 0.0);
        model.feed(&7u32, 1, &8, 5.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let exp = model.sample(&mut rng).unwrap();
            match exp.action {
                0 => {
                    assert_eq!(exp.next_state, 7);
                    assert_eq!(exp.reward, 0.0);
                }
                _ => {
                    assert_eq!(exp.next_state, 8);
                    assert_eq!(exp.reward, 5.0);
                }
            }
        }
    }

    #[test]
    fn bonus_grows_with_elapsed_time() {
        let mut model = TimeModel::new(vec![0u8], 0.5);
        model.feed(&0u32, 0, &1, 1.0);
        for _ in 0..16 {
            model.feed(&1u32, 0, &1, 0.0);
        }
        assert_eq!(model.time(), 17);
        // State 0 was last visited at time 1: bonus 0.5 * sqrt(16) = 2.
        let mut rng = StdRng::seed_from_u64(0);
        let exp = std::iter::repeat_with(|| model.sample(&mut rng).unwrap())
            .find(|e| e.state == 0)
            .unwrap();
        assert!((exp.reward - 3.0).abs() < 1e-12);
    }
}
