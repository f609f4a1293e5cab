//! Model trait for Dyna-style planning.

use rand::Rng;

use super::types::Experience;

/// A learned model of the environment that replays simulated experience.
///
/// Models are fed every real transition and sampled during the planning
/// phase. Randomness always comes from the caller's generator.
pub trait Model<S, A> {
    /// Records the real transition `(state, action) -> (next_state, reward)`.
    fn feed(&mut self, state: &S, action: A, next_state: &S, reward: f64);

    /// Draws a simulated transition, or `None` before anything was fed.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Experience<S, A>>;
}
