//! Semi-gradient n-step SARSA on the mountain car.

use rand::Rng;

use super::config::SarsaConfig;
use super::env::{CarState, Throttle, POSITION_MAX, POSITION_MIN, VELOCITY_MAX, VELOCITY_MIN};
use super::value::CarValueFunction;

/// ε-greedy throttle selection with uniform tie-breaking among greedy
/// throttles.
pub fn choose_throttle<R: Rng + ?Sized>(
    state: CarState,
    q: &mut CarValueFunction,
    config: &SarsaConfig,
    rng: &mut R,
) -> Throttle {
    if rng.gen::<f64>() < config.exploration_probability {
        return Throttle::ALL[rng.gen_range(0..Throttle::ALL.len())];
    }
    let values = Throttle::ALL.map(|t| q.value(state, t));
    let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let greedy: Vec<Throttle> = Throttle::ALL
        .iter()
        .zip(values)
        .filter(|(_, v)| *v == best)
        .map(|(&t, _)| t)
        .collect();
    if greedy.is_empty() {
        return Throttle::Zero;
    }
    greedy[rng.gen_range(0..greedy.len())]
}

/// Plays one episode from a random position near the valley floor, updating
/// `q` with n-step returns, and returns the episode length.
///
/// The return for time `t` sums the next `n` rewards and bootstraps from
/// `Q(S_{t+n}, A_{t+n})` when that step is still inside the episode.
pub fn n_step_sarsa<R: Rng + ?Sized>(
    q: &mut CarValueFunction,
    config: &SarsaConfig,
    rng: &mut R,
) -> usize {
    let n = config.n_steps.max(1);
    let mut state = CarState::new(rng.gen_range(-0.6..-0.4), 0.0);
    let mut throttle = choose_throttle(state, q, config, rng);

    let mut states = vec![state];
    let mut throttles = vec![throttle];
    let mut rewards = vec![0.0];
    let mut end = usize::MAX;
    let mut time = 0;

    loop {
        time += 1;
        if time < end {
            let (next, reward) = state.step(throttle);
            let next_throttle = choose_throttle(next, q, config, rng);
            states.push(next);
            throttles.push(next_throttle);
            rewards.push(reward);
            if next.is_terminal() || config.max_steps.is_some_and(|max| time >= max) {
                end = time;
            }
            state = next;
            throttle = next_throttle;
        }

        let Some(update) = time.checked_sub(n) else {
            continue;
        };
        let horizon = (update + n).min(end);
        let mut target: f64 = rewards[update + 1..=horizon].iter().sum();
        if update + n <= end {
            target += q.value(states[update + n], throttles[update + n]);
        }
        if !states[update].is_terminal() {
            q.learn(states[update], throttles[update], target);
        }
        if update + 1 == end {
            break;
        }
    }

    log::trace!("mountain car episode finished after {} steps", end);
    end
}

/// Learned cost-to-go over an evenly spaced `grid_size x grid_size` grid of
/// positions and velocities, as `(position, velocity, cost)` triples.
pub fn cost_to_go_grid(q: &mut CarValueFunction, grid_size: usize) -> Vec<(f64, f64, f64)> {
    let spaced = |min: f64, max: f64, i: usize| {
        if grid_size <= 1 {
            min
        } else {
            min + (max - min) * i as f64 / (grid_size - 1) as f64
        }
    };
    let mut grid = Vec::with_capacity(grid_size * grid_size);
    for i in 0..grid_size {
        let position = spaced(POSITION_MIN, POSITION_MAX, i);
        for j in 0..grid_size {
            let velocity = spaced(VELOCITY_MIN, VELOCITY_MAX, j);
            let cost = q.cost_to_go(CarState::new(position, velocity));
            grid.push((position, velocity, cost));
        }
    }
    grid
}
