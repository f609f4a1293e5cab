//! Single-episode drivers for Dyna-Q and prioritized sweeping.
//!
//! Each driver starts at the maze's start cell and runs until a goal is
//! reached or the maze's step limit is exceeded.

use rand::Rng;

use super::config::DynaConfig;
use super::q_values::ActionValues;
use crate::maze::{Action, Cell, Maze};
use crate::planning::{Model, PlanningError, PriorityModel};

/// Slack allowed over the optimal path length by [`check_path`].
pub const RELAXED_OPTIMAL_PATH: f64 = 1.2;

/// ε-greedy action selection with uniform tie-breaking among greedy actions.
pub fn choose_action<R: Rng + ?Sized>(
    cell: Cell,
    q: &ActionValues,
    config: &DynaConfig,
    rng: &mut R,
) -> Action {
    if rng.gen::<f64>() < config.exploration_probability {
        Action::ALL[rng.gen_range(0..Action::ALL.len())]
    } else {
        q.sample_greedy(cell, rng)
    }
}

/// One-step target error `r + γ max_a Q(s', a) - Q(s, a)`.
fn td_error(
    q: &ActionValues,
    config: &DynaConfig,
    cell: Cell,
    action: Action,
    reward: f64,
    next: Cell,
) -> f64 {
    reward + config.discount * q.max(next) - q.get(cell, action)
}

fn q_update(
    q: &mut ActionValues,
    config: &DynaConfig,
    cell: Cell,
    action: Action,
    reward: f64,
    next: Cell,
) {
    let delta = td_error(q, config, cell, action, reward, next);
    q.add(cell, action, config.step_size * delta);
}

fn over_limit(maze: &Maze, steps: usize) -> bool {
    maze.max_steps.is_some_and(|max| steps > max)
}

/// Plays one Dyna-Q (or Dyna-Q+) episode and returns the number of real
/// steps taken.
///
/// Every real step is followed by a Q-learning update, a model update and
/// `planning_steps` simulated updates drawn from `model`.
pub fn dyna_q<M, R>(
    q: &mut ActionValues,
    model: &mut M,
    maze: &Maze,
    config: &DynaConfig,
    rng: &mut R,
) -> usize
where
    M: Model<Cell, Action>,
    R: Rng + ?Sized,
{
    let mut state = maze.start;
    let mut steps = 0;

    while !maze.is_goal(state) {
        steps += 1;

        let action = choose_action(state, q, config, rng);
        let (next, reward) = maze.step(state, action);
        q_update(q, config, state, action, reward, next);
        model.feed(&state, action, &next, reward);

        for _ in 0..config.planning_steps {
            if let Some(exp) = model.sample(rng) {
                q_update(q, config, exp.state, exp.action, exp.reward, exp.next_state);
            }
        }

        state = next;
        if over_limit(maze, steps) {
            break;
        }
    }

    log::trace!("dyna-q episode finished after {} steps", steps);
    steps
}

/// Plays one prioritized-sweeping episode and returns the number of value
/// backups performed, planning and real steps included.
///
/// Real transitions are not applied directly: a transition whose priority
/// exceeds the threshold is queued, then up to `planning_steps` queued pairs
/// are replayed in priority order, re-queueing the predecessors of every
/// replayed state.
pub fn prioritized_sweeping<R: Rng + ?Sized>(
    q: &mut ActionValues,
    model: &mut PriorityModel<Cell, Action>,
    maze: &Maze,
    config: &DynaConfig,
    rng: &mut R,
) -> Result<usize, PlanningError> {
    let mut state = maze.start;
    let mut steps = 0;
    let mut backups = 0;

    while !maze.is_goal(state) {
        steps += 1;

        let action = choose_action(state, q, config, rng);
        let (next, reward) = maze.step(state, action);
        model.feed(&state, action, &next, reward);

        let priority = td_error(q, config, state, action, reward, next).abs();
        if priority > config.threshold {
            model.insert(priority, &state, action)?;
        }

        let mut planning_step = 0;
        while planning_step < config.planning_steps && !model.is_empty() {
            let sample = model.sample()?;
            q_update(
                q,
                config,
                sample.state,
                sample.action,
                sample.reward,
                sample.next_state,
            );

            let target = q.max(sample.state);
            for pred in model.predecessors(&sample.state) {
                let priority =
                    (pred.reward + config.discount * target - q.get(pred.state, pred.action)).abs();
                if priority > config.threshold {
                    model.insert(priority, &pred.state, pred.action)?;
                }
            }
            planning_step += 1;
        }

        state = next;
        backups += planning_step + 1;
        if over_limit(maze, steps) {
            break;
        }
    }

    log::trace!(
        "prioritized sweeping episode finished after {} steps, {} backups",
        steps,
        backups
    );
    Ok(backups)
}

/// Checks whether the greedy policy reaches a goal within
/// [`RELAXED_OPTIMAL_PATH`] times the maze's optimal path length.
pub fn check_path(q: &ActionValues, maze: &Maze) -> bool {
    let max_steps = maze.optimal_length() as f64 * RELAXED_OPTIMAL_PATH;
    let mut state = maze.start;
    let mut steps = 0;

    while !maze.is_goal(state) {
        let (next, _) = maze.step(state, q.argmax(state));
        state = next;
        steps += 1;
        if steps as f64 > max_steps {
            return false;
        }
    }
    true
}

/// Length of the greedy path from the start, or `None` if it does not reach
/// a goal within `limit` steps.
pub fn greedy_path_length(q: &ActionValues, maze: &Maze, limit: usize) -> Option<usize> {
    let mut state = maze.start;
    for steps in 0..=limit {
        if maze.is_goal(state) {
            return Some(steps);
        }
        state = maze.step(state, q.argmax(state)).0;
    }
    None
}
