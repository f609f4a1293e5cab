//! Multi-episode experiments over the Dyna mazes.
//!
//! Each run seeds its own generator from the experiment seed plus the run
//! index, so results are reproducible and runs are independent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::DynaConfig;
use super::episodes::{check_path, dyna_q, prioritized_sweeping};
use super::error::DynaError;
use super::q_values::ActionValues;
use crate::maze::{Action, Cell, Maze};
use crate::planning::{Model, PlanningError, PriorityModel, TimeModel, TrivialModel};

/// Planning method compared by [`backups_until_optimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planner {
    DynaQ,
    PrioritizedSweeping,
}

/// Cumulative reward per time step, averaged over runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeRewards {
    pub dyna_q: Vec<f64>,
    pub dyna_q_plus: Vec<f64>,
}

fn run_rng(seed: u64, run: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(run as u64))
}

/// Average number of steps per episode for Dyna-Q on `maze`.
pub fn steps_per_episode(maze: &Maze, config: &DynaConfig, episodes: usize, seed: u64) -> Vec<f64> {
    let mut totals = vec![0.0; episodes];
    let runs = config.runs.max(1);

    for run in 0..runs {
        let mut rng = run_rng(seed, run);
        let mut q = ActionValues::new(maze);
        let mut model = TrivialModel::new();
        for total in totals.iter_mut() {
            *total += dyna_q(&mut q, &mut model, maze, config, &mut rng) as f64;
        }
        log::debug!("steps per episode: run {} of {} done", run + 1, runs);
    }

    totals.iter().map(|t| t / runs as f64).collect()
}

/// Plays Dyna-Q episodes until the step budget is used up, recording the
/// cumulative number of goals reached at every step.
fn cumulative_curve<M, R>(
    maze: &mut Maze,
    model: &mut M,
    config: &DynaConfig,
    max_steps: usize,
    switch_time: usize,
    rng: &mut R,
) -> Vec<f64>
where
    M: Model<Cell, Action>,
    R: Rng + ?Sized,
{
    let mut curve = vec![0.0; max_steps];
    let mut q = ActionValues::new(maze);
    let mut steps = 0;
    let mut last = 0;

    maze.use_old_obstacles();
    while steps < max_steps {
        steps += dyna_q(&mut q, model, maze, config, rng);

        let reached = curve[last];
        for value in &mut curve[last..steps.min(max_steps)] {
            *value = reached;
        }
        curve[steps.min(max_steps - 1)] = reached + 1.0;
        last = steps;

        if steps > switch_time {
            maze.use_new_obstacles();
        }
    }
    curve
}

/// Compares Dyna-Q and Dyna-Q+ on a maze whose obstacles change midway
/// (see [`Maze::blocking`] and [`Maze::shortcut`]).
///
/// Dyna-Q+ uses `config.time_weight` as its exploration bonus weight.
pub fn changing_maze(
    maze: &Maze,
    config: &DynaConfig,
    seed: u64,
) -> Result<CumulativeRewards, DynaError> {
    let (Some(max_steps), Some(switch_time)) = (maze.max_steps, maze.obstacle_switch_time) else {
        return Err(DynaError::NotAChangingMaze);
    };
    if maze.old_obstacles.is_none() || maze.new_obstacles.is_none() || max_steps == 0 {
        return Err(DynaError::NotAChangingMaze);
    }

    let runs = config.runs.max(1);
    let mut dyna_q_total = vec![0.0; max_steps];
    let mut dyna_q_plus_total = vec![0.0; max_steps];
    let mut maze = maze.clone();

    for run in 0..runs {
        let mut rng = run_rng(seed, run);

        let mut trivial = TrivialModel::new();
        let curve = cumulative_curve(&mut maze, &mut trivial, config, max_steps, switch_time, &mut rng);
        for (total, v) in dyna_q_total.iter_mut().zip(curve) {
            *total += v;
        }

        let mut timed = TimeModel::new(Action::ALL.to_vec(), config.time_weight);
        let curve = cumulative_curve(&mut maze, &mut timed, config, max_steps, switch_time, &mut rng);
        for (total, v) in dyna_q_plus_total.iter_mut().zip(curve) {
            *total += v;
        }

        log::debug!("changing maze: run {} of {} done", run + 1, runs);
    }

    let average = |v: Vec<f64>| -> Vec<f64> { v.into_iter().map(|x| x / runs as f64).collect() };
    Ok(CumulativeRewards {
        dyna_q: average(dyna_q_total),
        dyna_q_plus: average(dyna_q_plus_total),
    })
}

/// Number of value backups `planner` needs before the greedy policy follows
/// a near-optimal path, or `None` if that does not happen within
/// `max_episodes` episodes.
///
/// A Dyna-Q step counts as `planning_steps + 1` backups.
pub fn backups_until_optimal<R: Rng + ?Sized>(
    planner: Planner,
    maze: &Maze,
    config: &DynaConfig,
    max_episodes: usize,
    rng: &mut R,
) -> Result<Option<usize>, PlanningError> {
    let mut q = ActionValues::new(maze);
    let mut backups = 0;
    let mut trivial = TrivialModel::new();
    let mut priority = PriorityModel::new();

    for episode in 0..max_episodes {
        backups += match planner {
            Planner::DynaQ => {
                dyna_q(&mut q, &mut trivial, maze, config, rng) * (config.planning_steps + 1)
            }
            Planner::PrioritizedSweeping => {
                prioritized_sweeping(&mut q, &mut priority, maze, config, rng)?
            }
        };
        if check_path(&q, maze) {
            log::debug!(
                "{:?} found a near-optimal path after {} episodes, {} backups",
                planner,
                episode + 1,
                backups
            );
            return Ok(Some(backups));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_maze_requires_a_schedule() {
        let err = changing_maze(&Maze::dyna(), &DynaConfig::default(), 0).unwrap_err();
        assert_eq!(err, DynaError::NotAChangingMaze);
    }

    #[test]
    fn cumulative_rewards_are_monotone() {
        let mut maze = Maze::blocking();
        maze.max_steps = Some(400);
        maze.obstacle_switch_time = Some(200);
        let config = DynaConfig {
            runs: 2,
            time_weight: 1e-4,
            ..DynaConfig::default()
        };
        let rewards = changing_maze(&maze, &config, 7).unwrap();
        for curve in [&rewards.dyna_q, &rewards.dyna_q_plus] {
            assert_eq!(curve.len(), 400);
            assert!(curve.windows(2).all(|w| w[1] >= w[0]));
            assert!(curve[0] >= 0.0);
        }
    }

    #[test]
    fn steps_per_episode_has_one_entry_per_episode() {
        let config = DynaConfig {
            runs: 1,
            ..DynaConfig::default()
        };
        let steps = steps_per_episode(&Maze::dyna(), &config, 5, 3);
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().all(|&s| s >= 14.0));
    }
}
