//! Dyna agents on the grid-world mazes.
//!
//! Tabular Q-learning plus planning: Dyna-Q replays a [`TrivialModel`],
//! Dyna-Q+ a [`TimeModel`], and prioritized sweeping a [`PriorityModel`].
//!
//! [`TrivialModel`]: crate::planning::TrivialModel
//! [`TimeModel`]: crate::planning::TimeModel
//! [`PriorityModel`]: crate::planning::PriorityModel

pub mod config;
pub mod episodes;
pub mod error;
pub mod experiments;
pub mod q_values;

pub use config::DynaConfig;
pub use episodes::{
    check_path, choose_action, dyna_q, greedy_path_length, prioritized_sweeping,
    RELAXED_OPTIMAL_PATH,
};
pub use error::DynaError;
pub use experiments::{
    backups_until_optimal, changing_maze, steps_per_episode, CumulativeRewards, Planner,
};
pub use q_values::ActionValues;
