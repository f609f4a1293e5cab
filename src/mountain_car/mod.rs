//! The mountain car task solved with semi-gradient n-step SARSA over a
//! tile-coded action-value function.

pub mod config;
pub mod env;
pub mod sarsa;
pub mod value;

pub use config::SarsaConfig;
pub use env::{CarState, Throttle, POSITION_MAX, POSITION_MIN, VELOCITY_MAX, VELOCITY_MIN};
pub use sarsa::{choose_throttle, cost_to_go_grid, n_step_sarsa};
pub use value::CarValueFunction;
