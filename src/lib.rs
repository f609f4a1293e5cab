//! dynatile - tile coding and prioritized planning for tabular and linear
//! reinforcement learning.
//!
//! The [`tiles`] module maps scaled continuous features onto sparse,
//! bounded indices through an index hash table. The [`planning`] module
//! provides Dyna-style models, including the prioritized-sweeping model with
//! its predecessor index. [`maze`] and [`dyna`] are the grid-world
//! environment and the agents that drive the planning models, and
//! [`mountain_car`] drives a tile-coded value function with n-step SARSA.

pub mod dyna;
pub mod maze;
pub mod mountain_car;
pub mod planning;
pub mod tiles;

pub use planning::{PlanningError, PriorityModel};
pub use tiles::{IndexHashTable, TiledValueFunction};
