//! Grid-world maze environment consumed by the Dyna drivers.

pub mod grid;
pub mod types;

pub use grid::{Maze, DYNA_MAZE_OPTIMAL_LENGTH};
pub use types::{Action, Cell};
