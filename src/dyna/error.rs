use thiserror::Error;

use crate::planning::PlanningError;

/// Errors raised by the Dyna experiments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DynaError {
    #[error("Maze has no changing-layout schedule (old/new obstacles, switch time, max steps)")]
    NotAChangingMaze,

    #[error(transparent)]
    Planning(#[from] PlanningError),
}
