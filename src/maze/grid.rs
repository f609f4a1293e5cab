//! Grid-world mazes for the Dyna experiments.

use fxhash::FxHashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Action, Cell};

/// Length of the shortest path through the Dyna maze at resolution 1.
pub const DYNA_MAZE_OPTIMAL_LENGTH: usize = 14;

/// A deterministic grid world with obstacles and absorbing goal cells.
///
/// Moving off the grid or into an obstacle leaves the agent in place.
/// Entering a goal cell yields reward 1, every other move yields 0.
///
/// Mazes used for the changing-environment experiments carry an old and a
/// new obstacle layout plus the step at which the layout switches; the
/// driver swaps them with [`use_old_obstacles`](Self::use_old_obstacles) and
/// [`use_new_obstacles`](Self::use_new_obstacles).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Maze {
    pub width: usize,
    pub height: usize,
    pub start: Cell,
    pub goals: Vec<Cell>,
    pub obstacles: FxHashSet<Cell>,
    pub old_obstacles: Option<FxHashSet<Cell>>,
    pub new_obstacles: Option<FxHashSet<Cell>>,
    /// Total step count after which the new layout applies.
    pub obstacle_switch_time: Option<usize>,
    /// Step budget per episode (or per experiment for changing mazes).
    pub max_steps: Option<usize>,
    /// Extension factor relative to the unextended layout.
    pub resolution: usize,
}

fn cells(coords: &[(usize, usize)]) -> FxHashSet<Cell> {
    coords.iter().map(|&(r, c)| Cell::new(r, c)).collect()
}

fn row_wall(row: usize, cols: std::ops::Range<usize>) -> FxHashSet<Cell> {
    cols.map(|c| Cell::new(row, c)).collect()
}

impl Maze {
    /// The 9x6 maze from the Dyna-Q planning experiments.
    pub fn dyna() -> Self {
        Self {
            width: 9,
            height: 6,
            start: Cell::new(2, 0),
            goals: vec![Cell::new(0, 8)],
            obstacles: cells(&[(1, 2), (2, 2), (3, 2), (0, 7), (1, 7), (2, 7), (4, 5)]),
            old_obstacles: None,
            new_obstacles: None,
            obstacle_switch_time: None,
            max_steps: None,
            resolution: 1,
        }
    }

    /// Maze whose short path gets blocked after 1000 steps, opening a longer
    /// path on the other side of the wall.
    pub fn blocking() -> Self {
        let old = row_wall(3, 0..8);
        Self {
            start: Cell::new(5, 3),
            obstacles: old.clone(),
            old_obstacles: Some(old),
            new_obstacles: Some(row_wall(3, 1..9)),
            obstacle_switch_time: Some(1000),
            max_steps: Some(3000),
            ..Self::dyna()
        }
    }

    /// Maze in which a shorter path opens up after 3000 steps.
    pub fn shortcut() -> Self {
        let old = row_wall(3, 1..9);
        Self {
            start: Cell::new(5, 3),
            obstacles: old.clone(),
            old_obstacles: Some(old),
            new_obstacles: Some(row_wall(3, 1..8)),
            obstacle_switch_time: Some(3000),
            max_steps: Some(6000),
            ..Self::dyna()
        }
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        self.goals.contains(&cell)
    }

    /// Shortest path length this maze is expected to reach, scaled by its
    /// resolution.
    pub fn optimal_length(&self) -> usize {
        DYNA_MAZE_OPTIMAL_LENGTH * self.resolution
    }

    /// Takes `action` in `cell` and returns the next cell and reward.
    pub fn step(&self, cell: Cell, action: Action) -> (Cell, f64) {
        let mut next = cell;
        match action {
            Action::Up => next.row = cell.row.saturating_sub(1),
            Action::Down => next.row = (cell.row + 1).min(self.height.saturating_sub(1)),
            Action::Left => next.col = cell.col.saturating_sub(1),
            Action::Right => next.col = (cell.col + 1).min(self.width.saturating_sub(1)),
        }
        if self.obstacles.contains(&next) {
            next = cell;
        }
        let reward = if self.is_goal(next) { 1.0 } else { 0.0 };
        (next, reward)
    }

    /// Switches to the old obstacle layout, if any.
    pub fn use_old_obstacles(&mut self) {
        if let Some(old) = &self.old_obstacles {
            self.obstacles = old.clone();
        }
    }

    /// Switches to the new obstacle layout, if any.
    pub fn use_new_obstacles(&mut self) {
        if let Some(new) = &self.new_obstacles {
            self.obstacles = new.clone();
        }
    }

    fn extend_cell(cell: Cell, factor: usize) -> impl Iterator<Item = Cell> {
        let base = Cell::new(cell.row * factor, cell.col * factor);
        (0..factor)
            .flat_map(move |i| (0..factor).map(move |j| Cell::new(base.row + i, base.col + j)))
    }

    /// Builds a higher-resolution copy where every cell becomes a
    /// `factor x factor` block.
    ///
    /// Changing-layout settings are not carried over. A factor of zero is
    /// treated as one, so the extended maze is never empty.
    pub fn extend(&self, factor: usize) -> Self {
        let factor = factor.max(1);
        Self {
            width: self.width * factor,
            height: self.height * factor,
            start: Cell::new(self.start.row * factor, self.start.col * factor),
            goals: self
                .goals
                .iter()
                .flat_map(|&g| Self::extend_cell(g, factor))
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .flat_map(|&o| Self::extend_cell(o, factor))
                .collect(),
            old_obstacles: None,
            new_obstacles: None,
            obstacle_switch_time: None,
            max_steps: None,
            resolution: factor,
        }
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::dyna()
    }
}
