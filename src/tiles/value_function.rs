//! Linear action-value function over tile-coded features.

use super::config::TileCodingConfig;
use super::hash_table::IndexHashTable;
use super::tiling::{tiles, HashTarget};

/// Linear value function whose features are the active tiles of a state.
///
/// Each active tile contributes its weight, so the estimate is the sum of
/// `num_tilings` weights. Updates spread the step size evenly across tiles.
///
/// Callers scale continuous features before passing them in, e.g.
/// `position * num_tilings / (max - min)`, and pass the action as an integer
/// discriminator.
#[derive(Debug, Clone)]
pub struct TiledValueFunction {
    config: TileCodingConfig,
    table: IndexHashTable,
    weights: Vec<f64>,
}

impl TiledValueFunction {
    pub fn new(config: TileCodingConfig) -> Self {
        Self {
            config,
            table: IndexHashTable::new(config.max_size),
            weights: vec![0.0; config.max_size],
        }
    }

    pub fn config(&self) -> &TileCodingConfig {
        &self.config
    }

    /// The index hash table backing the features.
    pub fn table(&self) -> &IndexHashTable {
        &self.table
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the indices of the active tiles, assigning new ones as needed.
    pub fn active_tiles(&mut self, floats: &[f64], ints: &[i64]) -> Vec<usize> {
        tiles(
            HashTarget::Table(&mut self.table),
            self.config.num_tilings,
            floats,
            ints,
            false,
        )
        .into_iter()
        .flatten()
        .collect()
    }

    /// Current estimate for the given features.
    pub fn value(&mut self, floats: &[f64], ints: &[i64]) -> f64 {
        self.active_tiles(floats, ints)
            .into_iter()
            .map(|i| self.weights[i])
            .sum()
    }

    /// Moves the estimate toward `target` by one semi-gradient step.
    pub fn learn(&mut self, floats: &[f64], ints: &[i64], target: f64) {
        let active = self.active_tiles(floats, ints);
        let estimate: f64 = active.iter().map(|&i| self.weights[i]).sum();
        let delta = self.config.tile_step_size() * (target - estimate);
        for i in active {
            self.weights[i] += delta;
        }
    }

    /// Negated best action value, i.e. the estimated number of steps to go
    /// when every step costs -1.
    ///
    /// Each action is appended as the single integer discriminator. Returns
    /// positive infinity for an empty action set.
    pub fn cost_to_go(&mut self, floats: &[f64], actions: &[i64]) -> f64 {
        let best = actions
            .iter()
            .map(|&a| self.value(floats, &[a]))
            .fold(f64::NEG_INFINITY, f64::max);
        -best
    }
}
