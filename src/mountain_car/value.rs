//! Action values for the mountain car over tile-coded state features.

use super::env::{CarState, Throttle, POSITION_MAX, POSITION_MIN, VELOCITY_MAX, VELOCITY_MIN};
use crate::tiles::{TileCodingConfig, TiledValueFunction};

/// `Q(state, throttle)` backed by a [`TiledValueFunction`].
///
/// Position and velocity are scaled so that one tile spans the whole range
/// of each; the throttle is the integer discriminator. The goal is absorbing
/// and always valued at zero.
#[derive(Debug, Clone)]
pub struct CarValueFunction {
    inner: TiledValueFunction,
    position_scale: f64,
    velocity_scale: f64,
}

impl CarValueFunction {
    pub fn new(config: TileCodingConfig) -> Self {
        let tilings = config.num_tilings as f64;
        Self {
            inner: TiledValueFunction::new(config),
            position_scale: tilings / (POSITION_MAX - POSITION_MIN),
            velocity_scale: tilings / (VELOCITY_MAX - VELOCITY_MIN),
        }
    }

    /// The underlying tile-coded function.
    pub fn tiles(&self) -> &TiledValueFunction {
        &self.inner
    }

    fn features(&self, state: CarState) -> [f64; 2] {
        [
            self.position_scale * state.position,
            self.velocity_scale * state.velocity,
        ]
    }

    pub fn value(&mut self, state: CarState, throttle: Throttle) -> f64 {
        if state.is_terminal() {
            return 0.0;
        }
        let features = self.features(state);
        self.inner.value(&features, &[throttle.force()])
    }

    pub fn learn(&mut self, state: CarState, throttle: Throttle, target: f64) {
        let features = self.features(state);
        self.inner.learn(&features, &[throttle.force()], target);
    }

    /// Estimated number of steps from `state` to the goal.
    pub fn cost_to_go(&mut self, state: CarState) -> f64 {
        if state.is_terminal() {
            return 0.0;
        }
        let features = self.features(state);
        let forces = Throttle::ALL.map(Throttle::force);
        self.inner.cost_to_go(&features, &forces)
    }
}
