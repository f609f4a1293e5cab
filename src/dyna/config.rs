//! Hyperparameters of the Dyna agents.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for Dyna-Q, Dyna-Q+ and prioritized sweeping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynaConfig {
    /// Discount rate γ.
    pub discount: f64,
    /// Exploration probability ε of the ε-greedy policy.
    pub exploration_probability: f64,
    /// Step size α of the Q-learning update.
    pub step_size: f64,
    /// Exploration bonus weight κ used by Dyna-Q+.
    pub time_weight: f64,
    /// Simulated updates per real step.
    pub planning_steps: usize,
    /// Independent runs averaged by the experiments.
    pub runs: usize,
    /// Minimum priority θ for a pair to enter the sweeping queue.
    pub threshold: f64,
}

impl Default for DynaConfig {
    fn default() -> Self {
        Self {
            discount: 0.95,
            exploration_probability: 0.1,
            step_size: 0.1,
            time_weight: 0.0,
            planning_steps: 5,
            runs: 10,
            threshold: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = DynaConfig::default();
        assert!(cfg.discount > 0.0 && cfg.discount <= 1.0);
        assert!((0.0..=1.0).contains(&cfg.exploration_probability));
        assert!(cfg.step_size > 0.0);
        assert_eq!(cfg.planning_steps, 5);
        assert_eq!(cfg.threshold, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let cfg = DynaConfig {
            time_weight: 1e-4,
            ..DynaConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let restored: DynaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, restored);
    }
}
