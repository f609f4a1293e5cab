//! Hyperparameters of the mountain car agent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for semi-gradient n-step SARSA.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SarsaConfig {
    /// Number of rewards summed before bootstrapping.
    pub n_steps: usize,
    /// Exploration probability ε. Zero-initialized weights are optimistic,
    /// so the greedy policy already explores.
    pub exploration_probability: f64,
    /// Episodes are cut off after this many steps.
    pub max_steps: Option<usize>,
}

impl Default for SarsaConfig {
    fn default() -> Self {
        Self {
            n_steps: 1,
            exploration_probability: 0.0,
            max_steps: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SarsaConfig::default();
        assert_eq!(cfg.n_steps, 1);
        assert_eq!(cfg.exploration_probability, 0.0);
        assert!(cfg.max_steps.is_none());
    }
}
