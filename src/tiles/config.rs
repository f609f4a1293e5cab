//! Configuration for tile-coded value functions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hyperparameters of a [`TiledValueFunction`](super::TiledValueFunction).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileCodingConfig {
    /// Number of overlapping tilings; also the number of active tiles.
    pub num_tilings: usize,
    /// Capacity of the index hash table and length of the weight vector.
    pub max_size: usize,
    /// Step size α before it is split across tilings.
    pub step_size: f64,
}

impl TileCodingConfig {
    /// Step size applied to each active tile (α / number of tilings).
    pub fn tile_step_size(&self) -> f64 {
        if self.num_tilings == 0 {
            0.0
        } else {
            self.step_size / self.num_tilings as f64
        }
    }
}

impl Default for TileCodingConfig {
    fn default() -> Self {
        Self {
            num_tilings: 8,
            max_size: 2048,
            step_size: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = TileCodingConfig::default();
        assert!(cfg.num_tilings.is_power_of_two());
        assert!(cfg.max_size >= cfg.num_tilings);
        assert!(cfg.step_size > 0.0);
    }

    #[test]
    fn step_size_is_split_across_tilings() {
        let cfg = TileCodingConfig {
            num_tilings: 4,
            max_size: 64,
            step_size: 0.5,
        };
        assert_eq!(cfg.tile_step_size(), 0.125);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let cfg = TileCodingConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let restored: TileCodingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, restored);
    }
}
