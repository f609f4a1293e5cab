use std::hash::Hasher;

use fxhash::FxHasher64;

/// Grid coordinates of one tile inside one tiling.
///
/// The record keeps the tiling index, the quantized float coordinates and
/// the integer discriminators in separate fields, so inputs with a different
/// float/int split never produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileCoords {
    pub(crate) tiling: usize,
    pub(crate) coords: Vec<i64>,
    pub(crate) ints: Vec<i64>,
}

impl TileCoords {
    /// Creates a coordinate record.
    pub fn new(tiling: usize, coords: Vec<i64>, ints: Vec<i64>) -> Self {
        Self {
            tiling,
            coords,
            ints,
        }
    }

    /// Returns the tiling this tile belongs to.
    pub fn tiling(&self) -> usize {
        self.tiling
    }

    /// Returns the quantized float coordinates.
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Returns the integer discriminators.
    pub fn ints(&self) -> &[i64] {
        &self.ints
    }

    /// Structural hash of the record.
    ///
    /// Fields are written in a fixed order with explicit lengths through a
    /// seed-free FxHash, so the value is identical across runs.
    pub fn stable_hash(&self) -> u64 {
        let mut hasher = FxHasher64::default();
        hasher.write_u64(self.tiling as u64);
        hasher.write_u64(self.coords.len() as u64);
        for &c in &self.coords {
            hasher.write_i64(c);
        }
        hasher.write_u64(self.ints.len() as u64);
        for &i in &self.ints {
            hasher.write_i64(i);
        }
        hasher.finish()
    }

    /// Raw collision index in `[0, size)`, or `None` when `size` is zero.
    pub fn hash_index(&self, size: usize) -> Option<usize> {
        self.stable_hash()
            .checked_rem(size as u64)
            .map(|i| i as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_hash_is_repeatable() {
        let a = TileCoords::new(3, vec![1, -2], vec![0]);
        let b = TileCoords::new(3, vec![1, -2], vec![0]);
        assert_eq!(a.stable_hash(), b.stable_hash());
        assert_eq!(a.hash_index(97), b.hash_index(97));
    }

    #[test]
    fn float_int_split_is_part_of_the_key() {
        let as_float = TileCoords::new(0, vec![5], vec![]);
        let as_int = TileCoords::new(0, vec![], vec![5]);
        assert_ne!(as_float, as_int);
        assert_ne!(as_float.stable_hash(), as_int.stable_hash());
    }

    #[test]
    fn hash_index_is_bounded() {
        for t in 0..32 {
            let c = TileCoords::new(t, vec![t as i64 * 7, -3], vec![1]);
            assert!(c.hash_index(10).is_some_and(|i| i < 10));
        }
        assert_eq!(TileCoords::new(0, vec![1], vec![]).hash_index(0), None);
    }
}
