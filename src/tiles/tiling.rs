//! Tiling generator.
//!
//! Floats are gridded at unit intervals, so any scaling has to be done by the
//! caller: multiply each feature so that one unit equals the desired
//! generalization width. `num_tilings` should be a power of two and at least
//! four times the number of floats for the offsets to spread well; neither is
//! enforced. Features too large for an `i64` grid saturate at its bounds.

use super::coords::TileCoords;
use super::hash_table::IndexHashTable;

/// Where tile coordinates are hashed to.
#[derive(Debug)]
pub enum HashTarget<'a> {
    /// Sequential indices from an index hash table.
    Table(&'a mut IndexHashTable),
    /// Raw structural hash modulo the given size.
    Size(usize),
}

/// Computes the coordinate record of every tiling, without hashing.
pub fn tile_coordinates(num_tilings: usize, floats: &[f64], ints: &[i64]) -> Vec<TileCoords> {
    let n = num_tilings as i64;
    let quantized: Vec<i64> = floats
        .iter()
        .map(|f| (f * num_tilings as f64).floor() as i64)
        .collect();

    (0..num_tilings)
        .map(|tiling| {
            let step = tiling as i64 * 2;
            let mut offset = tiling as i64;
            let mut coords = Vec::with_capacity(quantized.len());
            for q in &quantized {
                coords.push(q.saturating_add(offset).div_euclid(n));
                offset = offset.saturating_add(step);
            }
            TileCoords::new(tiling, coords, ints.to_vec())
        })
        .collect()
}

/// Maps floats and ints to one tile index per tiling.
///
/// The result always has `num_tilings` entries. An entry is `None` for a
/// read-only lookup of coordinates the table has never seen, or when the
/// target has no capacity to hash into.
///
/// # Examples
///
/// ```
/// use dynatile::tiles::{tiles, HashTarget, IndexHashTable};
///
/// let mut table = IndexHashTable::new(64);
/// let active = tiles(HashTarget::Table(&mut table), 4, &[0.0], &[], false);
/// assert_eq!(active, vec![Some(0), Some(1), Some(2), Some(3)]);
/// ```
pub fn tiles(
    target: HashTarget<'_>,
    num_tilings: usize,
    floats: &[f64],
    ints: &[i64],
    read_only: bool,
) -> Vec<Option<usize>> {
    let coords = tile_coordinates(num_tilings, floats, ints);
    match target {
        HashTarget::Table(table) => coords
            .iter()
            .map(|c| table.get_or_assign(c, read_only))
            .collect(),
        HashTarget::Size(size) => coords.iter().map(|c| c.hash_index(size)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_result_per_tiling() {
        let mut table = IndexHashTable::new(4096);
        for n in [0, 1, 2, 8, 32] {
            let out = tiles(HashTarget::Table(&mut table), n, &[0.3, 1.7], &[1], false);
            assert_eq!(out.len(), n);
            assert!(out.iter().all(Option::is_some));
        }
        let raw = tiles(HashTarget::Size(17), 8, &[2.5], &[], false);
        assert_eq!(raw.len(), 8);
        assert!(raw.iter().all(|i| i.map_or(false, |i| i < 17)));
    }

    #[test]
    fn offsets_follow_the_accumulator() {
        // Quantized floats are 5 and 2; the second offset grows by 2 * tiling.
        let coords = tile_coordinates(4, &[1.3, 0.5], &[7]);
        let got: Vec<(usize, Vec<i64>)> = coords
            .iter()
            .map(|c| (c.tiling(), c.coords().to_vec()))
            .collect();
        assert_eq!(
            got,
            vec![
                (0, vec![1, 0]),
                (1, vec![1, 1]),
                (2, vec![1, 2]),
                (3, vec![2, 2]),
            ]
        );
        assert!(coords.iter().all(|c| c.ints() == [7]));
    }

    #[test]
    fn negative_features_floor_toward_minus_infinity() {
        let coords = tile_coordinates(2, &[-0.2], &[]);
        // floor(-0.4) = -1; (-1 + 0) div 2 = -1, (-1 + 1) div 2 = 0
        assert_eq!(coords[0].coords(), &[-1]);
        assert_eq!(coords[1].coords(), &[0]);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let mut table = IndexHashTable::new(256);
        let first = tiles(HashTarget::Table(&mut table), 8, &[3.2, -1.1], &[2], false);
        let count = table.count();
        let second = tiles(HashTarget::Table(&mut table), 8, &[3.2, -1.1], &[2], false);
        assert_eq!(first, second);
        assert_eq!(table.count(), count);
    }

    #[test]
    fn nearby_points_share_some_tiles() {
        let mut table = IndexHashTable::new(256);
        let a = tiles(HashTarget::Table(&mut table), 8, &[1.0], &[], false);
        let b = tiles(HashTarget::Table(&mut table), 8, &[1.3], &[], false);
        let c = tiles(HashTarget::Table(&mut table), 8, &[5.0], &[], false);
        let shared = |x: &[Option<usize>], y: &[Option<usize>]| {
            x.iter().zip(y).filter(|(p, q)| p == q).count()
        };
        assert!(shared(&a, &b) > 0);
        assert!(shared(&a, &b) < 8);
        assert_eq!(shared(&a, &c), 0);
    }

    #[test]
    fn huge_features_saturate_instead_of_overflowing() {
        let mut table = IndexHashTable::new(64);
        for f in [1e19, -1e19, f64::MAX, f64::INFINITY] {
            let out = tiles(HashTarget::Table(&mut table), 8, &[f, 0.5], &[], false);
            assert_eq!(out.len(), 8);
            assert!(out.iter().all(Option::is_some));
        }
        let coords = tile_coordinates(8, &[1e19], &[]);
        assert!(coords.iter().all(|c| c.coords() == [i64::MAX.div_euclid(8)]));
    }

    #[test]
    fn zero_capacity_yields_no_indices() {
        let raw = tiles(HashTarget::Size(0), 4, &[0.5], &[], false);
        assert_eq!(raw, vec![None; 4]);

        let mut table = IndexHashTable::new(0);
        let out = tiles(HashTarget::Table(&mut table), 4, &[0.5], &[], false);
        assert_eq!(out, vec![None; 4]);
        assert_eq!(table.count(), 0);
    }

    #[test]
    fn read_only_reports_unknown_tiles() {
        let mut table = IndexHashTable::new(64);
        let out = tiles(HashTarget::Table(&mut table), 4, &[0.5], &[], true);
        assert_eq!(out, vec![None; 4]);
        assert_eq!(table.count(), 0);
    }
}
