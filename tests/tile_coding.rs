use dynatile::tiles::{
    tile_coordinates, tiles, HashTarget, IndexHashTable, TileCodingConfig, TileCoords,
    TiledValueFunction,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn table_fills_sequentially_then_collides() {
    let size = 16;
    let mut table = IndexHashTable::new(size);
    for i in 0..size {
        let coords = TileCoords::new(i % 4, vec![i as i64], vec![]);
        assert_eq!(table.get_or_assign(&coords, false), Some(i));
    }

    let overflow = TileCoords::new(0, vec![1000], vec![1]);
    let expected = (overflow.stable_hash() % size as u64) as usize;
    for _ in 0..3 {
        assert_eq!(table.get_or_assign(&overflow, false), Some(expected));
    }
    assert_eq!(table.count(), size);
    assert_eq!(table.overflow_count(), 3);
}

#[test]
fn full_table_still_returns_one_index_per_tiling() {
    let mut table = IndexHashTable::new(8);
    for x in 0..20 {
        let active = tiles(HashTarget::Table(&mut table), 8, &[x as f64], &[0], false);
        assert_eq!(active.len(), 8);
        assert!(active.iter().all(|i| i.map_or(false, |i| i < 8)));
    }
    assert!(table.is_full());
    assert!(table.overflow_count() > 0);
}

#[test]
fn raw_size_target_matches_coordinate_hash() {
    let coords = tile_coordinates(4, &[0.7, 2.1], &[3]);
    let hashed = tiles(HashTarget::Size(101), 4, &[0.7, 2.1], &[3], false);
    let expected: Vec<Option<usize>> = coords.iter().map(|c| c.hash_index(101)).collect();
    assert_eq!(hashed, expected);
}

#[test]
fn value_function_fits_a_smooth_curve() {
    let config = TileCodingConfig {
        num_tilings: 8,
        max_size: 2048,
        step_size: 0.1,
    };
    let mut vf = TiledValueFunction::new(config);
    let target = |x: f64| (2.0 * std::f64::consts::PI * x).sin();
    // Ten tile widths across [0, 1].
    let scale = 10.0;

    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..5000 {
        let x: f64 = rng.gen();
        vf.learn(&[x * scale], &[], target(x));
    }

    let grid: Vec<f64> = (1..50).map(|i| i as f64 / 50.0).collect();
    let mean_error = grid
        .iter()
        .map(|&x| (vf.value(&[x * scale], &[]) - target(x)).abs())
        .sum::<f64>()
        / grid.len() as f64;
    assert!(mean_error < 0.2, "mean absolute error {}", mean_error);
    assert!(!vf.table().is_full());
}
