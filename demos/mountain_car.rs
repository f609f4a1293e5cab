// Demonstration: semi-gradient n-step SARSA on the mountain car, with the
// learned cost-to-go printed on a coarse grid.
//
// Build/run from this repo root:
//   cargo run --example mountain_car -- --seed 3 --n 4 --episodes 100

use std::env;

use dynatile::mountain_car::{cost_to_go_grid, n_step_sarsa, CarValueFunction, SarsaConfig};
use dynatile::tiles::TileCodingConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let n_steps: usize = arg_value(&args, "--n")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(100);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut q = CarValueFunction::new(TileCodingConfig {
        step_size: 0.5,
        ..TileCodingConfig::default()
    });
    let config = SarsaConfig {
        n_steps,
        ..SarsaConfig::default()
    };

    println!("Mountain car, {}-step SARSA, {} episodes", n_steps, episodes);
    for episode in 0..episodes {
        let steps = n_step_sarsa(&mut q, &config, &mut rng);
        if episode == 0 || (episode + 1) % 10 == 0 {
            println!("  episode {:>4}: {} steps", episode + 1, steps);
        }
    }

    let grid_size = 8;
    println!("Cost to go (rows: position, columns: velocity):");
    for row in cost_to_go_grid(&mut q, grid_size).chunks(grid_size) {
        let line: Vec<String> = row.iter().map(|&(_, _, c)| format!("{:6.1}", c)).collect();
        println!("  {:+.2} {}", row[0].0, line.join(" "));
    }
    println!(
        "Index hash table: {} of {} tiles used, {} collisions",
        q.tiles().table().count(),
        q.tiles().table().size(),
        q.tiles().table().overflow_count()
    );
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
