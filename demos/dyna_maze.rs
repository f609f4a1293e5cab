// Demonstration: Dyna-Q against prioritized sweeping on the Dyna maze, and
// Dyna-Q against Dyna-Q+ on the blocking maze.
//
// Build/run from this repo root:
//   cargo run --example dyna_maze -- --seed 7 --resolution 2

use std::env;

use dynatile::dyna::{backups_until_optimal, changing_maze, DynaConfig, Planner};
use dynatile::maze::Maze;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let resolution: usize = arg_value(&args, "--resolution")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    let maze = Maze::dyna().extend(resolution.max(1));
    let config = DynaConfig::default();

    println!(
        "Dyna maze {}x{} (optimal path {} steps)",
        maze.width,
        maze.height,
        maze.optimal_length()
    );
    for planner in [Planner::DynaQ, Planner::PrioritizedSweeping] {
        let mut rng = StdRng::seed_from_u64(seed);
        match backups_until_optimal(planner, &maze, &config, 500, &mut rng) {
            Ok(Some(backups)) => println!("  {:?}: {} backups", planner, backups),
            Ok(None) => println!("  {:?}: no near-optimal path after 500 episodes", planner),
            Err(e) => {
                eprintln!("  {:?} failed: {}", planner, e);
                std::process::exit(1);
            }
        }
    }

    let plus = DynaConfig {
        time_weight: 1e-4,
        planning_steps: 10,
        runs: 5,
        step_size: 1.0,
        ..DynaConfig::default()
    };
    match changing_maze(&Maze::blocking(), &plus, seed) {
        Ok(rewards) => {
            let last = |v: &[f64]| v.last().copied().unwrap_or(0.0);
            println!("Blocking maze, cumulative reward after 3000 steps:");
            println!("  Dyna-Q:  {:.1}", last(&rewards.dyna_q));
            println!("  Dyna-Q+: {:.1}", last(&rewards.dyna_q_plus));
        }
        Err(e) => {
            eprintln!("Blocking maze failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
