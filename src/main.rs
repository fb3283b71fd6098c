//! Schelling segregation simulator - entry point
//!
//! Loads a grid map, runs the relocation loop until the requested generation
//! count or until convergence, then prints a summary and writes the final
//! grid as a plain-text PPM image.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use schelling::core::config::{SimulationConfig, DEFAULT_HAPPINESS_THRESHOLD};
use schelling::core::error::Result;
use schelling::grid::{loader, printer, CellState};
use schelling::render::ppm;
use schelling::simulation::{run_simulation, unhappy_count};

/// Schelling segregation model on a bounded rectangular grid
#[derive(Parser, Debug)]
#[command(name = "schelling")]
#[command(about = "Run a Schelling segregation simulation over a grid map")]
struct Args {
    /// Path to the grid map file (R = red, B = blue, anything else = empty)
    #[arg(short = 'f', long)]
    file: PathBuf,

    /// Happiness threshold percentage
    #[arg(short = 'p', long, default_value_t = DEFAULT_HAPPINESS_THRESHOLD,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: u8,

    /// Number of generations to run (0 = run until converged)
    #[arg(short = 's', long, default_value_t = 0)]
    simulations: u32,

    /// Cap on generations in convergence mode (unbounded when omitted)
    #[arg(long)]
    max_generations: Option<u64>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the final grid image
    #[arg(short = 'o', long, default_value = "out.ppm")]
    output: PathBuf,

    /// Summary format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON summary structure
#[derive(Serialize)]
struct RunSummary {
    width: usize,
    height: usize,
    red: usize,
    blue: usize,
    empty: usize,
    unhappy: usize,
    generations: u64,
    converged: bool,
    threshold: u8,
    seed: u64,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("schelling=info")
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = SimulationConfig {
        happiness_threshold: args.threshold,
        simulation_count: args.simulations,
        max_generations: args.max_generations,
        seed,
    };
    config.validate()?;

    let grid = loader::load_from_path(&args.file)?;

    tracing::info!(
        threshold = config.happiness_threshold,
        simulations = config.simulation_count,
        seed = config.seed,
        "starting simulation"
    );

    let rng = ChaCha8Rng::seed_from_u64(config.seed);
    let outcome = run_simulation(
        grid,
        config.simulation_count,
        config.happiness_threshold,
        rng,
        config.max_generations,
    );

    let unhappy = unhappy_count(&outcome.world, config.happiness_threshold);

    match args.format.as_str() {
        "json" => {
            let summary = RunSummary {
                width: outcome.world.width(),
                height: outcome.world.height(),
                red: outcome.world.count(CellState::Red),
                blue: outcome.world.count(CellState::Blue),
                empty: outcome.world.count(CellState::Empty),
                unhappy,
                generations: outcome.generations,
                converged: outcome.converged,
                threshold: config.happiness_threshold,
                seed: config.seed,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            println!("{}", unhappy);
            print!("{}", printer::render(&outcome.world));
        }
    }

    ppm::write_to_path(&outcome.world, &args.output)?;
    Ok(())
}
