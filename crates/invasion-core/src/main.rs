//! Alien invasion simulator CLI
//!
//! Examples:
//!   invasion simulate maps/earth.txt
//!   invasion simulate maps/earth.txt -n 40 --seed 7
//!   RUST_LOG=debug invasion simulate maps/earth.txt --events events.jsonl

use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use invasion_core::{
    load_map, ConfigError, EventLogger, InvasionConfig, ParseError, Simulation, SimulationError,
};

/// Easy tool for simulating aliens invasion.
#[derive(Parser, Debug)]
#[command(name = "invasion")]
#[command(about = "Easy tool for simulating aliens invasion.")]
#[command(
    long_about = "We constantly live in danger of an aliens invasion. This tool will help you to be more prepared.\n\
                  Using invasion you can simulate any type of aliens invasion scenario against any earth area. Be ready for an invasion!"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulates invasion of aliens
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Path to the map file
    path: PathBuf,

    /// Number of aliens during the simulation [default: 15]
    #[arg(short = 'n', long = "aliens")]
    aliens: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every event of the run to this file as JSON lines
    #[arg(long)]
    events: Option<PathBuf>,

    /// Print a JSON snapshot of the run instead of the text map
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Simulate(args) => simulate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn simulate(args: SimulateArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => InvasionConfig::from_file(path)?,
        None => InvasionConfig::default(),
    };

    let aliens = args.aliens.unwrap_or(config.simulation.aliens);
    let seed = args
        .seed
        .or(config.simulation.seed)
        .unwrap_or_else(rand::random);
    let json = args.json || config.output.json;
    info!(aliens, seed, map = %args.path.display(), "starting simulation");

    let map = load_map(&args.path)?;
    let result = Simulation::seeded(map, seed)
        .with_max_turns(config.simulation.max_turns)
        .run(aliens)?;

    if let Some(path) = &args.events {
        let mut logger = EventLogger::new(path)?;
        logger.log_batch(&result.events)?;
        logger.flush()?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result.snapshot())?;
        writeln!(out)?;
    } else {
        for line in result.log_lines() {
            writeln!(out, "{}", line)?;
        }
        result.write_map(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
