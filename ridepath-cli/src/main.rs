use std::{io, path::PathBuf, process::ExitCode};

use chrono::Local;
use clap::{Parser, Subcommand};
use ridepath_core::{RoadGraph, load_graph};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod repl;

use config::{CliConfig, OutputFormat};
use repl::{RideOutcome, Session, list_locations, route_once};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Routing(#[from] ridepath_core::Error),
}

/// Traffic-aware ride route finder
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON road dataset (defaults to the built-in city table)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Output format for ride details
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log filter, e.g. `info` or `ridepath_core=debug`
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a single ride and exit
    Route { pickup: String, dropoff: String },
    /// List available locations
    Locations,
    /// Plan rides interactively (default)
    Interactive,
}

impl Args {
    /// File settings overridden by command-line flags
    fn resolve_config(&self) -> Result<CliConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        if let Some(dataset) = &self.dataset {
            config.dataset = Some(dataset.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
        Ok(config)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args, config: &CliConfig) -> Result<ExitCode, CliError> {
    let graph: RoadGraph = load_graph(&config.dataset_source())?;
    info!(
        "Loaded {} locations and {} segments",
        graph.location_count(),
        graph.segment_count()
    );

    let stdout = io::stdout();
    match args.command.unwrap_or(Command::Interactive) {
        Command::Locations => {
            list_locations(&graph, &mut stdout.lock())?;
        }
        Command::Route { pickup, dropoff } => {
            let outcome = route_once(
                &graph,
                &pickup,
                &dropoff,
                config.format,
                Local::now().naive_local(),
                &mut stdout.lock(),
                &mut io::stderr().lock(),
            )?;
            if outcome == RideOutcome::Rejected {
                return Ok(ExitCode::from(2));
            }
        }
        Command::Interactive => {
            Session::new(
                &graph,
                io::stdin().lock(),
                stdout.lock(),
                config.format,
                || Local::now().naive_local(),
            )
            .run()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    match run(args, &config) {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
