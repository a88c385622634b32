//! cycle-finder: seed a directed graph and look for Euler and Hamiltonian cycles.
//!
//! ```bash
//! # Built-in sample graph (1 -> 2 -> 3 -> 1), both searches from vertex 1
//! cycle-finder search
//!
//! # Custom graph, Hamilton only, JSON output
//! cycle-finder search --graph graph.json --start a --algorithm hamilton --format json
//!
//! # Dump the sample graph as a starting point for --graph
//! cycle-finder sample > graph.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cycle_finder::display::{self, CycleReport};
use cycle_finder::{CycleKind, GraphSeed, SearchConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cycle-finder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a graph for Euler and/or Hamiltonian cycles
    Search {
        /// Graph file (JSON); defaults to the built-in sample graph
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Start vertex id
        #[arg(short, long, default_value = "1")]
        start: String,

        /// Which search to run
        #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
        algorithm: Algorithm,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Search configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cap on Hamiltonian search steps (overrides the config file)
        #[arg(long)]
        max_steps: Option<u64>,
    },

    /// Print the built-in sample graph as JSON
    Sample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Euler,
    Hamilton,
    Both,
}

impl Algorithm {
    fn kinds(self) -> &'static [CycleKind] {
        match self {
            Algorithm::Euler => &[CycleKind::Euler],
            Algorithm::Hamilton => &[CycleKind::Hamilton],
            Algorithm::Both => &CycleKind::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(
    graph: Option<PathBuf>,
    start: &str,
    algorithm: Algorithm,
    format: Format,
    config: Option<PathBuf>,
    max_steps: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let config = SearchConfig::load(config.as_deref())
        .context("failed to load search config")?
        .with_step_limit(max_steps);

    let seed = match &graph {
        Some(path) => GraphSeed::from_json_file(path)
            .with_context(|| format!("failed to read graph from {}", path.display()))?,
        None => GraphSeed::sample(),
    };
    let registry = seed.build().context("invalid graph")?;
    info!(vertices = registry.count(), edges = registry.edge_count(), "graph loaded");

    let mut reports = Vec::new();
    for kind in algorithm.kinds() {
        let outcome = kind.find(&registry, start, &config)?;
        match outcome.reason() {
            Some(reason) => {
                info!(search = kind.label(), reason = %reason.describe(&registry), "no cycle")
            }
            None => info!(search = kind.label(), "cycle found"),
        }
        reports.push(CycleReport::new(*kind, &registry, start, &outcome));
    }

    match format {
        Format::Text => print!("{}", display::format_text(&reports, verbose)),
        Format::Json => println!("{}", display::format_json(&reports)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Search {
            graph,
            start,
            algorithm,
            format,
            config,
            max_steps,
        } => run_search(graph, &start, algorithm, format, config, max_steps, cli.verbose),
        Commands::Sample => GraphSeed::sample()
            .to_json_pretty()
            .map(|json| println!("{}", json))
            .map_err(anyhow::Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
