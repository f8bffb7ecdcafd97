//! Polyroot CLI - Command Line Operations for Polynomial Root Finding
//!
//! This is the operational entry point for the polyroot toolkit.
//!
//! # Commands
//!
//! - `polyroot eval` - Evaluate a polynomial and its derivative at a point
//! - `polyroot solve` - Search for roots with the Newton-Raphson solver
//! - `polyroot expand` - Expand a polynomial from roots or a share-map file
//!
//! # Architecture
//!
//! As the **S**ervice layer in the A-P-S architecture, this crate
//! orchestrates the adapter and kernel layers behind a unified command-line
//! interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Polyroot polynomial toolkit CLI
#[derive(Parser)]
#[command(name = "polyroot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "polyroot.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a polynomial and its derivative at a point
    Eval {
        /// Coefficients in ascending power order (comma separated)
        #[arg(short = 'p', long, value_delimiter = ',', required = true)]
        coefficients: Vec<f64>,

        /// Point at which to evaluate
        #[arg(short = 'x', long)]
        at: f64,
    },

    /// Search for roots with the Newton-Raphson solver
    Solve {
        /// Coefficients in ascending power order (comma separated)
        #[arg(short = 'p', long, value_delimiter = ',', required = true)]
        coefficients: Vec<f64>,

        /// Initial guesses, one root search per seed (comma separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        guess: Vec<f64>,

        /// Convergence tolerance (overrides the config file)
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Iteration cap (overrides the config file)
        #[arg(short, long)]
        max_iterations: Option<usize>,

        /// Converge on the residual |f(x)| instead of the step size
        #[arg(long)]
        residual_criterion: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Expand a polynomial from integer roots
    Expand {
        /// Integer roots, one linear factor each (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        roots: Option<Vec<i64>>,

        /// Path to a JSON share-map file to decode roots from
        #[arg(short, long)]
        shares: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let file_config = config::CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Eval { coefficients, at } => commands::eval::run(&coefficients, at),
        Commands::Solve {
            coefficients,
            guess,
            tolerance,
            max_iterations,
            residual_criterion,
            format,
        } => commands::solve::run(
            &coefficients,
            &guess,
            tolerance.unwrap_or(file_config.solver.tolerance),
            max_iterations.unwrap_or(file_config.solver.max_iterations),
            residual_criterion,
            &format,
        ),
        Commands::Expand { roots, shares } => {
            commands::expand::run(roots.as_deref(), shares.as_deref())
        }
    }
}
