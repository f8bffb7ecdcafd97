//! Solve command implementation
//!
//! Runs one Newton-Raphson root search per initial guess and reports the
//! structured outcome of each. A polynomial with several real roots needs
//! several seeds; the solver finds at most one root per seed.

use serde::Serialize;
use tracing::{info, warn};

use crate::{CliError, Result};
use poly_core::math::polynomial::Polynomial;
use poly_core::math::solvers::{NewtonRaphsonSolver, RootResult, SolverConfig, StopCriterion};

/// One row of solver output: the seed and its outcome.
#[derive(Serialize)]
struct SolveRow {
    guess: f64,
    #[serde(flatten)]
    result: RootResult<f64>,
}

/// Run the solve command
pub fn run(
    coefficients: &[f64],
    guesses: &[f64],
    tolerance: f64,
    max_iterations: usize,
    residual_criterion: bool,
    format: &str,
) -> Result<()> {
    info!("Starting root search...");
    info!("  Coefficients (ascending): {:?}", coefficients);
    info!("  Seeds: {:?}", guesses);
    info!("  Tolerance: {}", tolerance);
    info!("  Iteration cap: {}", max_iterations);

    if !(tolerance > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "tolerance must be positive, got {}",
            tolerance
        )));
    }
    if max_iterations == 0 {
        return Err(CliError::InvalidArgument(
            "max_iterations must be > 0".to_string(),
        ));
    }

    let polynomial = Polynomial::new(coefficients.to_vec())?;

    let mut config = SolverConfig::new(tolerance, max_iterations);
    if residual_criterion {
        config = config.with_criterion(StopCriterion::Residual);
    }
    let solver = NewtonRaphsonSolver::new(config);

    let rows: Vec<SolveRow> = guesses
        .iter()
        .map(|&guess| SolveRow {
            guess,
            result: solver.find_root(&polynomial, guess),
        })
        .collect();

    for row in &rows {
        if !row.result.is_reliable() {
            warn!(
                guess = row.guess,
                degenerate = row.result.degenerate,
                "seed did not produce a trusted root; estimate is best-effort"
            );
        }
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "table" => {
            println!(
                "\n┌────────────┬──────────────┬───────────┬────────────┬────────────┬──────────────┐"
            );
            println!(
                "│ Guess      │ Estimate     │ Converged │ Degenerate │ Iterations │ Residual     │"
            );
            println!(
                "├────────────┼──────────────┼───────────┼────────────┼────────────┼──────────────┤"
            );
            for row in &rows {
                println!(
                    "│ {:>10.4} │ {:>12.6} │ {:>9} │ {:>10} │ {:>10} │ {:>12.3e} │",
                    row.guess,
                    row.result.estimate,
                    row.result.converged,
                    row.result.degenerate,
                    row.result.iterations,
                    row.result.residual,
                );
            }
            println!(
                "└────────────┴──────────────┴───────────┴────────────┴────────────┴──────────────┘"
            );
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Root search complete");
    Ok(())
}
