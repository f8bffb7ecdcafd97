//! Expand command implementation
//!
//! Expands a polynomial from its integer roots, taken either directly from
//! the command line or decoded from a JSON share-map file.

use tracing::{debug, info};

use crate::{CliError, Result};
use adapter_shares::ShareMap;
use poly_core::math::polynomial::{expand_roots, Polynomial};

/// Run the expand command
pub fn run(roots: Option<&[i64]>, shares: Option<&str>) -> Result<()> {
    let roots: Vec<i64> = match (roots, shares) {
        (Some(roots), None) => roots.to_vec(),
        (None, Some(path)) => {
            if !std::path::Path::new(path).exists() {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            let text = std::fs::read_to_string(path)?;
            let map = ShareMap::from_json(&text)?;
            info!(
                declared = map.declared(),
                quorum = map.quorum(),
                "decoded share map"
            );
            map.decode_roots()?
        }
        _ => {
            return Err(CliError::InvalidArgument(
                "provide exactly one of --roots or --shares".to_string(),
            ));
        }
    };

    info!("Expanding {} linear factors", roots.len());

    let coefficients = expand_roots(&roots);

    // Sanity check at debug level: every root must sit on the expansion.
    let polynomial: Polynomial<f64> = Polynomial::from_roots(&roots);
    for &r in &roots {
        debug!(root = r, residual = polynomial.evaluate(r as f64), "verified");
    }

    println!("Polynomial coefficients (ascending powers):");
    println!(
        "{}",
        coefficients
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
