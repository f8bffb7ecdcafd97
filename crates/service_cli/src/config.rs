//! CLI configuration file handling.
//!
//! Solver defaults can be set in a small TOML file (by default
//! `polyroot.toml` in the working directory):
//!
//! ```toml
//! [solver]
//! tolerance = 1e-6
//! max_iterations = 1000
//! ```
//!
//! A missing file is not an error; built-in defaults apply. Command-line
//! flags always take precedence over the file.

use crate::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Solver defaults
    #[serde(default)]
    pub solver: SolverSection,
}

/// Solver defaults from the `[solver]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Convergence tolerance
    pub tolerance: f64,
    /// Iteration cap
    pub max_iterations: usize,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!(path, "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| CliError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!((config.solver.tolerance - 1e-6).abs() < 1e-15);
        assert_eq!(config.solver.max_iterations, 1000);
    }

    #[test]
    fn test_parse_full_section() {
        let config: CliConfig = toml::from_str(
            r#"
            [solver]
            tolerance = 1e-10
            max_iterations = 250
            "#,
        )
        .unwrap();
        assert!((config.solver.tolerance - 1e-10).abs() < 1e-20);
        assert_eq!(config.solver.max_iterations, 250);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [solver]
            max_iterations = 42
            "#,
        )
        .unwrap();
        assert!((config.solver.tolerance - 1e-6).abs() < 1e-15);
        assert_eq!(config.solver.max_iterations, 42);
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.solver.max_iterations, 1000);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = CliConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(config.solver.max_iterations, 1000);
    }
}
