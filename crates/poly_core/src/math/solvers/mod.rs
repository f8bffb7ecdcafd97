//! Root-finding solvers for polynomial computation.
//!
//! This module provides the Newton-Raphson root finder used throughout the
//! polyroot toolkit, together with its configuration and outcome types.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using the
//!   polynomial's analytic derivative
//!
//! ## Configuration
//!
//! The solver uses [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-6)
//! - `max_iterations`: Maximum iteration count (default: 1000)
//! - `derivative_floor`: Degenerate-derivative guard (default: 1e-8)
//! - `criterion`: Step-size (default) or residual convergence test
//!
//! ## Outcomes
//!
//! Numeric edge cases never raise errors. A solve always produces a
//! [`RootResult`] whose `converged` and `degenerate` flags tell the caller
//! whether the estimate can be trusted.
//!
//! ## Example
//!
//! ```
//! use poly_core::math::polynomial::Polynomial;
//! use poly_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // x^3 - 23x^2 + 160x - 336 has roots at 4, 7, and 12
//! let poly: Polynomial<f64> = Polynomial::new(vec![-336.0, 160.0, -23.0, 1.0]).unwrap();
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let result = solver.find_root(&poly, 5.0);
//! assert!(result.converged);
//! assert!(poly.evaluate(result.estimate).abs() < 1e-4);
//! ```

mod config;
mod newton_raphson;

// Re-export public types at module level
pub use config::{SolverConfig, StopCriterion};
pub use newton_raphson::{NewtonRaphsonSolver, RootResult};
