//! # poly_core: Numeric Kernel for the Polyroot Toolkit
//!
//! ## Layer Role
//!
//! poly_core is the kernel layer of the A-P-S architecture, providing:
//! - Polynomial representation and evaluation (`math::polynomial`)
//! - Polynomial construction from integer roots (`math::polynomial`)
//! - Newton-Raphson root finding with structured outcomes (`math::solvers`)
//! - Error types: `PolynomialError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The kernel has no dependencies on other polyroot crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number derivative verification (optional)
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! All operations are pure functions over immutable inputs. There is no
//! shared mutable state, so every call is reentrant and safe to invoke
//! concurrently from multiple threads.
//!
//! ## Usage Examples
//!
//! ```rust
//! use poly_core::math::polynomial::Polynomial;
//! use poly_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // x^2 - 2, coefficients in ascending power order
//! let poly: Polynomial<f64> = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
//! assert!((poly.evaluate(2.0) - 2.0).abs() < 1e-12);
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let result = solver.find_root(&poly, 1.0);
//! assert!(result.converged);
//! assert!((result.estimate - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Dual number evaluation for cross-checking
//!   the hand-differentiated derivative
//! - `serde`: Enable serialisation for solver results and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
