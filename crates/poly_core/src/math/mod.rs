//! Mathematical building blocks for the polyroot toolkit.
//!
//! This module provides:
//! - `polynomial`: Coefficient-based polynomial representation, evaluation,
//!   and construction from integer roots
//! - `solvers`: Newton-Raphson root finding with structured outcomes

pub mod polynomial;
pub mod solvers;
