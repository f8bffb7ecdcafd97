//! Error types for structured error handling.
//!
//! This module provides:
//! - `PolynomialError`: Errors from polynomial construction
//!
//! Numeric edge cases inside the solver (degenerate derivative, iteration
//! cap reached) are deliberately NOT errors. They are reported through the
//! outcome flags on [`RootResult`](crate::math::solvers::RootResult) so
//! callers can distinguish "found a root" from "gave up" without exception
//! handling.

use thiserror::Error;

/// Polynomial construction errors.
///
/// Provides structured error handling for coefficient validation with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `EmptyCoefficients`: Coefficient sequence was empty
/// - `NonFiniteCoefficient`: A coefficient was NaN or infinite
///
/// # Examples
/// ```
/// use poly_core::types::PolynomialError;
///
/// let err = PolynomialError::EmptyCoefficients;
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input: polynomial requires at least one coefficient"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolynomialError {
    /// Coefficient sequence was empty.
    #[error("Invalid input: polynomial requires at least one coefficient")]
    EmptyCoefficients,

    /// A coefficient was NaN or infinite.
    #[error("Invalid input: coefficient at index {index} is not finite")]
    NonFiniteCoefficient {
        /// Index of the offending coefficient
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_coefficients_display() {
        let err = PolynomialError::EmptyCoefficients;
        assert_eq!(
            format!("{}", err),
            "Invalid input: polynomial requires at least one coefficient"
        );
    }

    #[test]
    fn test_non_finite_coefficient_display() {
        let err = PolynomialError::NonFiniteCoefficient { index: 2 };
        assert_eq!(
            format!("{}", err),
            "Invalid input: coefficient at index 2 is not finite"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PolynomialError::EmptyCoefficients;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PolynomialError::NonFiniteCoefficient { index: 0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let err = PolynomialError::NonFiniteCoefficient { index: 3 };
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: PolynomialError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
