//! Solver configuration types.

use num_traits::Float;

/// Convergence test applied by the root finder.
///
/// The step-size test declares convergence when successive iterates are
/// close; it can report success while the residual `f(x)` is still far from
/// zero in near-flat regions. The residual test is the documented
/// alternative for callers that need `|f(x)|` itself to be small. The
/// step-size test is the default and the two are never swapped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCriterion {
    /// Converge when `|x_next - x| < tolerance` (default).
    StepSize,

    /// Converge when `|f(x)| < tolerance`.
    Residual,
}

/// Configuration for the Newton-Raphson root finder.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use poly_core::math::solvers::{SolverConfig, StopCriterion};
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.criterion, StopCriterion::StepSize);
///
/// // Custom configuration
/// let custom = SolverConfig::new(1e-10, 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// Interpreted by [`criterion`](Self::criterion): the maximum step size
    /// between successive iterates, or the maximum residual magnitude.
    pub tolerance: T,

    /// Maximum number of Newton updates before giving up.
    ///
    /// A hard cap, not adaptive. Reaching it yields an unconverged
    /// best-effort result rather than an error.
    pub max_iterations: usize,

    /// Derivative magnitude below which the Newton step is considered
    /// degenerate.
    ///
    /// Guards the update `x - f(x) / f'(x)` against division blow-up near
    /// critical points. Independent of `tolerance`.
    pub derivative_floor: T,

    /// Convergence test to apply.
    pub criterion: StopCriterion,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-6
    /// - `max_iterations`: 1000
    /// - `derivative_floor`: 1e-8
    /// - `criterion`: step size
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 1000,
            derivative_floor: T::from(1e-8).unwrap(),
            criterion: StopCriterion::StepSize,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified tolerance and iteration cap.
    ///
    /// The derivative floor and convergence criterion keep their defaults;
    /// use [`with_derivative_floor`](Self::with_derivative_floor) and
    /// [`with_criterion`](Self::with_criterion) to adjust them.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Set the degenerate-derivative guard threshold.
    ///
    /// # Panics
    ///
    /// Panics if `derivative_floor <= 0`.
    pub fn with_derivative_floor(mut self, derivative_floor: T) -> Self {
        assert!(
            derivative_floor > T::zero(),
            "derivative_floor must be positive"
        );
        self.derivative_floor = derivative_floor;
        self
    }

    /// Set the convergence criterion.
    pub fn with_criterion(mut self, criterion: StopCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-10) and more iterations (10000) for cases
    /// requiring extreme precision.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 10_000,
            ..Self::default()
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-4) and fewer iterations (100) for cases
    /// where speed is more important than precision.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-4).unwrap(),
            max_iterations: 100,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-6).abs() < 1e-15);
        assert!((config.derivative_floor - 1e-8).abs() < 1e-15);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.criterion, StopCriterion::StepSize);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200);
        assert!((config.tolerance - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, 200);
        // Untouched fields keep their defaults
        assert!((config.derivative_floor - 1e-8).abs() < 1e-15);
        assert_eq!(config.criterion, StopCriterion::StepSize);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_negative_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(-1e-6, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-6, 0);
    }

    #[test]
    #[should_panic(expected = "derivative_floor must be positive")]
    fn test_non_positive_derivative_floor_panics() {
        let _ = SolverConfig::<f64>::default().with_derivative_floor(0.0);
    }

    #[test]
    fn test_with_criterion() {
        let config = SolverConfig::<f64>::default().with_criterion(StopCriterion::Residual);
        assert_eq!(config.criterion, StopCriterion::Residual);
    }

    #[test]
    fn test_high_precision_config() {
        let config: SolverConfig<f64> = SolverConfig::high_precision();
        assert!(config.tolerance < 1e-8);
        assert!(config.max_iterations >= 10_000);
    }

    #[test]
    fn test_fast_config() {
        let config: SolverConfig<f64> = SolverConfig::fast();
        assert!(config.tolerance > 1e-6);
        assert!(config.max_iterations <= 100);
    }

    #[test]
    fn test_config_copy() {
        let config1: SolverConfig<f64> = SolverConfig::default();
        let config2 = config1; // Copy semantics
        assert_eq!(config1, config2);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, 1000);
    }
}
