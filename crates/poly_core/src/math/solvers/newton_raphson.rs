//! Newton-Raphson root-finding solver.

use super::{SolverConfig, StopCriterion};
use crate::math::polynomial::Polynomial;
use num_traits::Float;

/// Outcome of a Newton-Raphson root search.
///
/// A solve always terminates with a numeric estimate; the flags say how far
/// it can be trusted. A converged result is indistinguishable in type from
/// a best-effort one, so callers must check the flags before using the
/// estimate.
///
/// # Fields
///
/// * `estimate` - Final iterate (a root only if `converged` is true)
/// * `converged` - Convergence test was satisfied
/// * `degenerate` - Iteration halted because `|f'(x)|` fell below the
///   configured floor; convergence is not guaranteed at the estimate
/// * `iterations` - Number of Newton updates performed
/// * `residual` - Value of the polynomial at the estimate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootResult<T> {
    /// Final iterate; best-effort estimate when unconverged.
    pub estimate: T,
    /// Whether the convergence test was satisfied.
    pub converged: bool,
    /// Whether the derivative guard halted the iteration.
    pub degenerate: bool,
    /// Number of Newton updates performed.
    pub iterations: usize,
    /// Polynomial value at the estimate.
    pub residual: T,
}

impl<T: Float> RootResult<T> {
    /// True when the estimate converged without hitting the derivative
    /// guard, i.e. the caller may treat it as a root.
    pub fn is_reliable(&self) -> bool {
        self.converged && !self.degenerate
    }
}

/// Newton-Raphson root finder for polynomials.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a simple root, meaning the
/// number of correct digits approximately doubles each iteration. However,
/// the iteration may stall or wander if:
/// - The derivative is near zero (reported through the `degenerate` flag)
/// - The initial guess is far from any root
/// - The iterates cycle (reported through `converged = false` after the cap)
///
/// A polynomial with several real roots converges to different roots from
/// different seeds; the solver makes no attempt to enumerate them, so
/// callers wanting all roots should try multiple seeds.
///
/// # Failure semantics
///
/// Neither non-convergence nor a degenerate derivative raises an error.
/// Both are reported as flags on [`RootResult`] alongside the best-effort
/// estimate. Malformed coefficient input is rejected earlier, when the
/// [`Polynomial`] is constructed.
///
/// # Example
///
/// ```
/// use poly_core::math::polynomial::Polynomial;
/// use poly_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x^2 - 2 = 0 (find the square root of 2)
/// let poly = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let result = solver.find_root(&poly, 1.0);
/// assert!(result.is_reliable());
/// assert!((result.estimate - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver: NewtonRaphsonSolver<f64> =
    ///     NewtonRaphsonSolver::new(SolverConfig::new(1e-8, 500));
    /// ```
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Search for a root of `polynomial` starting from `initial_guess`.
    ///
    /// Runs the Newton iteration until the configured convergence test is
    /// satisfied, the derivative guard triggers, or the iteration cap is
    /// reached. The returned [`RootResult`] always carries the final
    /// iterate; inspect its flags to decide whether it is a root.
    ///
    /// With the default step-size criterion the iteration stops as soon as
    /// two successive iterates differ by less than the tolerance. In
    /// near-flat regions this can report convergence while the residual is
    /// still sizeable; the `residual` field and the
    /// [`StopCriterion::Residual`](super::StopCriterion) alternative exist
    /// for callers that care.
    ///
    /// A non-finite iterate (overflow of the Newton step) halts the search
    /// and returns the last finite iterate unconverged.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::polynomial::Polynomial;
    /// use poly_core::math::solvers::NewtonRaphsonSolver;
    ///
    /// let poly: Polynomial<f64> = Polynomial::new(vec![-336.0, 160.0, -23.0, 1.0]).unwrap();
    /// let solver = NewtonRaphsonSolver::with_defaults();
    ///
    /// // Different seeds reach different roots
    /// let near_four = solver.find_root(&poly, 5.0);
    /// let near_twelve = solver.find_root(&poly, 15.0);
    /// assert!(near_four.converged && near_twelve.converged);
    /// assert!((near_four.estimate - near_twelve.estimate).abs() > 1.0);
    /// ```
    pub fn find_root(&self, polynomial: &Polynomial<T>, initial_guess: T) -> RootResult<T> {
        let mut x = initial_guess;
        let mut updates = 0;

        for _ in 0..self.config.max_iterations {
            let fx = polynomial.evaluate(x);

            if self.config.criterion == StopCriterion::Residual
                && fx.abs() < self.config.tolerance
            {
                return RootResult {
                    estimate: x,
                    converged: true,
                    degenerate: false,
                    iterations: updates,
                    residual: fx,
                };
            }

            let fpx = polynomial.evaluate_derivative(x);

            // Degenerate step: halt with the current iterate rather than
            // dividing by a vanishing derivative.
            if fpx.abs() < self.config.derivative_floor {
                return RootResult {
                    estimate: x,
                    converged: false,
                    degenerate: true,
                    iterations: updates,
                    residual: fx,
                };
            }

            let x_next = x - fx / fpx;

            if !x_next.is_finite() {
                return RootResult {
                    estimate: x,
                    converged: false,
                    degenerate: false,
                    iterations: updates,
                    residual: fx,
                };
            }

            updates += 1;

            if self.config.criterion == StopCriterion::StepSize
                && (x_next - x).abs() < self.config.tolerance
            {
                return RootResult {
                    estimate: x_next,
                    converged: true,
                    degenerate: false,
                    iterations: updates,
                    residual: polynomial.evaluate(x_next),
                };
            }

            x = x_next;
        }

        RootResult {
            estimate: x,
            converged: false,
            degenerate: false,
            iterations: updates,
            residual: polynomial.evaluate(x),
        }
    }
}
