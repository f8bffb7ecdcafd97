//! Polynomial representation, evaluation, and construction from roots.
//!
//! Polynomials are stored as coefficient sequences in ascending power order:
//! index `i` holds the coefficient of `x^i`, so index 0 is the constant
//! term. The leading coefficient is conventionally non-zero for a
//! well-posed polynomial, though evaluation tolerates trailing zeros.
//!
//! Construction from integer roots uses repeated convolution against the
//! linear factor `(x - r)`, producing exact integer coefficients.

use crate::types::PolynomialError;
use num_traits::Float;

/// Multiply two coefficient sequences.
///
/// Produces the coefficients of the product polynomial: for inputs of
/// degree m and n the result has degree m + n, with
/// `result[k] = sum over i + j == k of a[i] * b[j]`.
///
/// Inputs are never mutated; a fresh result sequence is returned. An empty
/// input yields an empty result.
///
/// # Example
///
/// ```
/// use poly_core::math::polynomial::convolve;
///
/// // (1 + x) * (1 - x) = 1 - x^2
/// assert_eq!(convolve(&[1, 1], &[1, -1]), vec![1, 0, -1]);
/// ```
pub fn convolve(a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0i64; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            result[i + j] += ai * bj;
        }
    }
    result
}

/// Expand a polynomial from its integer roots.
///
/// Starts from the constant polynomial `[1]` and multiplies in one linear
/// factor `(x - r)` per root, in input order. Polynomial multiplication is
/// commutative, so the order does not change the outcome, but left-to-right
/// processing keeps the computation deterministic.
///
/// An empty root list yields `[1]`. There are no error conditions.
///
/// # Example
///
/// ```
/// use poly_core::math::polynomial::expand_roots;
///
/// // (x - 4)(x - 7)(x - 12) = x^3 - 23x^2 + 172x - 336
/// assert_eq!(expand_roots(&[4, 7, 12]), vec![-336, 172, -23, 1]);
/// assert_eq!(expand_roots(&[]), vec![1]);
/// ```
pub fn expand_roots(roots: &[i64]) -> Vec<i64> {
    let mut acc = vec![1i64];
    for &root in roots {
        // (x - r) in ascending power order
        acc = convolve(&acc, &[-root, 1]);
    }
    acc
}

/// Polynomial in ascending-power coefficient form.
///
/// Stores a validated, non-empty coefficient sequence and provides pure
/// evaluation of the polynomial and its first derivative at any real point.
/// Supports generic floating-point types through `T: Float`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Construction
///
/// The coefficient sequence must be non-empty and every entry must be
/// finite. Invalid input is rejected with [`PolynomialError`] rather than
/// silently evaluating to zero or NaN.
///
/// # Example
///
/// ```
/// use poly_core::math::polynomial::Polynomial;
///
/// // x^3 - 23x^2 + 160x - 336
/// let poly = Polynomial::new(vec![-336.0, 160.0, -23.0, 1.0]).unwrap();
/// assert_eq!(poly.degree(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Float> {
    /// Coefficients in ascending power order
    coefficients: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Construct a polynomial from coefficients in ascending power order.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficient of `x^i` at index `i`
    ///
    /// # Returns
    ///
    /// * `Ok(Polynomial)` - Successfully constructed polynomial
    /// * `Err(PolynomialError::EmptyCoefficients)` - Empty sequence
    /// * `Err(PolynomialError::NonFiniteCoefficient)` - NaN or infinite entry
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
    ///
    /// let result: Result<Polynomial<f64>, _> = Polynomial::new(vec![]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(coefficients: Vec<T>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }

        for (index, c) in coefficients.iter().enumerate() {
            if !c.is_finite() {
                return Err(PolynomialError::NonFiniteCoefficient { index });
            }
        }

        Ok(Self { coefficients })
    }

    /// Construct a polynomial by expanding the given integer roots.
    ///
    /// Delegates to [`expand_roots`] and lifts the exact integer
    /// coefficients into the floating-point domain, so that the expanded
    /// polynomial can be evaluated and solved directly.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::polynomial::Polynomial;
    ///
    /// let poly: Polynomial<f64> = Polynomial::from_roots(&[4, 7, 12]);
    /// assert!(poly.evaluate(7.0).abs() < 1e-12);
    /// ```
    pub fn from_roots(roots: &[i64]) -> Self {
        let coefficients = expand_roots(roots)
            .into_iter()
            .map(|c| T::from(c).unwrap())
            .collect();

        // expand_roots always yields at least [1], so the invariant holds.
        Self { coefficients }
    }

    /// Returns the coefficients in ascending power order.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the nominal degree (highest coefficient index).
    ///
    /// Trailing zero coefficients are counted, so this is an upper bound on
    /// the mathematical degree.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `x`.
    ///
    /// Computes the sum of `coefficients[i] * x^i`. Defined for any real
    /// `x`, side-effect free, no error conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::polynomial::Polynomial;
    ///
    /// let poly: Polynomial<f64> = Polynomial::new(vec![-336.0, 160.0, -23.0, 1.0]).unwrap();
    /// assert!(poly.evaluate(4.0).abs() < 1e-12);
    /// ```
    pub fn evaluate(&self, x: T) -> T {
        let mut acc = T::zero();
        for (i, &c) in self.coefficients.iter().enumerate() {
            acc = acc + c * x.powi(i as i32);
        }
        acc
    }

    /// Evaluate the first derivative of the polynomial at `x`.
    ///
    /// Computes the sum of `i * coefficients[i] * x^(i - 1)` for `i >= 1`;
    /// the constant term contributes nothing. Uses the same `powi`
    /// exponentiation semantics as [`evaluate`](Self::evaluate) to avoid
    /// drift between the two.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::polynomial::Polynomial;
    ///
    /// // d/dx (x^2 - 2) = 2x
    /// let poly: Polynomial<f64> = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
    /// assert!((poly.evaluate_derivative(3.0) - 6.0).abs() < 1e-12);
    /// ```
    pub fn evaluate_derivative(&self, x: T) -> T {
        let mut acc = T::zero();
        for (i, &c) in self.coefficients.iter().enumerate().skip(1) {
            let power = T::from(i).unwrap();
            acc = acc + power * c * x.powi(i as i32 - 1);
        }
        acc
    }
}

/// Dual-number evaluation for derivative verification.
#[cfg(feature = "num-dual-mode")]
impl Polynomial<f64> {
    /// Evaluate the polynomial and its first derivative simultaneously
    /// using forward-mode dual numbers.
    ///
    /// Returns `(value, derivative)`. Intended as an independent check of
    /// [`evaluate_derivative`](Self::evaluate_derivative); the solver itself
    /// uses the hand-differentiated form.
    ///
    /// # Example
    ///
    /// ```
    /// use poly_core::math::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
    /// let (value, derivative) = poly.evaluate_dual(3.0);
    /// assert!((value - 7.0).abs() < 1e-12);
    /// assert!((derivative - 6.0).abs() < 1e-12);
    /// ```
    pub fn evaluate_dual(&self, x: f64) -> (f64, f64) {
        use num_dual::{Dual64, DualNum};

        let x_dual = Dual64::new(x, 1.0);
        let mut acc = Dual64::from(0.0);
        for (i, &c) in self.coefficients.iter().enumerate() {
            acc = acc + Dual64::from(c) * x_dual.powi(i as i32);
        }
        (acc.re, acc.eps)
    }
}
