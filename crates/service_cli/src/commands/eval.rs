//! Eval command implementation
//!
//! Evaluates a polynomial and its derivative at a point. Useful as a
//! standalone diagnostic, e.g. for checking the residual of an estimate
//! produced by `solve`.

use tracing::info;

use crate::Result;
use poly_core::math::polynomial::Polynomial;

/// Run the eval command
pub fn run(coefficients: &[f64], at: f64) -> Result<()> {
    info!("Evaluating polynomial...");
    info!("  Coefficients (ascending): {:?}", coefficients);
    info!("  At: {}", at);

    let polynomial = Polynomial::new(coefficients.to_vec())?;

    println!("degree : {}", polynomial.degree());
    println!("f({})  = {}", at, polynomial.evaluate(at));
    println!("f'({}) = {}", at, polynomial.evaluate_derivative(at));

    Ok(())
}
