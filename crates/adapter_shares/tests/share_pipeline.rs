//! End-to-end pipeline test: share map in, polynomial roots out.
//!
//! Exercises the adapter together with the poly_core kernel the way the
//! service layer composes them.

use adapter_shares::ShareMap;
use poly_core::math::polynomial::{expand_roots, Polynomial};
use poly_core::math::solvers::NewtonRaphsonSolver;

const SAMPLE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

#[test]
fn test_shares_expand_to_expected_coefficients() {
    let map = ShareMap::from_json(SAMPLE).unwrap();
    let roots = map.decode_roots().unwrap();
    assert_eq!(roots, vec![4, 7, 12]);

    // (x - 4)(x - 7)(x - 12)
    assert_eq!(expand_roots(&roots), vec![-336, 172, -23, 1]);
}

#[test]
fn test_decoded_roots_are_recoverable_by_the_solver() {
    let map = ShareMap::from_json(SAMPLE).unwrap();
    let roots = map.decode_roots().unwrap();

    let poly: Polynomial<f64> = Polynomial::from_roots(&roots);
    let solver = NewtonRaphsonSolver::with_defaults();

    for &r in &roots {
        let result = solver.find_root(&poly, r as f64 + 0.3);
        assert!(result.is_reliable(), "root {} was not recovered", r);
        assert!(poly.evaluate(result.estimate).abs() < 1e-4);
    }
}
