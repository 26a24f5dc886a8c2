//! Cross-method checks on the public API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use linsys_core::io::{format_augmented, parse_augmented};
use linsys_core::linalg::{determinant, inverse, max_residual_error, rank};
use linsys_core::{Matrix, Method, SolutionStatus, Step, classify, classify_detailed};

fn system(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

/// Random `n x (n + 1)` system with a strictly diagonally dominant `A`.
fn random_system(rng: &mut StdRng, n: usize) -> Matrix {
    let mut ab = Matrix::zeros(n, n + 1);
    for i in 0..n {
        let mut off_diag = 0.0;
        for j in 0..n {
            if i != j {
                let v: f64 = rng.gen_range(-10.0..10.0);
                ab[(i, j)] = v;
                off_diag += v.abs();
            }
        }
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        ab[(i, i)] = sign * (off_diag + rng.gen_range(1.0..5.0));
        ab[(i, n)] = rng.gen_range(-100.0..100.0);
    }
    ab
}

#[test]
fn methods_agree_on_random_systems() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in 2..=10 {
        for _ in 0..5 {
            let ab = random_system(&mut rng, n);
            let reference = Method::Gauss.solve(&ab, false);
            assert_eq!(reference.status(), SolutionStatus::UniqueSolution);
            let x0 = reference.solution().unwrap().to_vec();

            for method in Method::ALL {
                let r = method.solve(&ab, false);
                assert_eq!(r.status(), SolutionStatus::UniqueSolution, "{method} n={n}");
                assert!(r.max_residual().unwrap() < 1e-6, "{method} n={n}");
                for (a, b) in r.solution().unwrap().iter().zip(&x0) {
                    assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
                }
            }
        }
    }
}

#[test]
fn identity_returns_rhs() {
    let mut ab = Matrix::zeros(4, 5);
    for i in 0..4 {
        ab[(i, i)] = 1.0;
        ab[(i, 4)] = (i as f64) * 2.5 - 3.0;
    }
    for method in Method::ALL {
        let r = method.solve(&ab, false);
        assert_eq!(r.solution().unwrap(), &[-3.0, -0.5, 2.0, 4.5], "{method}");
        assert_eq!(r.max_residual(), Some(0.0));
    }
}

#[test]
fn two_by_two_unique() {
    let ab = system(&[&[2.0, 1.0, 3.0], &[1.0, 3.0, 5.0]]);
    for method in Method::ALL {
        let r = method.solve(&ab, false);
        let x = r.solution().unwrap();
        assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(
        Method::InverseMatrix.solve(&ab, false).determinant().unwrap(),
        5.0,
        epsilon = 1e-12
    );
}

#[test]
fn dependent_equations_are_infinite() {
    let ab = system(&[&[1.0, 1.0, 2.0], &[2.0, 2.0, 4.0]]);
    assert_eq!(classify(&ab).unwrap(), SolutionStatus::InfiniteSolutions);
    for method in [Method::Gauss, Method::GaussJordan] {
        let r = method.solve(&ab, true);
        assert_eq!(r.status(), SolutionStatus::InfiniteSolutions);
        assert!(r.solution().is_none());
        assert_eq!(r.trace().unwrap().len(), 1);
    }
}

#[test]
fn inconsistent_equations_have_no_solution() {
    let ab = system(&[&[1.0, 1.0, 2.0], &[1.0, 1.0, 3.0]]);
    let c = classify_detailed(&ab).unwrap();
    assert_eq!((c.rank_coefficients, c.rank_augmented), (1, 2));
    assert_eq!(c.status, SolutionStatus::NoSolution);
    for method in [Method::Gauss, Method::GaussJordan] {
        assert_eq!(method.solve(&ab, false).status(), SolutionStatus::NoSolution);
    }
}

#[test]
fn zero_matrix() {
    let ab = system(&[&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0]]);
    assert_eq!(rank(&ab), 1);
    assert_eq!(rank(&ab.coefficients().unwrap()), 0);
    assert_eq!(determinant(&ab.coefficients().unwrap()).unwrap(), 0.0);
    assert_eq!(classify(&ab).unwrap(), SolutionStatus::NoSolution);

    let r = Method::InverseMatrix.solve(&ab, false);
    assert_eq!(r.status(), SolutionStatus::Error);
    assert_eq!(r.determinant(), Some(0.0));
}

#[test]
fn rank_test_unique_but_elimination_hits_zero_pivot() {
    // first-non-zero pivoting keeps 2e-12 and sees rank 2; max-magnitude
    // pivoting swaps it away and leaves 1e-13 in column 2
    let ab = system(&[&[2e-12, 1e-13, 1.0], &[1.0, 0.0, 1.0]]);
    assert_eq!(classify(&ab).unwrap(), SolutionStatus::UniqueSolution);

    for method in [Method::Gauss, Method::GaussJordan] {
        let r = method.solve(&ab, true);
        assert_eq!(r.status(), SolutionStatus::Error, "{method}");
        assert_eq!(r.error(), Some("zero pivot in column 2"));
        assert!(r.solution().is_none());

        let steps = r.trace().unwrap().steps();
        let [.., pivot, last] = steps else {
            panic!("{method}: trace too short");
        };
        assert!(matches!(pivot, Step::PivotSelected { column: 1, .. }), "{method}");
        assert!(matches!(last, Step::Failed { .. }), "{method}");
    }

    assert_eq!(
        Method::InverseMatrix.solve(&ab, false).error(),
        Some("coefficient matrix is singular")
    );
}

#[test]
fn singular_but_consistent_diverges_between_methods() {
    // det(A) is 1e-13, below the zero threshold
    let ab = system(&[&[1.0, 1.0, 2.0], &[1.0, 1.0 + 1e-13, 2.0]]);
    assert_eq!(
        Method::Gauss.solve(&ab, false).status(),
        SolutionStatus::InfiniteSolutions
    );
    let r = Method::InverseMatrix.solve(&ab, false);
    assert_eq!(r.status(), SolutionStatus::Error);
    assert_eq!(r.error(), Some("coefficient matrix is singular"));
}

#[test]
fn inverse_times_matrix_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 2..=8 {
        let a = random_system(&mut rng, n).coefficients().unwrap();
        let inv = inverse(&a).unwrap();
        for i in 0..n {
            for j in 0..n {
                let v: f64 = (0..n).map(|k| inv[(i, k)] * a[(k, j)]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(v, expected, epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn determinant_changes_sign_on_row_swap() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut a = random_system(&mut rng, 5).coefficients().unwrap();
    let before = determinant(&a).unwrap();
    a.swap_rows(0, 3);
    let after = determinant(&a).unwrap();
    assert_relative_eq!(before, -after, max_relative = 1e-9);
}

#[test]
fn rank_bounds_classification() {
    let ab = system(&[
        &[1.0, 2.0, 3.0, 6.0],
        &[2.0, 4.0, 6.0, 12.0],
        &[1.0, 0.0, 1.0, 2.0],
    ]);
    let c = classify_detailed(&ab).unwrap();
    assert!(c.rank_coefficients <= c.rank_augmented);
    assert!(c.rank_augmented <= c.rank_coefficients + 1);
    assert_eq!(c.unknowns, 3);
    assert_eq!(c.status, SolutionStatus::InfiniteSolutions);
}

#[test]
fn traced_result_serializes() {
    let ab = system(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, 3.0]]);
    let r = Method::Gauss.solve(&ab, true);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["method"], "gauss");
    assert_eq!(json["status"], "unique-solution");
    assert_eq!(json["solution"], serde_json::json!([3.0, 2.0]));

    let steps = json["trace"]["steps"].as_array().unwrap();
    assert_eq!(steps[0]["kind"], "classified");
    assert!(steps.iter().any(|s| s["kind"] == "rows-swapped"));
}

#[test]
fn trace_reaches_solution() {
    let ab = system(&[&[3.0, 2.0, -1.0, 1.0], &[2.0, -2.0, 4.0, -2.0], &[-1.0, 0.5, -1.0, 0.0]]);
    for method in Method::ALL {
        let r = method.solve(&ab, true);
        let steps = r.trace().unwrap().steps();
        let extracted = steps
            .iter()
            .find_map(|s| match s {
                Step::SolutionExtracted { solution } => Some(solution.as_slice()),
                _ => None,
            })
            .unwrap();
        assert_eq!(extracted, r.solution().unwrap());
        let x = r.solution().unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(x[1], -2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(x[2], -2.0, epsilon = 1e-10);
    }
}

#[test]
fn text_round_trip_then_solve() {
    let mut rng = StdRng::seed_from_u64(3);
    let ab = random_system(&mut rng, 6);
    let text = format_augmented(&ab).unwrap();
    let back = parse_augmented(&text).unwrap();
    assert_eq!(back, ab);

    let x = Method::GaussJordan.solve(&back, false).solution().unwrap().to_vec();
    assert!(max_residual_error(&ab, &x).unwrap() < 1e-6);
}

#[test]
fn non_finite_input_is_error() {
    let ab = system(&[&[1.0, f64::NAN, 1.0], &[0.0, 1.0, 1.0]]);
    for method in Method::ALL {
        let r = method.solve(&ab, false);
        assert_eq!(r.status(), SolutionStatus::Error);
        assert!(r.error().unwrap().contains("non-finite"));
    }
}

#[test]
fn method_names_parse() {
    for method in Method::ALL {
        assert_eq!(method.name().parse::<Method>().unwrap(), method);
    }
    assert_eq!("Gauss Jordan".parse::<Method>().unwrap(), Method::GaussJordan);
    assert!("cramer".parse::<Method>().is_err());
}
