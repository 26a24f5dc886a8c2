//! Matrix-vector products and residuals.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Inner product of two equal-length slices.
///
/// ```
/// # use linsys_core::linalg::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// ```
pub fn dot(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(CoreError::DimensionMismatch {
            expected: vec![x.len()],
            got: vec![y.len()],
        });
    }
    Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
}

/// Matrix-vector product `A x`.
///
/// `x.len()` must equal `a.cols()`.
pub fn multiply(a: &Matrix, x: &[f64]) -> Result<Vec<f64>> {
    if a.cols() != x.len() {
        return Err(CoreError::DimensionMismatch {
            expected: vec![a.cols()],
            got: vec![x.len()],
        });
    }
    (0..a.rows()).map(|i| dot(a.row(i), x)).collect()
}

/// Signed residuals `sum_j a_ij x_j - b_i` of a candidate solution against an
/// augmented `n x (n + 1)` system.
pub fn residuals(system: &Matrix, solution: &[f64]) -> Result<Vec<f64>> {
    system.check_augmented()?;
    let n = system.rows();
    if solution.len() != n {
        return Err(CoreError::DimensionMismatch {
            expected: vec![n],
            got: vec![solution.len()],
        });
    }
    system
        .row_iter()
        .map(|row| Ok(dot(&row[..n], solution)? - row[n]))
        .collect()
}

/// Largest absolute residual of `solution` against `system`.
///
/// This is the accuracy figure reported for every solve and is always taken
/// against the caller's original matrix, never an eliminated working copy.
/// A NaN residual makes the result NaN.
///
/// ```
/// # use linsys_core::Matrix;
/// # use linsys_core::linalg::max_residual_error;
/// let ab = Matrix::from_rows(&[[2.0, 1.0, 3.0], [1.0, 3.0, 5.0]]).unwrap();
/// assert!(max_residual_error(&ab, &[0.8, 1.4]).unwrap() < 1e-12);
/// assert!((max_residual_error(&ab, &[0.0, 0.0]).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn max_residual_error(system: &Matrix, solution: &[f64]) -> Result<f64> {
    Ok(residuals(system, solution)?
        .into_iter()
        .map(f64::abs)
        .fold(0.0, |worst, r| if r.is_nan() || r > worst { r } else { worst }))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_mismatch() {
        assert!(dot(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        assert_eq!(multiply(&a, &[1.0, -1.0]).unwrap(), vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = Matrix::identity(3);
        assert_eq!(
            multiply(&a, &[1.0, 2.0]),
            Err(CoreError::DimensionMismatch {
                expected: vec![3],
                got: vec![2],
            })
        );
    }

    #[test]
    fn test_residuals_signed() {
        let ab = Matrix::from_rows(&[[1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]).unwrap();
        assert_eq!(residuals(&ab, &[2.0, 0.5]).unwrap(), vec![1.0, -0.5]);
        assert_eq!(max_residual_error(&ab, &[2.0, 0.5]).unwrap(), 1.0);
    }

    #[test]
    fn test_residual_shape_errors() {
        let ab = Matrix::from_rows(&[[1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]).unwrap();
        assert!(max_residual_error(&ab, &[1.0]).is_err());
        assert!(max_residual_error(&Matrix::identity(2), &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_residual_propagates_nan() {
        let ab = Matrix::from_rows(&[[1.0, 1.0]]).unwrap();
        assert!(residuals(&ab, &[f64::NAN]).unwrap()[0].is_nan());
        assert!(max_residual_error(&ab, &[f64::NAN]).unwrap().is_nan());
    }
}
