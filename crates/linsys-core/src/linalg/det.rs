//! Determinant by Gaussian elimination with partial pivoting.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

use super::{find_pivot_row, is_near_zero};

/// Determinant of a square matrix.
///
/// Eliminates on a private copy, multiplying the running product by each
/// pivot and flipping its sign once per row swap. As soon as a pivot is near
/// zero the matrix is treated as singular and `0.0` is returned.
///
/// ```
/// # use linsys_core::Matrix;
/// # use linsys_core::linalg::determinant;
/// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 4.0]]).unwrap();
/// assert!((determinant(&a).unwrap() - 7.0).abs() < 1e-12);
/// ```
pub fn determinant(a: &Matrix) -> Result<f64> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let n = a.rows();
    let mut work = a.clone();
    let mut det = 1.0;

    for k in 0..n {
        let p = find_pivot_row(&work, k, k);
        let pivot = work[(p, k)];
        if is_near_zero(pivot) {
            return Ok(0.0);
        }
        if p != k {
            work.swap_rows(p, k);
            det = -det;
        }
        det *= pivot;

        for i in (k + 1)..n {
            let factor = work[(i, k)] / pivot;
            if factor != 0.0 {
                work.sub_scaled_row(i, k, factor, k);
            }
        }
    }

    Ok(det)
}
