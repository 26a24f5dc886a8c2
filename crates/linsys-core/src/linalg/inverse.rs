//! Matrix inverse by Gauss-Jordan elimination on `[A | I]`.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::trace::{Stage, Step, Trace};

use super::elim::{Sweep, reduce_column};

/// Inverse of a square matrix.
///
/// Reduces the `n x 2n` block `[A | I]` column by column (largest pivot,
/// swap, normalize, eliminate in every other row). When the left half has
/// become the identity the right half is `A^-1`.
///
/// Fails with [`CoreError::ZeroPivot`] if a pivot column has no usable entry,
/// even when the caller already checked the determinant.
///
/// ```
/// # use linsys_core::Matrix;
/// # use linsys_core::linalg::inverse;
/// let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.25]);
/// ```
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    inverse_traced(a, &mut Trace::disabled())
}

pub(crate) fn inverse_traced(a: &Matrix, tr: &mut Trace) -> Result<Matrix> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();

    // [A | I]
    let mut work = Matrix::zeros(n, 2 * n);
    for i in 0..n {
        let row = work.row_mut(i);
        row[..n].copy_from_slice(a.row(i));
        row[n + i] = 1.0;
    }
    tr.record(|| Step::Snapshot {
        stage: Stage::Initial,
        matrix: work.clone(),
    });

    for k in 0..n {
        reduce_column(&mut work, k, Sweep::All, tr)?;
    }

    let inv = work.block(0, n, n, n)?;
    tr.record(|| Step::Inverse { matrix: inv.clone() });
    Ok(inv)
}
