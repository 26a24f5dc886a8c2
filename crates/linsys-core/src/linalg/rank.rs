//! Rank by forward row-echelon reduction.

use crate::matrix::Matrix;

use super::find_nonzero_row;

/// Number of linearly independent rows of `m` (any shape).
///
/// Scans columns left to right. In each column the first entry at or below
/// the current pivot row that is not near zero becomes the pivot; columns
/// without one are skipped. Entries below the pivot are eliminated and the
/// rank advances by one.
///
/// Unlike [`determinant`](super::determinant) this does not pick the
/// largest-magnitude pivot, so on nearly singular input the two can disagree
/// about degeneracy.
///
/// ```
/// # use linsys_core::Matrix;
/// # use linsys_core::linalg::rank;
/// let m = Matrix::from_rows(&[[1.0, 1.0, 2.0], [1.0, 1.0, 3.0]]).unwrap();
/// assert_eq!(rank(&m), 2);
/// assert_eq!(rank(&m.coefficients().unwrap()), 1);
/// ```
pub fn rank(m: &Matrix) -> usize {
    let (rows, cols) = m.shape();
    let mut work = m.clone();
    let mut rank = 0;

    for col in 0..cols {
        if rank == rows {
            break;
        }
        let Some(p) = find_nonzero_row(&work, col, rank) else {
            continue;
        };
        work.swap_rows(p, rank);

        let pivot = work[(rank, col)];
        for i in (rank + 1)..rows {
            let factor = work[(i, col)] / pivot;
            if factor != 0.0 {
                work.sub_scaled_row(i, rank, factor, col);
            }
        }
        rank += 1;
    }

    rank
}
