//! Pivot search.

use crate::matrix::Matrix;

use super::is_near_zero;

/// Row in `from_row..rows` whose entry in `col` has the largest absolute
/// value (partial pivoting). Ties go to the lowest row index.
///
/// ```
/// # use linsys_core::Matrix;
/// # use linsys_core::linalg::find_pivot_row;
/// let m = Matrix::from_rows(&[[1.0, 0.0], [-5.0, 0.0], [5.0, 0.0]]).unwrap();
/// assert_eq!(find_pivot_row(&m, 0, 0), 1);
/// assert_eq!(find_pivot_row(&m, 0, 2), 2);
/// ```
///
/// # Panics
///
/// Panics if `from_row >= m.rows()` or `col >= m.cols()`.
pub fn find_pivot_row(m: &Matrix, col: usize, from_row: usize) -> usize {
    assert!(
        from_row < m.rows() && col < m.cols(),
        "pivot search at ({from_row}, {col}) outside a {}x{} matrix",
        m.rows(),
        m.cols()
    );
    let mut max_row = from_row;
    let mut max_val = m[(from_row, col)].abs();
    for i in (from_row + 1)..m.rows() {
        let val = m[(i, col)].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }
    max_row
}

/// First row in `from_row..rows` whose entry in `col` is not near zero.
pub fn find_nonzero_row(m: &Matrix, col: usize, from_row: usize) -> Option<usize> {
    (from_row..m.rows()).find(|&i| !is_near_zero(m[(i, col)]))
}
