//! Matrix creation functions.

use crate::error::{CoreError, Result};

use super::Matrix;

impl Matrix {
    /// Create a matrix filled with zeros.
    ///
    /// ```
    /// # use linsys_core::Matrix;
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an identity matrix of size `n x n`.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Create a matrix from a list of rows.
    ///
    /// Every row must have the same length; an empty list gives a `0 x 0`
    /// matrix.
    ///
    /// ```
    /// # use linsys_core::Matrix;
    /// let m = Matrix::from_rows(&[[2.0, 1.0, 3.0], [1.0, 3.0, 5.0]]).unwrap();
    /// assert!(m.is_augmented());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(CoreError::InvalidShape {
                    rows: height,
                    cols: width,
                    reason: "rows have different lengths",
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, height, width)
    }

    /// Build the augmented matrix `[A | b]` from a square coefficient matrix
    /// and a right-hand side.
    pub fn augment(coefficients: &Matrix, rhs: &[f64]) -> Result<Self> {
        if !coefficients.is_square() {
            return Err(CoreError::NotSquare {
                rows: coefficients.rows,
                cols: coefficients.cols,
            });
        }
        let n = coefficients.rows;
        if rhs.len() != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n],
                got: vec![rhs.len()],
            });
        }

        let mut data = Vec::with_capacity(n * (n + 1));
        for (row, &b) in coefficients.row_iter().zip(rhs) {
            data.extend_from_slice(row);
            data.push(b);
        }
        Self::from_vec(data, n, n + 1)
    }
}
