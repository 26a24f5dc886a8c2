//! Row access, sub-block extraction and row operations for [`Matrix`].

use core::ops::{Index, IndexMut};

use crate::error::{CoreError, Result};

use super::Matrix;

impl Matrix {
    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {i} out of bounds ({} rows)", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row `i` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.rows, "row {i} out of bounds ({} rows)", self.rows);
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy column `j` into a vector.
    pub fn column(&self, j: usize) -> Result<Vec<f64>> {
        if j >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row: 0,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((0..self.rows).map(|i| self.data[i * self.cols + j]).collect())
    }

    /// Copy the rectangular block `rows x cols` starting at `(row0, col0)`.
    pub fn block(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> Result<Matrix> {
        if row0 + rows > self.rows || col0 + cols > self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row: row0 + rows,
                col: col0 + cols,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity(rows * cols);
        for i in row0..row0 + rows {
            let start = i * self.cols + col0;
            data.extend_from_slice(&self.data[start..start + cols]);
        }
        Matrix::from_vec(data, rows, cols)
    }

    /// The `n x n` coefficient block of an augmented `n x (n + 1)` system.
    ///
    /// ```
    /// # use linsys_core::Matrix;
    /// let ab = Matrix::from_rows(&[[2.0, 1.0, 3.0], [1.0, 3.0, 5.0]]).unwrap();
    /// let a = ab.coefficients().unwrap();
    /// assert_eq!(a.as_slice(), &[2.0, 1.0, 1.0, 3.0]);
    /// ```
    pub fn coefficients(&self) -> Result<Matrix> {
        self.check_augmented()?;
        self.block(0, 0, self.rows, self.rows)
    }

    /// The right-hand side column of an augmented `n x (n + 1)` system.
    pub fn rhs(&self) -> Result<Vec<f64>> {
        self.check_augmented()?;
        self.column(self.rows)
    }

    pub(crate) fn check_augmented(&self) -> Result<()> {
        if self.is_augmented() {
            Ok(())
        } else {
            Err(CoreError::InvalidShape {
                rows: self.rows,
                cols: self.cols,
                reason: "expected an augmented n x (n + 1) matrix with n >= 1",
            })
        }
    }

    /// Exchange two full rows in place. Swapping a row with itself is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        assert!(
            r1 < self.rows && r2 < self.rows,
            "swap_rows({r1}, {r2}) out of bounds ({} rows)",
            self.rows
        );
        if r1 == r2 {
            return;
        }
        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// `row[target] -= factor * row[source]`, starting at column `from_col`.
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64, from_col: usize) {
        let cols = self.cols;
        for j in from_col..cols {
            let s = self.data[source * cols + j];
            self.data[target * cols + j] -= factor * s;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        debug_assert!(r < self.rows && c < self.cols);
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        debug_assert!(r < self.rows && c < self.cols);
        &mut self.data[r * self.cols + c]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_row_and_column() {
        let m = sample();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2).unwrap(), vec![3.0, 6.0]);
        assert!(m.column(3).is_err());
    }

    #[test]
    fn test_coefficients_and_rhs() {
        let m = sample();
        let a = m.coefficients().unwrap();
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a.as_slice(), &[1.0, 2.0, 4.0, 5.0]);
        assert_eq!(m.rhs().unwrap(), vec![3.0, 6.0]);
        // source untouched
        assert_eq!(m, sample());
    }

    #[test]
    fn test_coefficients_requires_augmented() {
        let m = Matrix::identity(3);
        assert!(matches!(m.coefficients(), Err(CoreError::InvalidShape { .. })));
        assert!(m.rhs().is_err());
    }

    #[test]
    fn test_block_out_of_bounds() {
        let m = sample();
        assert!(m.block(1, 1, 2, 1).is_err());
        assert_eq!(m.block(1, 1, 1, 2).unwrap().as_slice(), &[5.0, 6.0]);
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        m.swap_rows(2, 0);
        assert_eq!(m.as_slice(), &[5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_sub_scaled_row() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        m.sub_scaled_row(1, 0, 3.0, 0);
        assert_eq!(m.row(1), &[0.0, -2.0]);
    }

    #[test]
    fn test_index_mut() {
        let mut m = Matrix::zeros(2, 2);
        m[(1, 0)] = 7.0;
        assert_eq!(m.as_slice(), &[0.0, 0.0, 7.0, 0.0]);
    }
}
