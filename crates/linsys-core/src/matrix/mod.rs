//! Dense 2-D matrix of `f64` with contiguous row-major storage.
//!
//! [`Matrix`] is the only data structure the solvers work on. An augmented
//! system `[A | b]` with `n` unknowns is simply a `Matrix` with `n` rows and
//! `n + 1` columns; see [`Matrix::is_augmented`].

mod create;
mod display;
mod indexing;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A dense `rows x cols` matrix.
///
/// Data is stored in a single row-major buffer. The matrix owns its data and
/// cloning performs one bulk copy with no aliasing.
///
/// Deserialization goes through [`Matrix::from_vec`], so a payload whose
/// shape does not match its data is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = CoreError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_vec(raw.data, raw.rows, raw.cols)
    }
}

impl Matrix {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major vector.
    ///
    /// Returns an error if `rows * cols` does not equal `data.len()`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a flat slice (copies the data).
    pub fn from_slice(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether this is an `n x (n + 1)` augmented system with `n >= 1`.
    #[inline]
    pub fn is_augmented(&self) -> bool {
        self.rows >= 1 && self.cols == self.rows + 1
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// A mutable flat slice of all elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix and return the underlying buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Whether every element is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let flat = self.flat_index(row, col)?;
        Ok(self.data[flat])
    }

    /// Set the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; an empty matrix has no rows worth yielding.
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}
