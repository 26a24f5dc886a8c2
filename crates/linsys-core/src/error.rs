use thiserror::Error;

/// All errors returned by `linsys-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A square matrix was required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A shape specification is invalid for the operation.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// A row or column index is out of bounds.
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Elimination found no usable pivot in a column (0-based).
    #[error("zero pivot in column {}", .column + 1)]
    ZeroPivot { column: usize },

    /// The coefficient matrix has a (near-)zero determinant.
    #[error("coefficient matrix is singular")]
    SingularMatrix,

    /// A NaN or infinity showed up where only finite values are allowed.
    #[error("non-finite value encountered in {what}")]
    NonFinite { what: &'static str },

    /// The matrix text format could not be read. `line` is 1-based.
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl CoreError {
    /// Whether this error means the matrix is (numerically) singular, as
    /// opposed to a caller mistake.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::ZeroPivot { .. } | Self::SingularMatrix)
    }
}

/// Convenience alias used throughout `linsys-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
