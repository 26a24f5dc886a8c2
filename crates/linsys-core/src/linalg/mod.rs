//! Matrix primitives shared by every solver.
//!
//! All routines are implemented from scratch on [`Matrix`](crate::Matrix).
//! None of them mutate their inputs except
//! [`Matrix::swap_rows`](crate::Matrix::swap_rows); routines that need to
//! transform a matrix work on a private copy.
//!
//! | Routine | Pivoting | Fails with |
//! |---------|----------|------------|
//! | [`determinant`] | max magnitude | [`NotSquare`](crate::CoreError::NotSquare) |
//! | [`rank`] | first non-zero | never |
//! | [`inverse`] | max magnitude | `NotSquare`, [`ZeroPivot`](crate::CoreError::ZeroPivot) |
//! | [`multiply`] | - | [`DimensionMismatch`](crate::CoreError::DimensionMismatch) |
//! | [`max_residual_error`] | - | `DimensionMismatch` |
//!
//! Every near-zero decision goes through [`is_near_zero`], so rank,
//! determinant and elimination share one tolerance.

pub mod blas;
pub mod det;
pub(crate) mod elim;
pub mod inverse;
pub mod pivot;
pub mod rank;

pub use blas::{dot, max_residual_error, multiply, residuals};
pub use det::determinant;
pub use inverse::inverse;
pub use pivot::{find_nonzero_row, find_pivot_row};
pub use rank::rank;

/// Tolerance below which a magnitude counts as zero.
pub const EPSILON: f64 = 1e-12;

/// `|x| < EPSILON`. NaN is never near zero.
///
/// ```
/// # use linsys_core::linalg::is_near_zero;
/// assert!(is_near_zero(1e-13));
/// assert!(is_near_zero(-1e-13));
/// assert!(!is_near_zero(1e-12));
/// ```
#[inline]
pub fn is_near_zero(x: f64) -> bool {
    x.abs() < EPSILON
}
