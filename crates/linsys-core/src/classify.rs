//! Solvability check by the Kronecker–Capelli (Rouché–Capelli) criterion.
//!
//! | `rank(A)` vs `rank(A|b)` | `rank(A)` vs `n` | Status |
//! |---|---|---|
//! | different | - | [`NoSolution`](SolutionStatus::NoSolution) |
//! | equal | `= n` | [`UniqueSolution`](SolutionStatus::UniqueSolution) |
//! | equal | `< n` | [`InfiniteSolutions`](SolutionStatus::InfiniteSolutions) |

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::linalg::rank;
use crate::matrix::Matrix;

/// Outcome category of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionStatus {
    UniqueSolution,
    InfiniteSolutions,
    NoSolution,
    /// The solve failed; see [`SolverResult::error`](crate::SolverResult::error).
    Error,
}

impl SolutionStatus {
    pub fn is_unique(self) -> bool {
        self == Self::UniqueSolution
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::UniqueSolution => "unique solution",
            Self::InfiniteSolutions => "infinitely many solutions",
            Self::NoSolution => "no solution",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Ranks behind a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub rank_coefficients: usize,
    pub rank_augmented: usize,
    pub unknowns: usize,
    pub status: SolutionStatus,
}

impl Classification {
    /// Apply the decision table to already computed ranks.
    pub fn from_ranks(rank_coefficients: usize, rank_augmented: usize, unknowns: usize) -> Self {
        let status = if rank_coefficients != rank_augmented {
            SolutionStatus::NoSolution
        } else if rank_coefficients == unknowns {
            SolutionStatus::UniqueSolution
        } else {
            SolutionStatus::InfiniteSolutions
        };
        Self {
            rank_coefficients,
            rank_augmented,
            unknowns,
            status,
        }
    }
}

/// Compute both ranks of an augmented `n x (n + 1)` system and classify it.
pub fn classify_detailed(system: &Matrix) -> Result<Classification> {
    let coefficients = system.coefficients()?;
    let c = Classification::from_ranks(rank(&coefficients), rank(system), system.rows());
    debug!(
        "classified {}-unknown system: rank(A) = {}, rank(A|b) = {} => {}",
        c.unknowns, c.rank_coefficients, c.rank_augmented, c.status
    );
    Ok(c)
}

/// Whether an augmented system has a unique solution, infinitely many, or
/// none. Never returns [`SolutionStatus::Error`]; a malformed matrix is an
/// `Err` instead.
///
/// ```
/// # use linsys_core::{Matrix, SolutionStatus, classify};
/// let ab = Matrix::from_rows(&[[1.0, 1.0, 2.0], [1.0, 1.0, 3.0]]).unwrap();
/// assert_eq!(classify(&ab).unwrap(), SolutionStatus::NoSolution);
/// ```
pub fn classify(system: &Matrix) -> Result<SolutionStatus> {
    Ok(classify_detailed(system)?.status)
}
