//! `linsys-core`: solvers for small dense systems of linear equations.
//!
//! Solves `A x = b` for 2 to roughly 10 unknowns by three independent exact
//! methods, and tells apart systems with a unique solution, infinitely many,
//! or none before trying to solve them:
//!
//! - [`GaussianElimination`]: partial pivoting plus back substitution
//! - [`GaussJordan`]: full elimination, no back substitution
//! - [`InverseMatrix`]: `x = A^-1 b`, also reporting `det(A)`
//!
//! Each can record a [`Trace`] detailed enough to reconstruct every
//! arithmetic step it took.
//!
//! # Design
//!
//! - Matrices are a single contiguous row-major `Vec<f64>` ([`Matrix`]).
//! - Every near-zero test uses [`linalg::EPSILON`].
//! - Primitives return [`Result`]; solvers never return `Err` but report
//!   failures through [`SolutionStatus::Error`].
//!
//! ```
//! use linsys_core::prelude::*;
//!
//! let ab = Matrix::from_rows(&[[2.0, 1.0, 3.0], [1.0, 3.0, 5.0]]).unwrap();
//! for method in Method::ALL {
//!     let r = method.solve(&ab, false);
//!     assert_eq!(r.status(), SolutionStatus::UniqueSolution);
//!     assert!((r.solution().unwrap()[1] - 1.4).abs() < 1e-12);
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod io;
pub mod linalg;
pub mod matrix;
pub mod solver;
pub mod trace;

// Re-export key types at crate root for convenience.
pub use classify::{Classification, SolutionStatus, classify, classify_detailed};
pub use config::{SolveOptions, solve_with};
pub use error::{CoreError, Result};
pub use linalg::{determinant, inverse, rank};
pub use matrix::Matrix;
pub use solver::{GaussJordan, GaussianElimination, InverseMatrix, Method, Solver, SolverResult};
pub use trace::{Stage, Step, Trace};

/// Items intended for glob-import: `use linsys_core::prelude::*;`
pub mod prelude {
    pub use crate::classify::{SolutionStatus, classify};
    pub use crate::config::{SolveOptions, solve_with};
    pub use crate::error::{CoreError, Result};
    pub use crate::matrix::Matrix;
    pub use crate::solver::{Method, Solver, SolverResult};
    pub use crate::trace::{Step, Trace};
}
