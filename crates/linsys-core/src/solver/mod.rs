//! The three interchangeable solving strategies.
//!
//! | Method | Strategy | Elimination | Extra result |
//! |--------|----------|-------------|--------------|
//! | [`Method::Gauss`] | [`GaussianElimination`] | below the pivot, then back substitution | - |
//! | [`Method::GaussJordan`] | [`GaussJordan`] | above and below the pivot | - |
//! | [`Method::InverseMatrix`] | [`InverseMatrix`] | Gauss-Jordan on `[A \| I]`, then `A^-1 b` | determinant |
//!
//! Every strategy takes an augmented `n x (n + 1)` matrix, leaves it
//! untouched, checks solvability with [`classify`](crate::classify) before
//! eliminating, and reports every outcome (including failures) as a
//! [`SolverResult`] rather than an `Err`.

mod gauss;
mod gauss_jordan;
mod inverse;

pub use gauss::GaussianElimination;
pub use gauss_jordan::GaussJordan;
pub use inverse::InverseMatrix;

use core::fmt;
use core::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::classify::{Classification, SolutionStatus, classify_detailed};
use crate::error::{CoreError, Result};
use crate::linalg::residuals;
use crate::matrix::Matrix;
use crate::trace::{Stage, Step, Trace};

/// Common contract of all solving strategies.
pub trait Solver {
    /// Identifier of this strategy.
    fn method(&self) -> Method;

    /// Solve the augmented system `[A | b]`, recording a [`Trace`] when
    /// `trace` is set.
    fn solve(&self, system: &Matrix, trace: bool) -> SolverResult;
}

/// Selects a solving strategy.
///
/// Parses case-insensitively from its [`name`](Method::name) and a few
/// aliases:
///
/// ```
/// # use linsys_core::Method;
/// assert_eq!("gauss".parse::<Method>().unwrap(), Method::Gauss);
/// assert_eq!("Gauss-Jordan".parse::<Method>().unwrap(), Method::GaussJordan);
/// assert_eq!("inverse".parse::<Method>().unwrap(), Method::InverseMatrix);
/// assert!("cramer".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    #[default]
    Gauss,
    GaussJordan,
    InverseMatrix,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Gauss, Method::GaussJordan, Method::InverseMatrix];

    /// Canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gauss => "gauss",
            Self::GaussJordan => "gauss-jordan",
            Self::InverseMatrix => "inverse-matrix",
        }
    }

    pub fn solver(self) -> &'static dyn Solver {
        match self {
            Self::Gauss => &GaussianElimination,
            Self::GaussJordan => &GaussJordan,
            Self::InverseMatrix => &InverseMatrix,
        }
    }

    /// Shorthand for `self.solver().solve(system, trace)`.
    pub fn solve(self, system: &Matrix, trace: bool) -> SolverResult {
        self.solver().solve(system, trace)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "gauss" | "gaussian" | "gaussian-elimination" => Ok(Self::Gauss),
            "gauss-jordan" | "jordan" | "jordan-gauss" => Ok(Self::GaussJordan),
            "inverse" | "inverse-matrix" | "matrix" => Ok(Self::InverseMatrix),
            _ => Err(CoreError::InvalidArgument {
                reason: format!("unknown solving method {s:?}"),
            }),
        }
    }
}

/// Everything a solve produced.
///
/// Which fields are populated depends on [`status`](Self::status):
/// the solution and residual only for
/// [`UniqueSolution`](SolutionStatus::UniqueSolution), the error message only
/// for [`Error`](SolutionStatus::Error). The trace is present whenever it was
/// requested, whatever the status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverResult {
    method: Method,
    status: SolutionStatus,
    solution: Option<Vec<f64>>,
    max_residual: Option<f64>,
    determinant: Option<f64>,
    error: Option<String>,
    trace: Option<Trace>,
}

impl SolverResult {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    pub fn is_unique(&self) -> bool {
        self.status.is_unique()
    }

    /// The solution vector, for a unique solution.
    pub fn solution(&self) -> Option<&[f64]> {
        self.solution.as_deref()
    }

    /// Largest absolute residual against the original equations, for a
    /// unique solution.
    pub fn max_residual(&self) -> Option<f64> {
        self.max_residual
    }

    /// Determinant of the coefficient matrix, if the method computed it.
    pub fn determinant(&self) -> Option<f64> {
        self.determinant
    }

    /// What went wrong, for [`SolutionStatus::Error`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn into_trace(self) -> Option<Trace> {
        self.trace
    }
}

/// How a strategy's run ended short of an error.
pub(crate) enum Flow {
    /// Classification ruled out a unique solution.
    Stopped(SolutionStatus),
    Solved(Vec<f64>),
}

/// Per-call state shared by the strategies: the caller's matrix, the trace
/// and the diagnostics collected on the way to a [`SolverResult`].
pub(crate) struct Context<'a> {
    method: Method,
    system: &'a Matrix,
    trace: Trace,
    classification: Option<Classification>,
    determinant: Option<f64>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(method: Method, system: &'a Matrix, trace: bool) -> Self {
        debug!("{method}: solving {}x{} system", system.rows(), system.cols());
        Self {
            method,
            system,
            trace: Trace::new(trace),
            classification: None,
            determinant: None,
        }
    }

    /// The caller's matrix. Never mutated.
    pub(crate) fn system(&self) -> &'a Matrix {
        self.system
    }

    pub(crate) fn trace_mut(&mut self) -> &mut Trace {
        &mut self.trace
    }

    pub(crate) fn set_determinant(&mut self, value: f64) {
        self.determinant = Some(value);
        self.trace.record(|| Step::Determinant { value });
    }

    /// Reject anything that is not a finite augmented `n x (n + 1)` matrix.
    pub(crate) fn validate(&self) -> Result<()> {
        self.system.check_augmented()?;
        if !self.system.is_finite() {
            return Err(CoreError::NonFinite { what: "input matrix" });
        }
        Ok(())
    }

    pub(crate) fn classify(&mut self) -> Result<Classification> {
        let c = classify_detailed(self.system)?;
        self.classification = Some(c);
        self.trace.record(|| Step::Classified {
            rank_coefficients: c.rank_coefficients,
            rank_augmented: c.rank_augmented,
            unknowns: c.unknowns,
            status: c.status,
        });
        Ok(c)
    }

    /// Private copy of the system for elimination.
    pub(crate) fn working_copy(&mut self) -> Matrix {
        let work = self.system.clone();
        self.trace.record(|| Step::Snapshot {
            stage: Stage::Initial,
            matrix: work.clone(),
        });
        work
    }

    /// Turn the strategy's outcome into the public result.
    pub(crate) fn finish(mut self, flow: Result<Flow>) -> SolverResult {
        let outcome = flow.and_then(|flow| match flow {
            Flow::Stopped(status) => Ok((status, None)),
            Flow::Solved(solution) => self
                .check_solution(solution)
                .map(|s| (SolutionStatus::UniqueSolution, Some(s))),
        });

        let mut result = SolverResult {
            method: self.method,
            status: SolutionStatus::Error,
            solution: None,
            max_residual: None,
            determinant: self.determinant,
            error: None,
            trace: None,
        };

        match outcome {
            Ok((status, solved)) => {
                result.status = status;
                if let Some((solution, max_residual)) = solved {
                    debug!("{}: solved, max residual {max_residual:e}", self.method);
                    result.solution = Some(solution);
                    result.max_residual = Some(max_residual);
                } else {
                    debug!("{}: {status}", self.method);
                }
            }
            Err(err) => {
                if err.is_degenerate() && self.classification.is_some_and(|c| c.status.is_unique()) {
                    warn!(
                        "{}: rank test reported a unique solution but elimination failed: {err}",
                        self.method
                    );
                } else {
                    debug!("{}: failed: {err}", self.method);
                }
                let message = err.to_string();
                self.trace.record(|| Step::Failed {
                    message: message.clone(),
                });
                result.error = Some(message);
            }
        }

        if self.trace.is_enabled() {
            result.trace = Some(self.trace);
        }
        result
    }

    /// Finiteness and residual check of a candidate solution against the
    /// original matrix.
    fn check_solution(&mut self, solution: Vec<f64>) -> Result<(Vec<f64>, f64)> {
        if solution.iter().any(|x| !x.is_finite()) {
            return Err(CoreError::NonFinite { what: "solution" });
        }
        self.trace.record(|| Step::SolutionExtracted {
            solution: solution.clone(),
        });

        let n = self.system.rows();
        let mut worst = 0.0_f64;
        for (i, r) in residuals(self.system, &solution)?.into_iter().enumerate() {
            let error = r.abs();
            if !error.is_finite() {
                return Err(CoreError::NonFinite { what: "residual" });
            }
            worst = worst.max(error);
            let rhs = self.system[(i, n)];
            self.trace.record(|| Step::Residual {
                row: i,
                lhs: rhs + r,
                rhs,
                error,
            });
        }
        Ok((solution, worst))
    }
}
