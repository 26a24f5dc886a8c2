//! Caller-facing solve options.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::solver::{Method, SolverResult};

/// Which method to run and whether to record a trace.
///
/// Deserializes from any serde format, with every field optional:
///
/// ```
/// # use linsys_core::{Method, SolveOptions};
/// let opts: SolveOptions = serde_json::from_str(r#"{ "method": "gauss-jordan" }"#).unwrap();
/// assert_eq!(opts.method, Method::GaussJordan);
/// assert!(!opts.trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolveOptions {
    pub method: Method,
    pub trace: bool,
}

impl SolveOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            trace: false,
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Solve `system` as configured by `options`.
pub fn solve_with(system: &Matrix, options: &SolveOptions) -> SolverResult {
    options.method.solve(system, options.trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SolutionStatus;

    #[test]
    fn test_default_is_untraced_gauss() {
        let opts = SolveOptions::default();
        assert_eq!(opts.method, Method::Gauss);
        assert!(!opts.trace);
    }

    #[test]
    fn test_deserialize_full() {
        let opts: SolveOptions =
            serde_json::from_str(r#"{ "method": "inverse-matrix", "trace": true }"#).unwrap();
        assert_eq!(opts, SolveOptions::new(Method::InverseMatrix).with_trace(true));
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<SolveOptions>(r#"{ "methd": "gauss" }"#).is_err());
        assert!(serde_json::from_str::<SolveOptions>(r#"{ "method": "cramer" }"#).is_err());
    }

    #[test]
    fn test_solve_with() {
        let ab = Matrix::from_rows(&[[1.0, 0.0, 2.0], [0.0, 1.0, -3.0]]).unwrap();
        let opts = SolveOptions::new(Method::GaussJordan).with_trace(true);
        let r = solve_with(&ab, &opts);
        assert_eq!(r.method(), Method::GaussJordan);
        assert_eq!(r.status(), SolutionStatus::UniqueSolution);
        assert_eq!(r.solution().unwrap(), &[2.0, -3.0]);
        assert!(r.trace().is_some());
    }
}
