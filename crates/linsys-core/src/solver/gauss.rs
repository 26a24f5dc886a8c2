//! Gaussian elimination with partial pivoting and back substitution.

use crate::error::Result;
use crate::linalg::elim::{Sweep, reduce_column};
use crate::matrix::Matrix;
use crate::trace::Step;

use super::{Context, Flow, Method, Solver, SolverResult};

/// Forward elimination to an upper-triangular matrix with unit diagonal,
/// then back substitution from the last unknown to the first.
///
/// ```
/// # use linsys_core::{GaussianElimination, Matrix, Solver};
/// let ab = Matrix::from_rows(&[[2.0, 1.0, 3.0], [1.0, 3.0, 5.0]]).unwrap();
/// let r = GaussianElimination.solve(&ab, false);
/// let x = r.solution().unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12 && (x[1] - 1.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianElimination;

impl GaussianElimination {
    fn run(&self, cx: &mut Context<'_>) -> Result<Flow> {
        cx.validate()?;
        let c = cx.classify()?;
        if !c.status.is_unique() {
            return Ok(Flow::Stopped(c.status));
        }

        let mut work = cx.working_copy();
        let n = work.rows();
        let tr = cx.trace_mut();
        for k in 0..n {
            reduce_column(&mut work, k, Sweep::Below, tr)?;
        }

        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let row = work.row(i);
            let known: f64 = ((i + 1)..n).map(|j| row[j] * x[j]).sum();
            let xi = row[n] - known;
            x[i] = xi;
            tr.record(|| Step::BackSubstituted { index: i, value: xi });
        }
        Ok(Flow::Solved(x))
    }
}

impl Solver for GaussianElimination {
    fn method(&self) -> Method {
        Method::Gauss
    }

    fn solve(&self, system: &Matrix, trace: bool) -> SolverResult {
        let mut cx = Context::new(self.method(), system, trace);
        let flow = self.run(&mut cx);
        cx.finish(flow)
    }
}
