//! Full (Gauss-Jordan) elimination.

use crate::error::Result;
use crate::linalg::elim::{Sweep, reduce_column};
use crate::matrix::Matrix;

use super::{Context, Flow, Method, Solver, SolverResult};

/// Eliminates each pivot column in every other row, so the coefficient block
/// ends up as the identity and the last column is the solution. There is no
/// back substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJordan;

impl GaussJordan {
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
            reduce_column(&mut work, k, Sweep::All, tr)?;
        }
        Ok(Flow::Solved(work.column(n)?))
    }
}

impl Solver for GaussJordan {
    fn method(&self) -> Method {
        Method::GaussJordan
    }

    fn solve(&self, system: &Matrix, trace: bool) -> SolverResult {
        let mut cx = Context::new(self.method(), system, trace);
        let flow = self.run(&mut cx);
        cx.finish(flow)
    }
}
