//! Inverse-matrix method: `x = A^-1 b`.

use crate::error::{CoreError, Result};
use crate::linalg::inverse::inverse_traced;
use crate::linalg::{determinant, is_near_zero, multiply};
use crate::matrix::Matrix;

use super::{Context, Flow, Method, Solver, SolverResult};

/// Computes `det(A)` first and refuses to invert when it is near zero, then
/// builds `A^-1` by Gauss-Jordan elimination and multiplies it by `b`.
///
/// The determinant is reported on the result whenever it was computed,
/// including when the solve fails because of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseMatrix;

impl InverseMatrix {
    fn run(&self, cx: &mut Context<'_>) -> Result<Flow> {
        cx.validate()?;
        let a = cx.system().coefficients()?;
        let b = cx.system().rhs()?;

        let det = determinant(&a)?;
        cx.set_determinant(det);
        if is_near_zero(det) {
            // classified for the trace only; a singular A is an error here
            cx.classify()?;
            return Err(CoreError::SingularMatrix);
        }

        let c = cx.classify()?;
        if !c.status.is_unique() {
            return Ok(Flow::Stopped(c.status));
        }

        let inv = inverse_traced(&a, cx.trace_mut())?;
        Ok(Flow::Solved(multiply(&inv, &b)?))
    }
}

impl Solver for InverseMatrix {
    fn method(&self) -> Method {
        Method::InverseMatrix
    }

    fn solve(&self, system: &Matrix, trace: bool) -> SolverResult {
        let mut cx = Context::new(self.method(), system, trace);
        let flow = self.run(&mut cx);
        cx.finish(flow)
    }
}
