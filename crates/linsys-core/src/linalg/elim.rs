//! The pivot / swap / normalize / eliminate step shared by the elimination
//! solvers and [`inverse`](super::inverse).

use log::trace;

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::trace::{Stage, Step, Trace};

use super::{find_pivot_row, is_near_zero};

/// Which rows get column `k` eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sweep {
    /// Rows `k + 1..`, leaving an upper-triangular matrix.
    Below,
    /// Every row except `k`, leaving a reduced (diagonal) matrix.
    All,
}

/// Process pivot column `k` of `work`.
///
/// Selects the largest-magnitude pivot at or below row `k`, swaps it into
/// place, divides row `k` by it and eliminates column `k` from the rows
/// selected by `sweep`. Fails with [`CoreError::ZeroPivot`] if the best
/// candidate is near zero; `work` is left as it was at that moment.
pub(crate) fn reduce_column(work: &mut Matrix, k: usize, sweep: Sweep, tr: &mut Trace) -> Result<()> {
    let p = find_pivot_row(work, k, k);
    let pivot = work[(p, k)];
    tr.record(|| Step::PivotSelected {
        column: k,
        row: p,
        value: pivot,
    });
    if is_near_zero(pivot) {
        trace!("column {k}: best pivot {pivot:e} is below tolerance");
        return Err(CoreError::ZeroPivot { column: k });
    }
    trace!("column {k}: pivot {pivot} from row {p}");

    if p != k {
        work.swap_rows(p, k);
        tr.record(|| Step::RowsSwapped { first: k, second: p });
    }

    for v in &mut work.row_mut(k)[k..] {
        *v /= pivot;
    }
    // exact, rather than pivot / pivot
    work[(k, k)] = 1.0;
    tr.record(|| Step::RowNormalized { row: k, pivot });

    let rows = work.rows();
    let targets = match sweep {
        Sweep::Below => (k + 1)..rows,
        Sweep::All => 0..rows,
    };
    for i in targets {
        if i == k {
            continue;
        }
        let factor = work[(i, k)];
        if factor == 0.0 {
            continue;
        }
        work.sub_scaled_row(i, k, factor, k);
        work[(i, k)] = 0.0;
        tr.record(|| Step::RowEliminated {
            target: i,
            pivot_row: k,
            column: k,
            factor,
        });
    }

    tr.record(|| Step::Snapshot {
        stage: Stage::AfterColumn(k),
        matrix: work.clone(),
    });
    Ok(())
}
