//! Structured, ordered record of the arithmetic a solver performed.
//!
//! A [`Trace`] is append-only. Solvers write [`Step`] records into it while
//! they work; callers read it back from
//! [`SolverResult::trace`](crate::solver::SolverResult::trace) and render it
//! however they like. Row and column indices in steps are 0-based.
//!
//! Recording is lazy: [`Trace::record`] takes a closure, so a disabled trace
//! never builds snapshots or clones matrices.

use core::fmt;

use serde::Serialize;

use crate::classify::SolutionStatus;
use crate::matrix::Matrix;

/// When a [`Step::Snapshot`] was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Working copy before any row operation.
    Initial,
    /// After the given pivot column was fully processed.
    AfterColumn(usize),
}

/// One recorded step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    /// Ranks used by the solvability check and its outcome.
    Classified {
        rank_coefficients: usize,
        rank_augmented: usize,
        unknowns: usize,
        status: SolutionStatus,
    },
    /// Determinant of the coefficient matrix.
    Determinant { value: f64 },
    /// Row `row` holds the pivot for `column`.
    PivotSelected { column: usize, row: usize, value: f64 },
    RowsSwapped { first: usize, second: usize },
    /// Row `row` was divided by `pivot`.
    RowNormalized { row: usize, pivot: f64 },
    /// `row[target] -= factor * row[pivot_row]`, zeroing `column`.
    RowEliminated {
        target: usize,
        pivot_row: usize,
        column: usize,
        factor: f64,
    },
    /// Copy of the working matrix.
    Snapshot { stage: Stage, matrix: Matrix },
    /// The inverse of the coefficient matrix.
    Inverse { matrix: Matrix },
    /// Unknown `index` resolved by back substitution.
    BackSubstituted { index: usize, value: f64 },
    SolutionExtracted { solution: Vec<f64> },
    /// Residual of equation `row`: `|lhs - rhs|`.
    Residual {
        row: usize,
        lhs: f64,
        rhs: f64,
        error: f64,
    },
    /// Elimination stopped with this message.
    Failed { message: String },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::AfterColumn(c) => write!(f, "after column {c}"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified {
                rank_coefficients,
                rank_augmented,
                unknowns,
                status,
            } => write!(
                f,
                "rank(A) = {rank_coefficients}, rank(A|b) = {rank_augmented}, n = {unknowns}: {status}"
            ),
            Self::Determinant { value } => write!(f, "det(A) = {value}"),
            Self::PivotSelected { column, row, value } => {
                write!(f, "pivot for column {column}: row {row} ({value})")
            }
            Self::RowsSwapped { first, second } => write!(f, "swap rows {first} and {second}"),
            Self::RowNormalized { row, pivot } => write!(f, "row {row} /= {pivot}"),
            Self::RowEliminated {
                target,
                pivot_row,
                factor,
                ..
            } => write!(f, "row {target} -= {factor} * row {pivot_row}"),
            Self::Snapshot { stage, matrix } => write!(f, "{stage}:\n{matrix}"),
            Self::Inverse { matrix } => write!(f, "inverse:\n{matrix}"),
            Self::BackSubstituted { index, value } => write!(f, "x[{index}] = {value}"),
            Self::SolutionExtracted { solution } => write!(f, "solution: {solution:?}"),
            Self::Residual {
                row,
                lhs,
                rhs,
                error,
            } => write!(f, "equation {row}: |{lhs} - {rhs}| = {error}"),
            Self::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}

/// Ordered log of [`Step`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    #[serde(skip)]
    enabled: bool,
    steps: Vec<Step>,
}

impl Trace {
    /// A trace that keeps every recorded step.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            steps: Vec::new(),
        }
    }

    /// A trace that drops everything without evaluating it.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::enabled() } else { Self::disabled() }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append the step built by `step`, if recording.
    #[inline]
    pub fn record<F>(&mut self, step: F)
    where
        F: FnOnce() -> Step,
    {
        if self.enabled {
            self.steps.push(step());
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = core::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
