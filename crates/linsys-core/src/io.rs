//! Plain-text exchange format for augmented systems.
//!
//! ```text
//! 2
//! 2	1	3
//! 1	3	5
//! ```
//!
//! The first line holds the number of unknowns `n`; each of the next `n`
//! lines holds the `n + 1` entries of one equation, tab-separated, with `.`
//! as the decimal separator regardless of locale. Reading accepts any
//! whitespace between cells, `\r\n` line endings and blank lines around the
//! content. Only strings are handled here; opening files is up to the caller.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Read an augmented system from its text form.
///
/// ```
/// # use linsys_core::io::parse_augmented;
/// let ab = parse_augmented("2\n2\t1\t3\n1\t3\t5\n").unwrap();
/// assert_eq!(ab.shape(), (2, 3));
/// assert_eq!(ab.row(1), &[1.0, 3.0, 5.0]);
/// ```
pub fn parse_augmented(text: &str) -> Result<Matrix> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((size_line, size)) = lines.next() else {
        return Err(parse_error(1, "missing size line"));
    };
    let n: usize = size
        .parse()
        .map_err(|_| parse_error(size_line, format!("expected the number of unknowns, got {size:?}")))?;
    if n == 0 {
        return Err(parse_error(size_line, "number of unknowns must be at least 1"));
    }

    let cells = n
        .checked_add(1)
        .and_then(|cols| n.checked_mul(cols))
        .ok_or_else(|| parse_error(size_line, format!("{n} unknowns is too many")))?;
    // every cell takes at least one byte of input
    let mut data = Vec::with_capacity(cells.min(text.len()));
    let mut last_line = size_line;
    for row in 0..n {
        let Some((line_no, line)) = lines.next() else {
            return Err(parse_error(
                last_line + 1,
                format!("expected {n} equations, found {row}"),
            ));
        };
        last_line = line_no;

        let start = data.len();
        for cell in line.split_whitespace() {
            let value: f64 = cell
                .parse()
                .map_err(|_| parse_error(line_no, format!("{cell:?} is not a number")))?;
            if !value.is_finite() {
                return Err(parse_error(line_no, format!("{cell:?} is not a finite number")));
            }
            data.push(value);
        }
        let found = data.len() - start;
        if found != n + 1 {
            return Err(parse_error(
                line_no,
                format!("expected {} values, found {found}", n + 1),
            ));
        }
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(parse_error(line_no, "unexpected content after the last equation"));
    }

    Matrix::from_vec(data, n, n + 1)
}

/// Write an augmented system in its text form.
///
/// Values use the shortest representation that reads back to the same
/// `f64`, so [`parse_augmented`] restores the matrix exactly.
pub fn format_augmented(system: &Matrix) -> Result<String> {
    system.check_augmented()?;
    let mut out = system.rows().to_string();
    out.push('\n');
    for row in system.row_iter() {
        let cells: Vec<String> = row.iter().map(f64::to_string).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    Ok(out)
}

fn parse_error(line: usize, reason: impl Into<String>) -> CoreError {
    CoreError::Parse {
        line,
        reason: reason.into(),
    }
}
