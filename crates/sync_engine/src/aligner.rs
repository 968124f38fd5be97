//! Row alignment of two tables recorded at different rates.
//!
//! No timestamp interpolation: every right-side output row is an exact
//! sample of `right`, repeated `round(n1 / n2)` times, then padded with the
//! last row or truncated to `n1` rows.

use contracts::NumericTable;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SyncError};

/// What the aligner did to the right table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub left_rows: usize,
    pub right_rows: usize,
    /// Times each right row was repeated
    pub ratio: usize,
    /// Copies of the last repeated row appended
    pub padded_rows: usize,
    /// Repeated rows cut from the end
    pub truncated_rows: usize,
}

/// Merged table plus its report
#[derive(Debug, Clone)]
pub struct Alignment {
    pub table: NumericTable,
    pub report: AlignmentReport,
}

/// Merge `right` into `left`, returning a table with `left.rows()` rows
/// and `left.cols() + right.cols()` columns.
pub fn merge(left: NumericTable, right: NumericTable) -> Result<NumericTable> {
    align(left, right).map(|a| a.table)
}

/// Same as [`merge`], also reporting the repetition applied.
///
/// Requires `left.rows() > right.rows() > 0`.
pub fn align(left: NumericTable, right: NumericTable) -> Result<Alignment> {
    let n1 = left.rows();
    let n2 = right.rows();

    if n1 == 0 {
        return Err(SyncError::EmptyInput { side: "left" });
    }
    if n2 == 0 {
        return Err(SyncError::EmptyInput { side: "right" });
    }
    if n1 <= n2 {
        return Err(SyncError::UnsupportedShape {
            left_rows: n1,
            right_rows: n2,
        });
    }

    let ratio = repetition_ratio(n1, n2);
    if ratio == 0 {
        return Err(SyncError::InvalidRatio {
            left_rows: n1,
            right_rows: n2,
        });
    }

    let cols = right.cols();
    let mut repeated = repeat_rows(&right, ratio);
    let repeated_rows = n2 * ratio;

    let mut padded_rows = 0;
    let mut truncated_rows = 0;
    if repeated_rows < n1 {
        padded_rows = n1 - repeated_rows;
        let last = repeated[(repeated_rows - 1) * cols..].to_vec();
        for _ in 0..padded_rows {
            repeated.extend_from_slice(&last);
        }
    } else if repeated_rows > n1 {
        truncated_rows = repeated_rows - n1;
        repeated.truncate(n1 * cols);
    }

    let resampled = NumericTable::new(n1, cols, right.kind(), repeated);
    let table = left
        .hstack(&resampled)
        .map_err(|_| SyncError::UnsupportedShape {
            left_rows: n1,
            right_rows: n2,
        })?;

    let report = AlignmentReport {
        left_rows: n1,
        right_rows: n2,
        ratio,
        padded_rows,
        truncated_rows,
    };

    debug!(
        left_rows = n1,
        right_rows = n2,
        ratio,
        padded_rows,
        truncated_rows,
        cols = table.cols(),
        "tables aligned"
    );
    observability::metrics::record_alignment(ratio, padded_rows, truncated_rows);

    Ok(Alignment { table, report })
}

/// `round(n1 / n2)`, ties to even
#[inline]
pub fn repetition_ratio(n1: usize, n2: usize) -> usize {
    (n1 as f64 / n2 as f64).round_ties_even() as usize
}

/// Each row repeated `times` times in place, flat row-major.
fn repeat_rows(table: &NumericTable, times: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(table.rows() * times * table.cols());
    for row in table.rows_iter() {
        for _ in 0..times {
            data.extend_from_slice(row);
        }
    }
    data
}
