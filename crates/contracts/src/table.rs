//! NumericTable - Ingestion output, Aligner input/output
//!
//! Dense row-major table of floating-point values.

use serde::{Deserialize, Serialize};

use crate::{ContractError, FloatKind};

/// Row-major numeric table
///
/// Column order is the token order of the source lines. A table with zero
/// rows is the "no data" state produced by fail-soft ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTable {
    rows: usize,
    cols: usize,
    kind: FloatKind,
    data: Vec<f64>,
}

impl NumericTable {
    /// Create a table from a flat row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, kind: FloatKind, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "buffer length must equal rows * cols"
        );
        Self {
            rows,
            cols,
            kind,
            data,
        }
    }

    /// Shape (0, 0), the fail-soft result
    pub fn empty() -> Self {
        Self::with_kind(FloatKind::F64)
    }

    /// Empty table of a given width kind
    pub fn with_kind(kind: FloatKind) -> Self {
        Self {
            rows: 0,
            cols: 0,
            kind,
            data: Vec::new(),
        }
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows<R>(rows: &[R], kind: FloatKind) -> Result<Self, ContractError>
    where
        R: AsRef<[f64]>,
    {
        let Some(first) = rows.first() else {
            return Ok(Self::with_kind(kind));
        };
        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ContractError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            kind,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn kind(&self) -> FloatKind {
        self.kind
    }

    /// True when the table holds no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Borrow one row
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate rows in order
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Copy out one column, or `None` if out of range
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        if j >= self.cols {
            return None;
        }
        Some(self.rows_iter().map(|r| r[j]).collect())
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Append a row. The first row pushed into a 0-column table fixes the width.
    pub fn push_row(&mut self, row: &[f64]) -> Result<(), ContractError> {
        if self.rows == 0 && self.cols == 0 {
            self.cols = row.len();
        }
        if row.len() != self.cols {
            return Err(ContractError::RaggedRows {
                row: self.rows,
                expected: self.cols,
                found: row.len(),
            });
        }
        self.data.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    /// Concatenate columns: `self`'s columns first, then `other`'s.
    pub fn hstack(self, other: &NumericTable) -> Result<NumericTable, ContractError> {
        if self.rows != other.rows {
            return Err(ContractError::RowCountMismatch {
                left: self.rows,
                right: other.rows,
            });
        }
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for (l, r) in self.rows_iter().zip(other.rows_iter()) {
            data.extend_from_slice(l);
            data.extend_from_slice(r);
        }
        Ok(NumericTable {
            rows: self.rows,
            cols,
            kind: self.kind.widest(other.kind),
            data,
        })
    }

    /// Flat row-major view
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Default for NumericTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Leading non-numeric lines of a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    /// Number of header lines before the numeric region
    pub line_count: usize,

    /// Labels parsed from line 0 (only when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}
