//! Data region parsing.

use contracts::{FloatKind, NumericTable};

use crate::error::{IngestionError, Result};
use crate::header::split_tokens;

/// Parse numbered data lines into a table.
///
/// Blank lines are skipped. The first non-blank line fixes the width; any
/// later line of a different width, or any token that does not parse at
/// `kind`, abandons the whole parse.
pub fn parse_data<'a, I>(lines: I, separator: char, kind: FloatKind) -> Result<NumericTable>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut table = NumericTable::with_kind(kind);
    let mut width: Option<usize> = None;
    let mut row: Vec<f64> = Vec::new();

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        row.clear();
        for (column, token) in split_tokens(line, separator).enumerate() {
            let value = kind
                .parse(token)
                .ok_or_else(|| IngestionError::NonNumeric {
                    line: line_no,
                    column,
                    token: token.to_string(),
                })?;
            row.push(value);
        }

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(IngestionError::InconsistentWidth {
                line: line_no,
                expected,
                found: row.len(),
            });
        }

        table
            .push_row(&row)
            .map_err(|_| IngestionError::InconsistentWidth {
                line: line_no,
                expected,
                found: row.len(),
            })?;
    }

    Ok(table)
}
