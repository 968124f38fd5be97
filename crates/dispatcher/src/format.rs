//! Delimited text formatting
//!
//! One header line (labels joined by the separator, no comment marker),
//! then one line per row with fixed-point values.

use std::io::{self, Write};

use contracts::NumericTable;

/// Digits after the decimal point
pub const DEFAULT_PRECISION: usize = 6;

/// Write `table` as delimited text.
///
/// The header line is omitted when `labels` is empty.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &NumericTable,
    labels: &[String],
    separator: char,
    precision: usize,
) -> io::Result<()> {
    let mut sep_buf = [0u8; 4];
    let sep = separator.encode_utf8(&mut sep_buf).as_bytes();

    if !labels.is_empty() {
        for (j, label) in labels.iter().enumerate() {
            if j > 0 {
                out.write_all(sep)?;
            }
            out.write_all(label.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }

    for row in table.rows_iter() {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                out.write_all(sep)?;
            }
            write!(out, "{value:.precision$}")?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Format `table` into a string, see [`write_table`].
pub fn format_table(
    table: &NumericTable,
    labels: &[String],
    separator: char,
    precision: usize,
) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_table(&mut buf, table, labels, separator, precision);
    String::from_utf8_lossy(&buf).into_owned()
}
