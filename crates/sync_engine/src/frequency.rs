//! Sampling frequency estimation from a timestamp column.

use contracts::{NumericTable, TimeUnit};
use observability::RunningStats;
use serde::Serialize;

use crate::error::{Result, SyncError};

/// Average sampling frequency in Hz.
///
/// Reciprocal of the mean consecutive timestamp difference, after scaling
/// the mean to seconds. Timestamps are assumed non-decreasing and are not
/// checked.
pub fn estimate_frequency(table: &NumericTable, column: usize, unit: TimeUnit) -> Result<f64> {
    let intervals = intervals(table, column)?;
    let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
    let mean_s = mean * unit.scale_to_seconds();

    if mean_s == 0.0 || !mean_s.is_finite() {
        return Err(SyncError::DegenerateFrequency {
            mean_interval: mean_s,
        });
    }

    Ok(1.0 / mean_s)
}

/// Interval jitter statistics, in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalStats {
    pub count: u64,
    pub min_s: f64,
    pub max_s: f64,
    pub mean_s: f64,
    pub std_dev_s: f64,
}

/// Statistics of consecutive timestamp differences.
///
/// Fails like `estimate_frequency` on missing columns or fewer than two
/// rows, but accepts a zero mean.
pub fn interval_stats(table: &NumericTable, column: usize, unit: TimeUnit) -> Result<IntervalStats> {
    let scale = unit.scale_to_seconds();
    let stats: RunningStats = intervals(table, column)?
        .into_iter()
        .map(|dt| dt * scale)
        .collect();

    Ok(IntervalStats {
        count: stats.count(),
        min_s: stats.min(),
        max_s: stats.max(),
        mean_s: stats.mean(),
        std_dev_s: stats.std_dev(),
    })
}

/// Consecutive differences of one column, raw units.
fn intervals(table: &NumericTable, column: usize) -> Result<Vec<f64>> {
    if table.cols() == 0 {
        return Err(SyncError::InsufficientData { rows: table.rows() });
    }

    let timestamps = table.column(column).ok_or(SyncError::ColumnOutOfRange {
        column,
        cols: table.cols(),
    })?;

    if timestamps.len() < 2 {
        return Err(SyncError::InsufficientData {
            rows: timestamps.len(),
        });
    }

    Ok(timestamps.windows(2).map(|w| w[1] - w[0]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::FloatKind;

    fn timestamps(values: &[f64]) -> NumericTable {
        let rows: Vec<[f64; 2]> = values.iter().map(|&t| [t, 0.0]).collect();
        NumericTable::from_rows(&rows, FloatKind::F64).unwrap()
    }

    #[test]
    fn test_unit_seconds() {
        let hz = estimate_frequency(&timestamps(&[0.0, 1.0, 2.0, 3.0]), 0, TimeUnit::S).unwrap();
        assert!((hz - 1.0).abs() < 1e-12, "got {hz}");
    }

    #[test]
    fn test_unit_milliseconds() {
        let hz =
            estimate_frequency(&timestamps(&[0.0, 500.0, 1000.0]), 0, TimeUnit::Ms).unwrap();
        assert!((hz - 2.0).abs() < 1e-9, "got {hz}");
    }

    #[test]
    fn test_unit_micro_and_nano() {
        let us = estimate_frequency(&timestamps(&[0.0, 5000.0, 10000.0]), 0, TimeUnit::Us).unwrap();
        assert!((us - 200.0).abs() < 1e-6, "got {us}");
        let ns = estimate_frequency(&timestamps(&[0.0, 1e7, 2e7]), 0, TimeUnit::Ns).unwrap();
        assert!((ns - 100.0).abs() < 1e-6, "got {ns}");
    }

    #[test]
    fn test_irregular_intervals_use_mean() {
        // intervals 0.1, 0.3 -> mean 0.2 -> 5 Hz
        let hz = estimate_frequency(&timestamps(&[0.0, 0.1, 0.4]), 0, TimeUnit::S).unwrap();
        assert!((hz - 5.0).abs() < 1e-9, "got {hz}");
    }

    #[test]
    fn test_other_column() {
        let table =
            NumericTable::from_rows(&[[9.0, 0.0], [9.0, 0.25], [9.0, 0.5]], FloatKind::F64)
                .unwrap();
        let hz = estimate_frequency(&table, 1, TimeUnit::S).unwrap();
        assert!((hz - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_row_is_insufficient() {
        let err = estimate_frequency(&timestamps(&[1.0]), 0, TimeUnit::S).unwrap_err();
        assert_eq!(err, SyncError::InsufficientData { rows: 1 });
    }

    #[test]
    fn test_empty_table_is_insufficient() {
        let err = estimate_frequency(&NumericTable::empty(), 0, TimeUnit::S).unwrap_err();
        assert_eq!(err, SyncError::InsufficientData { rows: 0 });
    }

    #[test]
    fn test_zero_mean_is_degenerate() {
        let err = estimate_frequency(&timestamps(&[2.0, 2.0, 2.0]), 0, TimeUnit::S).unwrap_err();
        assert!(matches!(err, SyncError::DegenerateFrequency { .. }));
    }

    #[test]
    fn test_nan_timestamp_is_degenerate() {
        let err =
            estimate_frequency(&timestamps(&[0.0, f64::NAN, 2.0]), 0, TimeUnit::S).unwrap_err();
        assert!(matches!(err, SyncError::DegenerateFrequency { .. }));
    }

    #[test]
    fn test_column_out_of_range() {
        let err = estimate_frequency(&timestamps(&[0.0, 1.0]), 5, TimeUnit::S).unwrap_err();
        assert_eq!(err, SyncError::ColumnOutOfRange { column: 5, cols: 2 });
    }

    #[test]
    fn test_interval_stats() {
        let stats = interval_stats(&timestamps(&[0.0, 100.0, 400.0]), 0, TimeUnit::Ms).unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.min_s - 0.1).abs() < 1e-12);
        assert!((stats.max_s - 0.3).abs() < 1e-12);
        assert!((stats.mean_s - 0.2).abs() < 1e-12);
        assert!(stats.std_dev_s > 0.0);
    }

    #[test]
    fn test_interval_stats_accepts_zero_mean() {
        let stats = interval_stats(&timestamps(&[1.0, 1.0]), 0, TimeUnit::S).unwrap();
        assert_eq!(stats.mean_s, 0.0);
    }
}
