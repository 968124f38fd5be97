//! Sync engine error types

use thiserror::Error;

/// Frequency estimation and alignment errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyncError {
    // ===== Frequency Estimation =====
    /// Fewer than two timestamps: no interval to average
    #[error("insufficient data: {rows} row(s), need at least 2 timestamps")]
    InsufficientData { rows: usize },

    /// Mean interval is zero (or not finite), frequency undefined
    #[error("degenerate frequency: mean interval is {mean_interval}")]
    DegenerateFrequency { mean_interval: f64 },

    /// Timestamp column does not exist
    #[error("timestamp column {column} out of range for table with {cols} column(s)")]
    ColumnOutOfRange { column: usize, cols: usize },

    // ===== Alignment =====
    /// One of the inputs has no rows
    #[error("empty input: {side} table has no rows")]
    EmptyInput { side: &'static str },

    /// Left must be strictly longer than right
    #[error(
        "unsupported shape: left has {left_rows} rows, right has {right_rows}; left must be longer"
    )]
    UnsupportedShape { left_rows: usize, right_rows: usize },

    /// Rounded repetition ratio is zero
    #[error("invalid ratio: round({left_rows} / {right_rows}) is 0")]
    InvalidRatio { left_rows: usize, right_rows: usize },
}

/// Sync engine Result alias
pub type Result<T> = std::result::Result<T, SyncError>;
