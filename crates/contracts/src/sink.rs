//! TableSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for Sinks.

use crate::{ContractError, NumericTable};

/// Data output trait
///
/// All sink implementations must implement this trait.
pub trait TableSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write the merged table with one label per column
    ///
    /// # Errors
    /// Returns write error (should include context)
    fn write(&mut self, table: &NumericTable, labels: &[String]) -> Result<(), ContractError>;

    /// Flush buffer (if any)
    fn flush(&mut self) -> Result<(), ContractError>;
}
