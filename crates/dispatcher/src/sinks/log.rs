//! LogSink - logs table summary via tracing

use contracts::{ContractError, NumericTable, TableSink};
use tracing::{info, trace};

/// Sink that logs table summaries for debugging
pub struct LogSink {
    name: String,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TableSink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, table: &NumericTable, labels: &[String]) -> Result<(), ContractError> {
        info!(
            sink = %self.name,
            rows = table.rows(),
            cols = table.cols(),
            kind = %table.kind(),
            labels = ?labels,
            "merged table received"
        );
        for (i, row) in table.rows_iter().enumerate() {
            trace!(sink = %self.name, row = i, values = ?row);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ContractError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_write() {
        let mut sink = LogSink::new("test_log");
        let result = sink.write(&NumericTable::empty(), &[]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_log_sink_name() {
        let sink = LogSink::new("my_logger");
        assert_eq!(sink.name(), "my_logger");
    }
}
