//! Dispatcher - fan-out of the merged table to sinks

use tracing::{error, info, instrument};

use contracts::{NumericTable, SinkConfig, SinkType, TableSink};

use crate::error::DispatcherError;
use crate::sinks::{FileSink, LogSink};

/// Outcome of one dispatch
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// Sinks that wrote and flushed
    pub succeeded: Vec<String>,
    /// Sinks that failed, with the error message
    pub failed: Vec<(String, String)>,
}

impl DispatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Create a sink from configuration
#[instrument(
    name = "dispatcher_create_sink",
    skip(config),
    fields(sink = %config.name, sink_type = ?config.sink_type)
)]
pub fn create_sink(config: &SinkConfig) -> Result<Box<dyn TableSink>, DispatcherError> {
    match config.sink_type {
        SinkType::Log => Ok(Box::new(LogSink::new(&config.name))),
        SinkType::File => Ok(Box::new(FileSink::from_params(
            &config.name,
            &config.params,
        )?)),
    }
}

/// Create a dispatcher with one sink per configuration entry
pub fn create_dispatcher(configs: &[SinkConfig]) -> Result<Dispatcher, DispatcherError> {
    let sinks = configs
        .iter()
        .map(create_sink)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dispatcher::with_sinks(sinks))
}

/// Writes one table to every sink in order
#[derive(Default)]
pub struct Dispatcher {
    sinks: Vec<Box<dyn TableSink>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher with custom sinks (for testing)
    pub fn with_sinks(sinks: Vec<Box<dyn TableSink>>) -> Self {
        Self { sinks }
    }

    pub fn add_sink(&mut self, sink: Box<dyn TableSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Write and flush `table` on every sink.
    ///
    /// A failing sink is logged and reported; the remaining sinks still run.
    #[instrument(name = "dispatcher_dispatch", skip_all, fields(sinks = self.sinks.len()))]
    pub fn dispatch(&mut self, table: &NumericTable, labels: &[String]) -> DispatchReport {
        let mut report = DispatchReport::default();

        for sink in &mut self.sinks {
            let name = sink.name().to_string();
            let result = sink.write(table, labels).and_then(|_| sink.flush());

            observability::metrics::record_sink_write(&name, result.is_ok());
            match result {
                Ok(()) => report.succeeded.push(name),
                Err(e) => {
                    error!(sink = %name, error = %e, "sink failed");
                    report.failed.push((name, e.to_string()));
                }
            }
        }

        info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "dispatch complete"
        );
        report
    }
}
