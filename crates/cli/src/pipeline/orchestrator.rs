//! Pipeline orchestrator - ingest, estimate, align, dispatch.

use std::time::Instant;

use contracts::{MergeBlueprint, NumericTable, StreamConfig};
use tracing::{debug, info, instrument, warn};

use super::stats::{PipelineStats, StreamStats};
use crate::error::CliError;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Streams and output routing
    pub blueprint: MergeBlueprint,

    /// Stop before touching any sink
    pub dry_run: bool,
}

/// One stream after ingestion and frequency estimation
struct LoadedStream {
    table: NumericTable,
    labels: Vec<String>,
    stats: StreamStats,
}

/// Main pipeline orchestrator
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline to completion
    pub fn run(self) -> Result<PipelineStats, CliError> {
        let start_time = Instant::now();
        let blueprint = &self.config.blueprint;

        let left = load_stream(&blueprint.left)?;
        let right = load_stream(&blueprint.right)?;

        let mut labels = left.labels;
        labels.extend(right.labels);
        let streams = vec![left.stats, right.stats];

        let alignment = sync_engine::align(left.table, right.table).map_err(|e| {
            CliError::stage(
                "merge",
                format!("{}+{}", blueprint.left.name, blueprint.right.name),
                e,
            )
        })?;
        let merged = alignment.table;
        info!(
            rows = merged.rows(),
            cols = merged.cols(),
            ratio = alignment.report.ratio,
            "Streams merged"
        );

        let mut stats = PipelineStats {
            streams,
            alignment: alignment.report,
            merged_cols: merged.cols(),
            labels,
            sinks_succeeded: Vec::new(),
            sinks_failed: Vec::new(),
            dry_run: self.config.dry_run,
            duration: Default::default(),
        };

        if self.config.dry_run {
            info!("Dry run mode - skipping sinks");
        } else {
            let mut dispatcher = dispatcher::create_dispatcher(&blueprint.sinks)
                .map_err(|e| CliError::stage("sink setup", "sinks", e))?;
            if dispatcher.is_empty() {
                warn!("No sinks configured - merged table is dropped");
            }
            let report = dispatcher.dispatch(&merged, &stats.labels);
            stats.sinks_succeeded = report.succeeded;
            stats.sinks_failed = report.failed;
        }

        stats.duration = start_time.elapsed();
        Ok(stats)
    }
}

/// Ingest one stream and estimate its frequency.
///
/// A zero-row table aborts the run here, before any merge.
#[instrument(name = "pipeline_load_stream", skip_all, fields(stream = %stream.name))]
fn load_stream(stream: &StreamConfig) -> Result<LoadedStream, CliError> {
    let ingested = ingestion::ingest_stream(stream);
    if ingested.is_empty() {
        let cause = ingested
            .failure
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no data rows".to_string());
        return Err(CliError::empty_stream(&stream.name, cause));
    }

    let header_lines = ingested.header.line_count;
    let (table, ingested_labels) = ingested.into_parts();

    let frequency_hz =
        sync_engine::estimate_frequency(&table, stream.timestamp_column, stream.unit)
            .map_err(|e| CliError::stage("frequency estimation", &stream.name, e))?;
    observability::metrics::record_frequency(&stream.name, frequency_hz);

    let labels = resolve_labels(stream, ingested_labels, table.cols());
    debug!(labels = ?labels, "Labels resolved");

    let stats = StreamStats {
        name: stream.name.clone(),
        path: stream.path.display().to_string(),
        rows: table.rows(),
        cols: table.cols(),
        header_lines,
        frequency_hz,
    };

    Ok(LoadedStream {
        table,
        labels,
        stats,
    })
}

/// Pick output labels for one stream: configured, then ingested, then generated.
///
/// A candidate whose length does not match the column count is skipped.
pub fn resolve_labels(
    stream: &StreamConfig,
    ingested: Option<Vec<String>>,
    cols: usize,
) -> Vec<String> {
    let candidates = [
        ("configured", stream.labels.clone()),
        ("ingested", ingested.filter(|_| stream.want_header)),
    ];

    for (origin, labels) in candidates {
        let Some(labels) = labels else { continue };
        if labels.len() == cols {
            return labels;
        }
        warn!(
            stream = %stream.name,
            origin,
            labels = labels.len(),
            cols,
            "Label count does not match column count, ignoring"
        );
    }

    (0..cols).map(|i| format!("{}_{}", stream.name, i)).collect()
}
