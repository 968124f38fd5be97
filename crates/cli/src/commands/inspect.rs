//! `inspect` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use ingestion::IngestOptions;
use sync_engine::IntervalStats;

use crate::cli::InspectArgs;
use crate::error::CliError;

/// Stream report for JSON output
#[derive(Serialize)]
struct StreamReport {
    path: String,
    header_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<String>>,
    rows: usize,
    cols: usize,
    numeric_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_hz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intervals: Option<IntervalStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_error: Option<String>,
}

/// Execute the `inspect` command
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    info!(path = %args.path.display(), "Inspecting stream");

    let options = IngestOptions::new(args.sep)
        .with_float_kind(args.numeric_type)
        .with_header(args.header);
    let ingested = ingestion::ingest_path(&args.path, &options);

    if ingested.is_empty() {
        let cause = ingested
            .failure
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no data rows".to_string());
        return Err(CliError::empty_stream(args.path.display().to_string(), cause).into());
    }

    let report = build_report(args, ingested);

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize stream report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(args: &InspectArgs, ingested: ingestion::Ingested) -> StreamReport {
    let header_lines = ingested.header.line_count;
    let (table, labels) = ingested.into_parts();

    // Frequency is diagnostic here; a failure is reported, not fatal.
    let (frequency_hz, intervals, frequency_error) =
        match sync_engine::estimate_frequency(&table, args.timestamp_column, args.unit) {
            Ok(hz) => (
                Some(hz),
                sync_engine::interval_stats(&table, args.timestamp_column, args.unit).ok(),
                None,
            ),
            Err(e) => {
                warn!(error = %e, "Frequency estimation failed");
                (None, None, Some(e.to_string()))
            }
        };

    StreamReport {
        path: args.path.display().to_string(),
        header_lines,
        labels,
        rows: table.rows(),
        cols: table.cols(),
        numeric_type: table.kind().to_string(),
        frequency_hz,
        intervals,
        frequency_error,
    }
}

fn print_report(report: &StreamReport) {
    println!("\n=== Stream: {} ===\n", report.path);
    println!("  Header lines: {}", report.header_lines);
    if let Some(ref labels) = report.labels {
        println!("  Labels: {}", labels.join(", "));
    }
    println!("  Shape: {} x {}", report.rows, report.cols);
    println!("  Numeric type: {}", report.numeric_type);

    match (report.frequency_hz, &report.frequency_error) {
        (Some(hz), _) => println!("  Frequency: {} Hz", hz),
        (None, Some(error)) => println!("  Frequency: unavailable ({})", error),
        (None, None) => {}
    }

    if let Some(ref iv) = report.intervals {
        println!("\n  Intervals ({} deltas)", iv.count);
        println!("    ├─ min:  {:.9} s", iv.min_s);
        println!("    ├─ max:  {:.9} s", iv.max_s);
        println!("    ├─ mean: {:.9} s", iv.mean_s);
        println!("    └─ std:  {:.9} s", iv.std_dev_s);
    }
    println!();
}
