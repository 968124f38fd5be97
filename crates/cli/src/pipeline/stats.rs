//! Merge run statistics.

use std::time::Duration;

use serde::{Serialize, Serializer};
use sync_engine::AlignmentReport;

/// What one input stream looked like after ingestion
#[derive(Debug, Clone, Serialize)]
pub struct StreamStats {
    pub name: String,
    pub path: String,
    pub rows: usize,
    pub cols: usize,
    pub header_lines: usize,
    pub frequency_hz: f64,
}

/// Statistics from a merge run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStats {
    /// Left stream, then right stream
    pub streams: Vec<StreamStats>,

    /// Shape bookkeeping of the merge
    pub alignment: AlignmentReport,

    /// Columns of the merged table
    pub merged_cols: usize,

    /// Header labels handed to the sinks
    pub labels: Vec<String>,

    /// Sinks that wrote the merged table
    pub sinks_succeeded: Vec<String>,

    /// Sinks that failed, with their error message
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sinks_failed: Vec<(String, String)>,

    /// Sinks were not touched
    pub dry_run: bool,

    /// Total duration of the run
    #[serde(rename = "duration_secs", serialize_with = "as_secs")]
    pub duration: Duration,
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl PipelineStats {
    /// Rows in the merged table
    pub fn merged_rows(&self) -> usize {
        self.alignment.left_rows
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        println!("\n=== Merge Summary ===\n");

        println!("Streams");
        for stream in &self.streams {
            println!(
                "   ├─ {}: {} rows x {} cols, {} header line(s), {:.3} Hz ({})",
                stream.name,
                stream.rows,
                stream.cols,
                stream.header_lines,
                stream.frequency_hz,
                stream.path
            );
        }

        let a = &self.alignment;
        println!("\nAlignment");
        println!("   ├─ Ratio: {}", a.ratio);
        println!("   ├─ Padded rows: {}", a.padded_rows);
        println!("   ├─ Truncated rows: {}", a.truncated_rows);
        println!(
            "   └─ Merged shape: {} x {}",
            self.merged_rows(),
            self.merged_cols
        );

        println!("\nOutput");
        if self.dry_run {
            println!("   └─ Dry run, no sinks written");
        } else {
            println!("   ├─ Sinks written: {}", self.sinks_succeeded.join(", "));
            for (name, error) in &self.sinks_failed {
                println!("   ├─ Sink '{}' failed: {}", name, error);
            }
            println!("   └─ Duration: {:.3}s", self.duration.as_secs_f64());
        }

        println!();
    }
}
