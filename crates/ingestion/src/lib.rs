//! # Ingestion
//!
//! Delimited text table ingestion.
//!
//! Responsibilities:
//! - Read a whole source eagerly into memory
//! - Detect the leading header block (lines that are not fully numeric)
//! - Optionally parse column labels from line 0
//! - Parse the data region into a `NumericTable`
//! - Fold I/O and parse failures into an empty table at the file boundary
//!
//! ## Usage Example
//!
//! ```no_run
//! use ingestion::{ingest_path, IngestOptions};
//! use std::path::Path;
//!
//! let options = IngestOptions::new(' ').with_header(true);
//! let imu = ingest_path(Path::new("data/imu.txt"), &options);
//! if imu.is_empty() {
//!     // no data: the cause, if any, is in `imu.failure`
//! }
//! ```

mod config;
mod error;
mod header;
mod ingestor;
mod parser;

// Re-exports
pub use config::IngestOptions;
pub use contracts::{FloatKind, HeaderBlock, NumericTable};
pub use error::{IngestionError, Result};
pub use header::{detect_header_lines, extract_labels, is_numeric_line};
pub use ingestor::{
    ingest_path, ingest_reader, ingest_str, ingest_stream, try_ingest_path, Ingested,
};
pub use parser::parse_data;
