//! Ingestion entry points.
//!
//! The strict functions return `Result`; `ingest_path` is the fail-soft
//! boundary that folds every `IngestionError` into an empty table.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use contracts::{HeaderBlock, NumericTable, StreamConfig};
use tracing::{debug, instrument, warn};

use crate::config::IngestOptions;
use crate::error::{IngestionError, Result};
use crate::header::{detect_header_lines, extract_labels};
use crate::parser::parse_data;

/// Result of one ingestion call
#[derive(Debug, Default)]
pub struct Ingested {
    /// Parsed numeric region
    pub table: NumericTable,

    /// Header line count and optional labels
    pub header: HeaderBlock,

    /// Cause of a fail-soft empty result (only set by `ingest_path`)
    pub failure: Option<IngestionError>,
}

impl Ingested {
    /// Fail-soft result carrying its cause
    pub fn failed(cause: IngestionError) -> Self {
        Self {
            table: NumericTable::empty(),
            header: HeaderBlock::default(),
            failure: Some(cause),
        }
    }

    /// True when there are no data rows, whatever the reason
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Split into the table and the optional label list
    pub fn into_parts(self) -> (NumericTable, Option<Vec<String>>) {
        (self.table, self.header.labels)
    }
}

/// Ingest text already in memory.
pub fn ingest_str(text: &str, options: &IngestOptions) -> Result<Ingested> {
    let lines: Vec<&str> = text.lines().collect();
    ingest_lines(&lines, options)
}

/// Ingest from a reader, reading it fully before parsing.
pub fn ingest_reader<R: BufRead>(reader: R, options: &IngestOptions) -> Result<Ingested> {
    let owned = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| IngestionError::Io {
            path: "<stream>".to_string(),
            source,
        })?;
    let lines: Vec<&str> = owned.iter().map(String::as_str).collect();
    ingest_lines(&lines, options)
}

/// Ingest a file, propagating every failure.
#[instrument(name = "ingest_file", skip(options), fields(path = %path.display()))]
pub fn try_ingest_path(path: &Path, options: &IngestOptions) -> Result<Ingested> {
    let io_err = |source: std::io::Error| IngestionError::Io {
        path: path.display().to_string(),
        source,
    };

    // handle dropped on return, success or not
    let file = File::open(path).map_err(io_err)?;
    let owned = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(io_err)?;

    let lines: Vec<&str> = owned.iter().map(String::as_str).collect();
    ingest_lines(&lines, options)
}

/// Ingest a file, never failing.
///
/// Any I/O or parse error yields an empty (0, 0) table; the cause is logged
/// and kept in `Ingested::failure`.
pub fn ingest_path(path: &Path, options: &IngestOptions) -> Ingested {
    match try_ingest_path(path, options) {
        Ok(ingested) => ingested,
        Err(e) => {
            warn!(
                path = %path.display(),
                kind = e.kind(),
                error = %e,
                "ingestion failed, continuing with empty table"
            );
            observability::metrics::record_ingest_failure(e.kind());
            Ingested::failed(e)
        }
    }
}

/// Ingest a configured stream, fail-soft.
///
/// Row and header counters are labelled with the stream name.
pub fn ingest_stream(stream: &StreamConfig) -> Ingested {
    let ingested = ingest_path(&stream.path, &IngestOptions::from(stream));
    if ingested.failure.is_none() {
        observability::metrics::record_ingestion(
            &stream.name,
            ingested.table.rows(),
            ingested.header.line_count,
        );
    }
    ingested
}

fn ingest_lines(lines: &[&str], options: &IngestOptions) -> Result<Ingested> {
    let header_lines = detect_header_lines(lines.iter().copied(), options.separator);

    let labels = if options.want_header {
        let first = lines.first().copied().unwrap_or("");
        Some(extract_labels(
            first,
            options.separator,
            options.comment_marker,
        ))
    } else {
        None
    };

    let data = lines
        .iter()
        .copied()
        .enumerate()
        .skip(header_lines);
    let table = parse_data(data, options.separator, options.float_kind)?;

    debug!(
        header_lines,
        rows = table.rows(),
        cols = table.cols(),
        "table ingested"
    );

    Ok(Ingested {
        table,
        header: HeaderBlock {
            line_count: header_lines,
            labels,
        },
        failure: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::FloatKind;
    use std::io::Write;

    const IMU_TEXT: &str = "\
# timestamp ax ay az
recorded by imu0
0.000 0.1 0.2 9.8
0.005 0.1 0.2 9.8
0.010 0.2 0.1 9.7
";

    #[test]
    fn test_ingest_str_with_header() {
        let options = IngestOptions::new(' ').with_header(true);
        let ingested = ingest_str(IMU_TEXT, &options).unwrap();
        assert_eq!(ingested.header.line_count, 2);
        assert_eq!(ingested.table.shape(), (3, 4));
        assert_eq!(
            ingested.header.labels.as_deref(),
            Some(&["timestamp", "ax", "ay", "az"].map(String::from)[..])
        );
        assert!(ingested.failure.is_none());
    }

    #[test]
    fn test_labels_absent_unless_requested() {
        let ingested = ingest_str(IMU_TEXT, &IngestOptions::new(' ')).unwrap();
        assert!(ingested.header.labels.is_none());
    }

    #[test]
    fn test_labels_always_from_line_zero() {
        let text = "free text line\n# a;b\n1;2\n";
        let options = IngestOptions::new(';').with_header(true);
        let ingested = ingest_str(text, &options).unwrap();
        assert_eq!(ingested.header.line_count, 2);
        assert_eq!(
            ingested.header.labels,
            Some(vec!["free text line".to_string()])
        );
    }

    #[test]
    fn test_no_header() {
        let ingested = ingest_str("1;2\n3;4\n", &IngestOptions::default()).unwrap();
        assert_eq!(ingested.header.line_count, 0);
        assert_eq!(ingested.table.shape(), (2, 2));
    }

    #[test]
    fn test_crlf_lines() {
        let ingested = ingest_str("t;x\r\n1;2\r\n3;4\r\n", &IngestOptions::default()).unwrap();
        assert_eq!(ingested.header.line_count, 1);
        assert_eq!(ingested.table.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_header_only_input() {
        let ingested = ingest_str("a;b\nc;d\n", &IngestOptions::default()).unwrap();
        assert_eq!(ingested.header.line_count, 2);
        assert!(ingested.is_empty());
    }

    #[test]
    fn test_non_numeric_after_header_is_parse_error() {
        let err = ingest_str("t;x\n1;2\n3;n/a\n", &IngestOptions::default()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_ingest_reader() {
        let cursor = std::io::Cursor::new("1 2\n3 4\n");
        let ingested = ingest_reader(cursor, &IngestOptions::new(' ')).unwrap();
        assert_eq!(ingested.table.shape(), (2, 2));
    }

    #[test]
    fn test_ingest_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{IMU_TEXT}").unwrap();
        let options = IngestOptions::new(' ').with_float_kind(FloatKind::F32);
        let ingested = ingest_path(file.path(), &options);
        assert!(ingested.failure.is_none());
        assert_eq!(ingested.table.shape(), (3, 4));
        assert_eq!(ingested.table.kind(), FloatKind::F32);
    }

    #[test]
    fn test_ingest_path_missing_file_is_fail_soft() {
        let dir = tempfile::tempdir().unwrap();
        let ingested = ingest_path(&dir.path().join("missing.txt"), &IngestOptions::default());
        assert_eq!(ingested.table.shape(), (0, 0));
        let cause = ingested.failure.expect("cause should be recorded");
        assert_eq!(cause.kind(), "io");
    }

    #[test]
    fn test_ingest_path_ragged_file_is_fail_soft() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1;2;3\n4;5\n").unwrap();
        let ingested = ingest_path(file.path(), &IngestOptions::default());
        assert!(ingested.is_empty());
        assert!(ingested.failure.as_ref().is_some_and(|e| e.is_parse()));
    }

    #[test]
    fn test_try_ingest_path_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let result = try_ingest_path(&dir.path().join("nope"), &IngestOptions::default());
        assert!(matches!(result, Err(IngestionError::Io { .. })));
    }

    /// Collects the `source` label of every registered metric
    #[derive(Default)]
    struct SourceLabels(std::sync::Mutex<Vec<String>>);

    impl SourceLabels {
        fn note(&self, key: &metrics::Key) {
            for label in key.labels().filter(|l| l.key() == "source") {
                self.0.lock().unwrap().push(label.value().to_string());
            }
        }
    }

    impl metrics::Recorder for SourceLabels {
        fn describe_counter(&self, _: metrics::KeyName, _: Option<metrics::Unit>, _: metrics::SharedString) {}
        fn describe_gauge(&self, _: metrics::KeyName, _: Option<metrics::Unit>, _: metrics::SharedString) {}
        fn describe_histogram(&self, _: metrics::KeyName, _: Option<metrics::Unit>, _: metrics::SharedString) {}

        fn register_counter(&self, key: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Counter {
            self.note(key);
            metrics::Counter::noop()
        }

        fn register_gauge(&self, key: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Gauge {
            self.note(key);
            metrics::Gauge::noop()
        }

        fn register_histogram(&self, key: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Histogram {
            self.note(key);
            metrics::Histogram::noop()
        }
    }

    #[test]
    fn test_ingest_stream_labels_metrics_by_stream_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{IMU_TEXT}").unwrap();
        let mut stream = StreamConfig::new("imu", file.path());
        stream.separator = ' ';

        let recorder = SourceLabels::default();
        let ingested = metrics::with_local_recorder(&recorder, || ingest_stream(&stream));
        assert_eq!(ingested.table.shape(), (3, 4));

        let sources = recorder.0.into_inner().unwrap();
        assert!(!sources.is_empty());
        assert!(sources.iter().all(|s| s == "imu"), "got: {sources:?}");
    }

    #[test]
    fn test_ingest_stream_failure_records_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let stream = StreamConfig::new("truth", dir.path().join("missing.txt"));

        let recorder = SourceLabels::default();
        let ingested = metrics::with_local_recorder(&recorder, || ingest_stream(&stream));
        assert!(ingested.failure.is_some());
        assert!(recorder.0.into_inner().unwrap().is_empty());
    }
}
