//! FileSink - writes the merged table as delimited text

use contracts::{ContractError, NumericTable, TableSink};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, error, instrument};

use crate::error::DispatcherError;
use crate::format::{write_table, DEFAULT_PRECISION};

/// Configuration for FileSink
#[derive(Debug, Clone)]
pub struct FileSinkConfig {
    /// Output file
    pub path: PathBuf,
    /// Field separator
    pub separator: char,
    /// Digits after the decimal point
    pub precision: usize,
}

impl FileSinkConfig {
    /// Config with the conventional `;` separator and 6 digits
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: ';',
            precision: DEFAULT_PRECISION,
        }
    }

    /// Create config from params map
    ///
    /// `path` is required; `separator` (one character) and `precision` are optional.
    pub fn from_params(
        name: &str,
        params: &HashMap<String, String>,
    ) -> Result<Self, DispatcherError> {
        let path = params
            .get("path")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| DispatcherError::missing_param(name, "path"))?;

        let mut config = Self::new(path);

        if let Some(sep) = params.get("separator") {
            let mut chars = sep.chars();
            config.separator = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(DispatcherError::invalid_param(
                        name,
                        "separator",
                        sep.as_str(),
                        "expected a single character",
                    ))
                }
            };
        }

        if let Some(precision) = params.get("precision") {
            config.precision = precision.parse().map_err(|_| {
                DispatcherError::invalid_param(
                    name,
                    "precision",
                    precision.as_str(),
                    "expected a non-negative integer",
                )
            })?;
        }

        Ok(config)
    }
}

/// Sink that writes the table to one delimited text file
pub struct FileSink {
    name: String,
    config: FileSinkConfig,
}

impl FileSink {
    /// Create a new FileSink
    pub fn new(name: impl Into<String>, config: FileSinkConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Create from params map (for factory)
    pub fn from_params(
        name: impl Into<String>,
        params: &HashMap<String, String>,
    ) -> Result<Self, DispatcherError> {
        let name = name.into();
        let config = FileSinkConfig::from_params(&name, params)?;
        Ok(Self::new(name, config))
    }

    pub fn config(&self) -> &FileSinkConfig {
        &self.config
    }

    fn write_to_disk(&self, table: &NumericTable, labels: &[String]) -> std::io::Result<()> {
        if let Some(parent) = self.config.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.config.path)?);
        write_table(
            &mut writer,
            table,
            labels,
            self.config.separator,
            self.config.precision,
        )?;
        writer.flush()
    }
}

impl TableSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "file_sink_write",
        skip(self, table, labels),
        fields(sink = %self.name, path = %self.config.path.display(), rows = table.rows())
    )]
    fn write(&mut self, table: &NumericTable, labels: &[String]) -> Result<(), ContractError> {
        if !labels.is_empty() && labels.len() != table.cols() {
            return Err(ContractError::sink_write(
                &self.name,
                format!(
                    "{} labels for {} columns",
                    labels.len(),
                    table.cols()
                ),
            ));
        }

        self.write_to_disk(table, labels).map_err(|e| {
            error!(sink = %self.name, error = %e, "Write failed");
            ContractError::sink_write(&self.name, e.to_string())
        })?;

        debug!(sink = %self.name, rows = table.rows(), cols = table.cols(), "table written");
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ContractError> {
        // every write opens, fills and flushes its own file
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::FloatKind;
    use tempfile::tempdir;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_sink_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("merged.csv");
        let mut sink = FileSink::new("csv", FileSinkConfig::new(&path));

        let table = NumericTable::from_rows(&[[1.0, 2.0], [3.0, 4.0]], FloatKind::F64).unwrap();
        sink.write(&table, &labels(&["t", "x"])).unwrap();
        sink.flush().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "t;x\n1.000000;2.000000\n3.000000;4.000000\n");
    }

    #[test]
    fn test_label_count_mismatch() {
        let dir = tempdir().unwrap();
        let mut sink = FileSink::new("csv", FileSinkConfig::new(dir.path().join("out.csv")));
        let table = NumericTable::from_rows(&[[1.0, 2.0]], FloatKind::F64).unwrap();
        let err = sink.write(&table, &labels(&["only_one"])).unwrap_err();
        assert!(err.to_string().contains("1 labels for 2 columns"), "got: {err}");
    }

    #[test]
    fn test_from_params() {
        let params = HashMap::from([
            ("path".to_string(), "out.txt".to_string()),
            ("separator".to_string(), " ".to_string()),
            ("precision".to_string(), "3".to_string()),
        ]);
        let sink = FileSink::from_params("out", &params).unwrap();
        assert_eq!(sink.config().separator, ' ');
        assert_eq!(sink.config().precision, 3);
        assert_eq!(sink.config().path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_from_params_requires_path() {
        let err = FileSink::from_params("out", &HashMap::new()).err().unwrap();
        assert!(err.to_string().contains("missing 'path'"), "got: {err}");
    }

    #[test]
    fn test_from_params_rejects_long_separator() {
        let params = HashMap::from([
            ("path".to_string(), "out.txt".to_string()),
            ("separator".to_string(), ";;".to_string()),
        ]);
        assert!(matches!(
            FileSink::from_params("out", &params),
            Err(DispatcherError::InvalidParam { param: "separator", .. })
        ));
    }

    #[test]
    fn test_from_params_rejects_negative_precision() {
        let params = HashMap::from([
            ("path".to_string(), "out.txt".to_string()),
            ("precision".to_string(), "-2".to_string()),
        ]);
        let err = FileSink::from_params("out", &params).err().unwrap();
        assert!(
            matches!(&err, DispatcherError::InvalidParam { param: "precision", value, .. } if value == "-2"),
            "got: {err}"
        );
    }
}
