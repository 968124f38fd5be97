//! MergeBlueprint - Config Loader output
//!
//! Describes one complete merge run: two input streams and the output routing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::{FloatKind, TimeUnit};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Full merge run blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeBlueprint {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Longer (higher rate) stream, kept row-for-row
    pub left: StreamConfig,

    /// Shorter stream, repeated to match `left`
    pub right: StreamConfig,

    /// Output routing
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

/// One delimited input stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Stream name, used for logs and generated labels
    pub name: String,

    /// Source file
    pub path: PathBuf,

    /// Field separator
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Target numeric width
    #[serde(default)]
    pub numeric_type: FloatKind,

    /// Also parse labels from line 0
    #[serde(default)]
    pub want_header: bool,

    /// Column holding timestamps
    #[serde(default)]
    pub timestamp_column: usize,

    /// Unit of the timestamp column
    #[serde(default)]
    pub unit: TimeUnit,

    /// Explicit column labels for the output header
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl StreamConfig {
    /// Stream with defaults for everything but name and path
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            separator: default_separator(),
            numeric_type: FloatKind::default(),
            want_header: false,
            timestamp_column: 0,
            unit: TimeUnit::default(),
            labels: None,
        }
    }
}

/// Default field separator
pub fn default_separator() -> char {
    ';'
}

/// Output routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Sink name
    pub name: String,

    /// Sink type
    pub sink_type: SinkType,

    /// Sink-specific parameters
    #[serde(default)]
    pub params: HashMap<String, String>,
}

/// Sink type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkType {
    /// Delimited text file
    File,
    /// Tracing output only
    Log,
}
