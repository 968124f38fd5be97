//! Ingestion options

use contracts::{FloatKind, StreamConfig};

/// Options for one ingestion call
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Field separator
    pub separator: char,

    /// Target numeric width
    pub float_kind: FloatKind,

    /// Also return labels parsed from line 0
    pub want_header: bool,

    /// Single leading character stripped from line 0 before label parsing
    pub comment_marker: char,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            separator: contracts::default_separator(),
            float_kind: FloatKind::F64,
            want_header: false,
            comment_marker: '#',
        }
    }
}

impl IngestOptions {
    /// Create options with the given separator and defaults elsewhere
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            ..Self::default()
        }
    }

    pub fn with_float_kind(mut self, float_kind: FloatKind) -> Self {
        self.float_kind = float_kind;
        self
    }

    pub fn with_header(mut self, want_header: bool) -> Self {
        self.want_header = want_header;
        self
    }
}

impl From<&StreamConfig> for IngestOptions {
    fn from(stream: &StreamConfig) -> Self {
        Self {
            separator: stream.separator,
            float_kind: stream.numeric_type,
            want_header: stream.want_header,
            ..Self::default()
        }
    }
}
