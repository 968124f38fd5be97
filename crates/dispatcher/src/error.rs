//! Sink construction errors

use thiserror::Error;

/// Raised while turning a `SinkConfig` into a sink
#[derive(Debug, Error)]
pub enum DispatcherError {
    /// A required param is absent or empty
    #[error("sink '{sink}': missing '{param}' param")]
    MissingParam { sink: String, param: &'static str },

    /// A param is present but cannot be used
    #[error("sink '{sink}': invalid '{param}' param '{value}': {reason}")]
    InvalidParam {
        sink: String,
        param: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl DispatcherError {
    pub fn missing_param(sink: impl Into<String>, param: &'static str) -> Self {
        Self::MissingParam {
            sink: sink.into(),
            param,
        }
    }

    pub fn invalid_param(
        sink: impl Into<String>,
        param: &'static str,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParam {
            sink: sink.into(),
            param,
            value: value.into(),
            reason,
        }
    }
}
