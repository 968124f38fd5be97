//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Neither a config file nor the required flags were given
    #[error("Missing input: {message}")]
    MissingInput { message: String },

    /// A stream produced no rows, so there is nothing to merge
    #[error("Stream '{stream}' produced no data ({cause})")]
    EmptyStream { stream: String, cause: String },

    /// A stage of the merge run failed
    #[error("{stage} failed for '{subject}': {message}")]
    Stage {
        stage: &'static str,
        subject: String,
        message: String,
    },

    /// At least one sink could not write the merged table
    #[error("{failed} of {total} sinks failed")]
    SinksFailed { failed: usize, total: usize },
}

impl CliError {
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput {
            message: message.into(),
        }
    }

    pub fn empty_stream(stream: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::EmptyStream {
            stream: stream.into(),
            cause: cause.into(),
        }
    }

    pub fn stage(
        stage: &'static str,
        subject: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::Stage {
            stage,
            subject: subject.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream_message_names_stream() {
        let err = CliError::empty_stream("truth", "parse error at line 3");
        let msg = err.to_string();
        assert!(msg.contains("'truth'"), "got: {msg}");
        assert!(msg.contains("line 3"), "got: {msg}");
    }

    #[test]
    fn test_stage_message() {
        let err = CliError::stage("frequency estimation", "imu", "need at least 2 rows");
        assert_eq!(
            err.to_string(),
            "frequency estimation failed for 'imu': need at least 2 rows"
        );
    }
}
