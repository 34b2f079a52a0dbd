//! Parse error types.

use thiserror::Error;

/// Errors that can occur during parsing.
///
/// Every variant is fatal for the document being parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The parser process could not be started or talked to.
    #[error("Failed to run parser `{program}`: {source}")]
    Spawn {
        /// Program that was run.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The parser process exited unsuccessfully.
    #[error("Parser `{program}` exited with {status}: {stderr}")]
    Failed {
        /// Program that was run.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The parser produced output that is not a valid tree.
    #[error("Invalid parser output: {0}")]
    InvalidOutput(String),

    /// The source text is invalid.
    #[error("Invalid source: {0}")]
    InvalidSource(String),
}

impl ParseError {
    /// Creates an invalid output error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }

    /// Creates an invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource(message.into())
    }
}
