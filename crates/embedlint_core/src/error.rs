//! Processor error types.

use thiserror::Error;

pub use embedlint_parser::ParseError;

/// Errors that can occur while processing a document.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document could not be parsed. Fatal for the document.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Postprocessing received a different number of message groups than
    /// preprocessing produced blocks.
    #[error("Expected {expected} message group(s), one per extracted block, got {actual}")]
    GroupCountMismatch {
        /// Number of blocks extracted by preprocessing.
        expected: usize,
        /// Number of groups passed to postprocessing.
        actual: usize,
    },

    /// The linter failed on a block.
    #[error("Linter error: {0}")]
    Lint(#[from] LinterError),

    /// A document could not be read or written.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}

/// Errors raised by the external linter boundary.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The linter process could not be started or talked to.
    #[error("Failed to run linter `{program}`: {source}")]
    Spawn {
        /// Program that was run.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The linter exited unsuccessfully without a usable report.
    #[error("Linter `{program}` exited with {status}: {stderr}")]
    Failed {
        /// Program that was run.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The linter printed something that is not a message list.
    #[error("Invalid linter output: {0}")]
    InvalidOutput(String),
}

impl LinterError {
    /// Creates an invalid output error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }
}
