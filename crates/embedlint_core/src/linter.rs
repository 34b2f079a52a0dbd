//! The linter boundary.
//!
//! Blocks are linted one at a time by something implementing
//! [`BlockLinter`]. [`CommandLinter`] runs an ESLint-compatible command with
//! the block on stdin and reads its JSON report from stdout.

use std::process::{Command, Stdio};

use embedlint_parser::process::wait_with_input;
use serde::Deserialize;
use tracing::debug;

use crate::error::LinterError;
use crate::message::LintMessage;

/// Lints the extracted text of one block.
pub trait BlockLinter {
    /// Returns the messages reported for `source`, in extracted coordinates.
    fn lint(&self, source: &str) -> Result<Vec<LintMessage>, LinterError>;
}

impl<F> BlockLinter for F
where
    F: Fn(&str) -> Result<Vec<LintMessage>, LinterError>,
{
    fn lint(&self, source: &str) -> Result<Vec<LintMessage>, LinterError> {
        self(source)
    }
}

/// Program run when no linter is configured.
pub const DEFAULT_LINTER_COMMAND: &str = "eslint";

/// Arguments passed to [`DEFAULT_LINTER_COMMAND`].
pub const DEFAULT_LINTER_ARGS: &[&str] = &["--stdin", "--format", "json"];

/// What a linter command may print.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LinterOutput {
    /// ESLint's `--format json` report, one entry per linted input.
    Report(Vec<FileReport>),
    /// A bare message list.
    Messages(Vec<LintMessage>),
}

#[derive(Debug, Deserialize)]
struct FileReport {
    messages: Vec<LintMessage>,
}

/// Parses a linter's standard output.
pub fn parse_linter_output(stdout: &[u8]) -> Result<Vec<LintMessage>, LinterError> {
    let text = std::str::from_utf8(stdout)
        .map_err(|e| LinterError::invalid_output(format!("not UTF-8: {}", e)))?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str(text) {
        Ok(LinterOutput::Report(files)) => {
            Ok(files.into_iter().flat_map(|file| file.messages).collect())
        }
        Ok(LinterOutput::Messages(messages)) => Ok(messages),
        Err(e) => Err(LinterError::invalid_output(e.to_string())),
    }
}

/// Runs an external linter command.
#[derive(Debug, Clone)]
pub struct CommandLinter {
    program: String,
    args: Vec<String>,
}

impl CommandLinter {
    /// Creates a linter running `program` without arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Sets the command arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn_error(&self, source: std::io::Error) -> LinterError {
        LinterError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Default for CommandLinter {
    fn default() -> Self {
        Self::new(DEFAULT_LINTER_COMMAND).with_args(DEFAULT_LINTER_ARGS.iter().copied())
    }
}

impl BlockLinter for CommandLinter {
    fn lint(&self, source: &str) -> Result<Vec<LintMessage>, LinterError> {
        debug!("Running linter `{}` ({} bytes)", self.program, source.len());

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // A linter may exit without reading its input; its output decides.
        let output = wait_with_input(child, source.as_bytes()).map_err(|e| self.spawn_error(e))?;

        let failed = || LinterError::Failed {
            program: self.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };

        // ESLint exits with 1 when it reports errors, so the status only
        // matters when there is no usable report.
        if !output.status.success() && output.stdout.trim_ascii().is_empty() {
            return Err(failed());
        }

        match parse_linter_output(&output.stdout) {
            Ok(messages) => Ok(messages),
            Err(_) if !output.status.success() => Err(failed()),
            Err(e) => Err(e),
        }
    }
}
