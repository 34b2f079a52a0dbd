//! Subprocess-backed document parser.
//!
//! The parser program receives the document text and prints its tree as JSON
//! on stdout (see `json.rs` for the expected shape). The call blocks until the
//! process exits and its whole output has been read.

use std::process::{Command, Stdio};

use embedlint_ast::Node;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::json::decode_tree;
use crate::process::wait_with_input;
use crate::{IndentStyle, ParseError, Parser};

/// How the document text is handed to the parser program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserInput {
    /// As the last command-line argument.
    #[default]
    Argument,
    /// On standard input.
    Stdin,
}

/// Runs an external program to parse documents.
#[derive(Debug, Clone)]
pub struct ExternalParser {
    program: String,
    args: Vec<String>,
    input: ParserInput,
    indent_style: IndentStyle,
}

impl ExternalParser {
    /// Creates a parser that runs `program` with the document as its only argument.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            input: ParserInput::Argument,
            indent_style: IndentStyle::Nesting,
        }
    }

    /// Sets the arguments passed before the document.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how the document is passed to the program.
    pub fn with_input(mut self, input: ParserInput) -> Self {
        self.input = input;
        self
    }

    /// Sets how block indentation is derived from the program's tree.
    pub fn with_indent_style(mut self, indent_style: IndentStyle) -> Self {
        self.indent_style = indent_style;
        self
    }

    fn spawn_error(&self, source: std::io::Error) -> ParseError {
        ParseError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Parser for ExternalParser {
    fn name(&self) -> &str {
        &self.program
    }

    fn indent_style(&self) -> IndentStyle {
        self.indent_style
    }

    fn parse(&self, source: &str) -> Result<Option<Node>, ParseError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        match self.input {
            ParserInput::Argument => {
                command.arg(source).stdin(Stdio::null());
            }
            ParserInput::Stdin => {
                command.stdin(Stdio::piped());
            }
        }

        debug!("Running parser `{}` ({} bytes)", self.program, source.len());
        let child = command.spawn().map_err(|e| self.spawn_error(e))?;
        let input = match self.input {
            ParserInput::Argument => &[][..],
            ParserInput::Stdin => source.as_bytes(),
        };
        let output = wait_with_input(child, input).map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(ParseError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        decode_tree(&output.stdout)
    }
}
