//! Lint message types.
//!
//! The wire shape is the one ESLint uses in its JSON formatter, so messages
//! can be read from and written back to the host linter unchanged apart from
//! their positions.

use serde::{Deserialize, Serialize};

/// Severity level for messages.
///
/// Serialized as ESLint's numeric levels: `1` for warnings, `2` for errors.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Warning - should be reviewed.
    Warning,
    /// Error - must be fixed.
    #[default]
    Error,
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity level {}", other)),
        }
    }
}

/// A message reported by the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// The rule that generated this message; `None` for fatal parse errors.
    #[serde(default)]
    pub rule_id: Option<String>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The message text.
    pub message: String,

    /// Start line (1-indexed).
    #[serde(default)]
    pub line: u32,

    /// Start column (1-indexed).
    #[serde(default)]
    pub column: u32,

    /// End line (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,

    /// End column (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,

    /// Optional fix for this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,

    /// Any other fields the linter reported, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LintMessage {
    /// Creates a new error message at a line and column.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            rule_id: Some(rule_id.into()),
            severity: Severity::Error,
            message: message.into(),
            line,
            column,
            end_line: None,
            end_column: None,
            fix: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the end position.
    pub fn with_end(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }

    /// Sets an auto-fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Returns true if this message is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// An auto-fix for a message: replace `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fix {
    /// The byte range to replace, `[start, end)`.
    pub range: [usize; 2],

    /// The replacement text.
    pub text: String,
}

impl Fix {
    /// Creates a new fix.
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            range: [start, end],
            text: text.into(),
        }
    }

    /// Creates a fix that inserts text at an offset.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset, offset, text)
    }

    /// Creates a fix that deletes a range.
    pub fn delete(start: usize, end: usize) -> Self {
        Self::new(start, end, String::new())
    }

    /// Start offset of the replaced range.
    #[inline]
    pub const fn start(&self) -> usize {
        self.range[0]
    }

    /// End offset of the replaced range.
    #[inline]
    pub const fn end(&self) -> usize {
        self.range[1]
    }
}
