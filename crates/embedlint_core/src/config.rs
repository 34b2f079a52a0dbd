//! Processor configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use embedlint_parser::{ExternalParser, IndentStyle, MarkdownParser, Parser, ParserInput};
use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::ProcessError;
use crate::linter::{CommandLinter, DEFAULT_LINTER_ARGS, DEFAULT_LINTER_COMMAND};
use crate::translate::MessageFilter;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &[".embedlint.jsonc", ".embedlint.json"];

/// Configuration for the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorConfig {
    /// External document parser; the Markdown parser is used when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserCommand>,

    /// Fenced code languages treated as script by the Markdown parser.
    /// Empty means the parser's defaults.
    #[serde(default)]
    pub languages: Vec<String>,

    /// Rule ids to drop on top of the built-in unsatisfiable rules.
    #[serde(default)]
    pub unsatisfiable_rules: Vec<String>,

    /// Whether translated fixes are kept.
    #[serde(default = "default_fix")]
    pub fix: bool,

    /// Columns added per nesting level below the document root.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Linter run on every block.
    #[serde(default)]
    pub linter: LinterCommand,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Directory containing the configuration file. Relative command paths
    /// are resolved against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_fix() -> bool {
    true
}

fn default_indent_width() -> usize {
    4
}

/// An external parser command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub input: ParserInput,
    /// How block indentation follows from the printed tree.
    #[serde(default)]
    pub indent_style: IndentStyle,
}

/// An external linter command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinterCommand {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for LinterCommand {
    fn default() -> Self {
        Self {
            command: DEFAULT_LINTER_COMMAND.to_string(),
            args: DEFAULT_LINTER_ARGS.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl ProcessorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            parser: None,
            languages: Vec::new(),
            unsatisfiable_rules: Vec::new(),
            fix: default_fix(),
            indent_width: default_indent_width(),
            linter: LinterCommand::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            base_dir: None,
        }
    }

    /// Finds the configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads the configuration file in `dir`, or the defaults if there is none.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ProcessError> {
        match Self::discover(dir) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.embedlint.jsonc`, `.embedlint.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProcessError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ProcessError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from JSON (comments and trailing commas allowed)
    /// with schema validation.
    pub fn from_json(json: &str) -> Result<Self, ProcessError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ProcessError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(ProcessError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| ProcessError::config(format!("Invalid config: {}", e)))
    }

    /// Resolves a configured command path: relative paths containing a
    /// separator are taken relative to the config directory, bare names are
    /// looked up on `PATH`.
    fn resolve_command(&self, command: &str) -> String {
        let path = Path::new(command);
        match &self.base_dir {
            Some(base) if path.is_relative() && path.components().count() > 1 => {
                base.join(path).to_string_lossy().into_owned()
            }
            _ => command.to_string(),
        }
    }

    /// Builds the configured document parser.
    pub fn build_parser(&self) -> Box<dyn Parser> {
        match &self.parser {
            Some(parser) => Box::new(
                ExternalParser::new(self.resolve_command(&parser.command))
                    .with_args(parser.args.iter().cloned())
                    .with_input(parser.input)
                    .with_indent_style(parser.indent_style),
            ),
            None if self.languages.is_empty() => Box::new(MarkdownParser::new()),
            None => Box::new(MarkdownParser::with_languages(self.languages.iter().cloned())),
        }
    }

    /// Builds the configured linter command.
    pub fn build_linter(&self) -> CommandLinter {
        CommandLinter::new(self.resolve_command(&self.linter.command))
            .with_args(self.linter.args.iter().cloned())
    }

    /// Returns the message filter for this configuration.
    pub fn message_filter(&self) -> MessageFilter {
        MessageFilter::new()
            .with_unsatisfiable(self.unsatisfiable_rules.iter().cloned())
            .with_fixes(self.fix)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}
