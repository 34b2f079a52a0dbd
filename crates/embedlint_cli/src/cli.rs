//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// embedlint - Lint JavaScript embedded in QML and Markdown documents
#[derive(Parser)]
#[command(name = "embedlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the script blocks extracted from a document
    Preprocess {
        /// Document to extract from
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Map per-block linter messages back onto a document
    Postprocess {
        /// Document the messages were produced for
        file: PathBuf,

        /// JSON file holding one message array per block ("-" reads stdin)
        #[arg(short, long)]
        messages: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Lint the scripts embedded in documents
    Lint {
        /// Files or glob patterns to lint
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Apply fixes to the documents
        #[arg(long)]
        fix: bool,
    },
}
