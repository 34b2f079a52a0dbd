//! Output formatting module

mod json;
mod text;

use std::path::PathBuf;

use embedlint_core::{Block, LintMessage};
use miette::Result;

use crate::cli::OutputFormat;

/// Messages reported for one document.
pub struct FileReport {
    pub path: PathBuf,
    pub messages: Vec<LintMessage>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(LintMessage::is_error)
    }
}

/// Prints lint results. Returns true if any error was reported.
pub fn output_results(reports: &[FileReport], format: OutputFormat) -> Result<bool> {
    let has_errors = reports.iter().any(FileReport::has_errors);

    match format {
        OutputFormat::Json => json::output_json(reports)?,
        OutputFormat::Text => text::output_text(reports),
    }

    Ok(has_errors)
}

/// Prints extracted blocks.
pub fn output_blocks(blocks: &[Block], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_blocks_json(blocks),
        OutputFormat::Text => {
            text::output_blocks_text(blocks);
            Ok(())
        }
    }
}
