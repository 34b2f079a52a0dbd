//! JSON output formatter

use embedlint_core::Block;
use miette::{IntoDiagnostic, Result};

use super::FileReport;

pub fn output_json(reports: &[FileReport]) -> Result<()> {
    let output: Vec<_> = reports
        .iter()
        .map(|r| {
            serde_json::json!({
                "filePath": r.path.display().to_string(),
                "messages": r.messages,
                "errorCount": r.messages.iter().filter(|m| m.is_error()).count(),
                "warningCount": r.messages.iter().filter(|m| !m.is_error()).count(),
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

pub fn output_blocks_json(blocks: &[Block]) -> Result<()> {
    let output: Vec<_> = blocks
        .iter()
        .map(|block| {
            serde_json::json!({
                "kind": block.kind.as_str(),
                "loc": block.loc,
                "indent": block.indent,
                "source": block.source_text(),
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
