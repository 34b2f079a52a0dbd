//! Postprocess command implementation

use std::io::Read;
use std::path::Path;

use embedlint_core::LintMessage;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{build_processor, find_config, read_document};
use crate::cli::{Cli, OutputFormat};
use crate::output::{FileReport, output_results};

fn read_groups(messages: &Path) -> Result<Vec<Vec<LintMessage>>> {
    let json = if messages == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .into_diagnostic()?;
        buffer
    } else {
        read_document(messages)?
    };

    serde_json::from_str(&json)
        .into_diagnostic()
        .wrap_err("Expected a JSON array holding one message array per block")
}

pub fn run_postprocess(
    cli: &Cli,
    file: &Path,
    messages: &Path,
    format: OutputFormat,
) -> Result<bool> {
    let config = find_config(cli)?;
    let processor = build_processor(config);

    let text = read_document(file)?;
    let groups = read_groups(messages)?;

    let cycle = processor.preprocess(&text).into_diagnostic()?;
    let messages = cycle.postprocess(groups).into_diagnostic()?;

    output_results(
        &[FileReport {
            path: file.to_path_buf(),
            messages,
        }],
        format,
    )
}
