//! Preprocess command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};

use super::{build_processor, find_config, read_document};
use crate::cli::{Cli, OutputFormat};
use crate::output::output_blocks;

pub fn run_preprocess(cli: &Cli, file: &Path, format: OutputFormat) -> Result<()> {
    let config = find_config(cli)?;
    let processor = build_processor(config);

    let text = read_document(file)?;
    let cycle = processor.preprocess(&text).into_diagnostic()?;

    output_blocks(cycle.blocks(), format)
}
