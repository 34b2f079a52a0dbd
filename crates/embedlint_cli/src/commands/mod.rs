//! Subcommand implementations

pub mod lint;
pub mod postprocess;
pub mod preprocess;

use std::fs;
use std::path::Path;

use embedlint_core::{Processor, ProcessorConfig};
use embedlint_parser::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::cli::Cli;

/// Processor with the parser chosen by the configuration.
pub type ConfiguredProcessor = Processor<Box<dyn Parser>>;

/// Loads the configuration named on the command line, or the one in the
/// current directory.
pub fn find_config(cli: &Cli) -> Result<ProcessorConfig> {
    if let Some(path) = &cli.config {
        return ProcessorConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ProcessorConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ProcessorConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(ProcessorConfig::new())
}

/// Builds the processor for a configuration.
pub fn build_processor(config: ProcessorConfig) -> ConfiguredProcessor {
    Processor::new(config.build_parser(), config)
}

/// Reads a document.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
}
