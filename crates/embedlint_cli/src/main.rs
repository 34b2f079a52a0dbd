//! embedlint CLI
//!
//! Extracts JavaScript from QML and Markdown documents, lints it with an
//! external linter and reports the messages at their document positions.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Preprocess { file, format } => {
            commands::preprocess::run_preprocess(cli, file, *format).map(|_| false)
        }
        Commands::Postprocess {
            file,
            messages,
            format,
        } => commands::postprocess::run_postprocess(cli, file, messages, *format),
        Commands::Lint {
            patterns,
            format,
            fix,
        } => commands::lint::run_lint(cli, patterns, *format, *fix),
    }
}
