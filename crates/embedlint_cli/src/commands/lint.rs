//! Lint command implementation

use std::path::{Path, PathBuf};

use embedlint_core::{BlockLinter, FileFinder, LintMessage, apply_fixes_to_file};
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};

use super::{ConfiguredProcessor, build_processor, find_config, read_document};
use crate::cli::{Cli, OutputFormat};
use crate::output::{FileReport, output_results};

fn lint_file(
    processor: &ConfiguredProcessor,
    linter: &dyn BlockLinter,
    path: &Path,
) -> Result<Vec<LintMessage>> {
    let text = read_document(path)?;
    processor.lint(&text, linter).into_diagnostic()
}

/// Applies the fixes of every report and keeps only the messages that were
/// not fixed, including those whose fix had to be skipped.
fn apply_fixes(reports: &mut [FileReport]) {
    let mut total_fixes = 0;
    let mut files_fixed = 0;

    for report in reports.iter_mut() {
        if !report.messages.iter().any(|m| m.fix.is_some()) {
            continue;
        }

        match apply_fixes_to_file(&report.path, &report.messages) {
            Ok(result) if result.modified => {
                total_fixes += result.fixes_applied;
                files_fixed += 1;
                let mut index = 0;
                report.messages.retain(|_| {
                    let fixed = result.applied.binary_search(&index).is_ok();
                    index += 1;
                    !fixed
                });
            }
            Ok(_) => {}
            Err(e) => error!("Failed to fix {}: {}", report.path.display(), e),
        }
    }

    if total_fixes == 0 {
        info!("No fixable issues found.");
    } else {
        info!("Fixed {} issues in {} files", total_fixes, files_fixed);
    }
}

pub fn run_lint(cli: &Cli, patterns: &[String], format: OutputFormat, fix: bool) -> Result<bool> {
    let config = find_config(cli)?;

    let finder = FileFinder::from_config(&config).into_diagnostic()?;
    let files = finder
        .discover_files(patterns, Path::new("."))
        .into_diagnostic()?;

    let linter = config.build_linter();
    let processor = build_processor(config);

    let mut reports = Vec::with_capacity(files.len());
    let mut failures: Vec<(PathBuf, String)> = Vec::new();

    for path in files {
        match lint_file(&processor, &linter, &path) {
            Ok(messages) => reports.push(FileReport { path, messages }),
            Err(e) => failures.push((path, e.to_string())),
        }
    }

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if fix && ConfiguredProcessor::SUPPORTS_AUTOFIX {
        apply_fixes(&mut reports);
    }

    let has_errors = output_results(&reports, format)?;

    Ok(has_errors || !failures.is_empty())
}
