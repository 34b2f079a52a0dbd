//! Text output formatter

use embedlint_core::{Block, Severity};

use super::FileReport;

pub fn output_text(reports: &[FileReport]) {
    for report in reports {
        if report.messages.is_empty() {
            continue;
        }

        println!("\n{}:", report.path.display());
        for msg in &report.messages {
            let severity = match msg.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!(
                "  {}:{} {} [{}]: {}",
                msg.line,
                msg.column,
                severity,
                msg.rule_id.as_deref().unwrap_or("fatal"),
                msg.message
            );
        }
    }

    let total_files = reports.len();
    let total_issues: usize = reports.iter().map(|r| r.messages.len()).sum();

    println!();
    println!(
        "Checked {} files, found {} issues",
        total_files, total_issues
    );
}

pub fn output_blocks_text(blocks: &[Block]) {
    for (index, block) in blocks.iter().enumerate() {
        let line = block
            .loc
            .map(|loc| loc.start.line.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!("--- block {} ({}, line {}) ---", index, block.kind.as_str(), line);
        print!("{}", block.source_text());
    }
}
