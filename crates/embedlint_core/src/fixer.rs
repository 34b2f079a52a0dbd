//! Applying translated fixes to a document.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::ProcessError;
use crate::message::{Fix, LintMessage};

/// Result of applying fixes to a document.
#[derive(Debug)]
pub struct FixerResult {
    /// Number of fixes applied.
    pub fixes_applied: usize,
    /// The fixed content.
    pub fixed_content: String,
    /// Whether the content was modified.
    pub modified: bool,
    /// Indices of the messages whose fix was applied, ascending.
    pub applied: Vec<usize>,
}

impl FixerResult {
    /// Creates a new fixer result.
    pub fn new(mut applied: Vec<usize>, fixed_content: String) -> Self {
        applied.sort_unstable();
        Self {
            fixes_applied: applied.len(),
            modified: !applied.is_empty(),
            fixed_content,
            applied,
        }
    }

    /// Creates a result indicating no changes were made.
    pub fn unchanged(content: String) -> Self {
        Self::new(Vec::new(), content)
    }
}

fn is_applicable(content: &str, fix: &Fix) -> bool {
    fix.start() <= fix.end()
        && fix.end() <= content.len()
        && content.is_char_boundary(fix.start())
        && content.is_char_boundary(fix.end())
}

/// Applies the fixes carried by `messages` to `content`.
///
/// Fixes are applied from the end of the document backwards so earlier
/// offsets stay valid. Overlapping and out-of-range fixes are skipped; the
/// result lists which messages were actually fixed.
pub fn apply_fixes_to_content(content: &str, messages: &[LintMessage]) -> FixerResult {
    let mut fixes: Vec<(usize, &Fix)> = messages
        .iter()
        .enumerate()
        .filter_map(|(index, m)| m.fix.as_ref().map(|fix| (index, fix)))
        .collect();

    if fixes.is_empty() {
        return FixerResult::unchanged(content.to_string());
    }

    fixes.sort_by(|(_, a), (_, b)| b.start().cmp(&a.start()));
    let fixes = filter_overlapping_fixes(fixes);

    let mut result = content.to_string();
    let mut applied = Vec::with_capacity(fixes.len());

    for (index, fix) in fixes {
        if !is_applicable(&result, fix) {
            warn!(
                "Invalid fix range {:?} for document of {} bytes",
                fix.range,
                result.len()
            );
            continue;
        }

        debug!("Applying fix: replace {:?} with {:?}", fix.range, fix.text);
        result.replace_range(fix.start()..fix.end(), &fix.text);
        applied.push(index);
    }

    FixerResult::new(applied, result)
}

/// Drops fixes overlapping one that starts later.
///
/// `fixes` pairs each fix with its message index and must be sorted by
/// start offset, descending.
pub(crate) fn filter_overlapping_fixes(fixes: Vec<(usize, &Fix)>) -> Vec<(usize, &Fix)> {
    debug_assert!(
        fixes.windows(2).all(|w| w[0].1.start() >= w[1].1.start()),
        "Fixes must be sorted by start descending"
    );

    let mut kept: Vec<(usize, &Fix)> = Vec::with_capacity(fixes.len());

    for (index, fix) in fixes {
        // Every kept fix starts at or after `fix`, so the last one is the
        // only one it can reach.
        let overlaps = kept
            .last()
            .is_some_and(|(_, last)| fix.end() > last.start() && fix.start() < last.end());

        if overlaps {
            warn!("Skipping overlapping fix at {:?}", fix.range);
        } else {
            kept.push((index, fix));
        }
    }

    kept
}

/// Applies fixes to a file and writes the result back.
pub fn apply_fixes_to_file(
    path: &Path,
    messages: &[LintMessage],
) -> Result<FixerResult, ProcessError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ProcessError::file(format!("Failed to read {}: {}", path.display(), e)))?;

    let result = apply_fixes_to_content(&content, messages);

    if result.modified {
        fs::write(path, &result.fixed_content)
            .map_err(|e| ProcessError::file(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    Ok(result)
}
