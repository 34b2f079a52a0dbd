//! Translation of lint messages from block coordinates to the document.

use std::collections::BTreeSet;

use tracing::{trace, warn};

use crate::block_extractor::Block;
use crate::message::{Fix, LintMessage};

/// Rules that can never hold on an extracted fragment.
///
/// A fragment does not end the file nor start it, so rules about the file's
/// last line or its byte order mark only produce noise.
pub const UNSATISFIABLE_RULES: &[&str] = &["eol-last", "unicode-bom"];

/// Decides which messages and fixes survive translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFilter {
    unsatisfiable: BTreeSet<String>,
    keep_fixes: bool,
}

impl MessageFilter {
    /// Creates a filter dropping [`UNSATISFIABLE_RULES`] and keeping fixes.
    pub fn new() -> Self {
        Self {
            unsatisfiable: UNSATISFIABLE_RULES.iter().map(|rule| rule.to_string()).collect(),
            keep_fixes: true,
        }
    }

    /// Adds rules to drop on top of the built-in ones.
    pub fn with_unsatisfiable<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unsatisfiable.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Sets whether fixes are kept.
    pub fn with_fixes(mut self, keep_fixes: bool) -> Self {
        self.keep_fixes = keep_fixes;
        self
    }

    /// Returns true if the message's rule can never hold on a fragment.
    pub fn is_unsatisfiable(&self, message: &LintMessage) -> bool {
        message
            .rule_id
            .as_deref()
            .is_some_and(|rule| self.unsatisfiable.contains(rule))
    }

    /// Returns true if fixes are kept.
    pub fn keeps_fixes(&self) -> bool {
        self.keep_fixes
    }
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a message reported on `block`'s extracted text onto the document.
///
/// Returns `None` for messages that are filtered out or that point into the
/// synthetic comments.
pub fn translate_message(
    block: &Block,
    mut message: LintMessage,
    filter: &MessageFilter,
) -> Option<LintMessage> {
    if filter.is_unsatisfiable(&message) {
        trace!("Dropping unsatisfiable rule {:?}", message.rule_id);
        return None;
    }

    if !filter.keeps_fixes() {
        message.fix = None;
    }

    let Some(line_offset) = block.line_offset() else {
        warn!(
            "Passing through {:?} at {}:{} unmapped; the {} block has no location",
            message.rule_id,
            message.line,
            message.column,
            block.kind.as_str()
        );
        return Some(message);
    };

    let comment_lines = block.comment_line_count();
    if message.line <= comment_lines {
        trace!(
            "Dropping {:?} at line {} inside synthetic comments",
            message.rule_id, message.line
        );
        return None;
    }

    message.line = message.line - comment_lines + line_offset;
    message.end_line = message
        .end_line
        .map(|end_line| end_line.saturating_sub(comment_lines).max(1) + line_offset);

    let shift = |column: u32| (column + block.indent).saturating_sub(1);
    message.column = shift(message.column);
    message.end_column = message.end_column.map(shift);

    if let Some(fix) = message.fix.take() {
        match block.range_map() {
            None => trace!(
                "Dropping fix for {:?}; the block does not line up with the document",
                message.rule_id
            ),
            Some(_) if fix.start() < block.comment_length() => {
                trace!("Dropping fix for {:?} inside synthetic comments", message.rule_id);
            }
            Some(range_map) => {
                message.fix = Some(Fix::new(
                    range_map.to_document(fix.start()),
                    range_map.to_document(fix.end()),
                    fix.text,
                ));
            }
        }
    }

    Some(message)
}
