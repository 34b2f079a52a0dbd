//! Offset correction between extracted script text and the document.
//!
//! The extracted text differs from the document in two ways only: synthetic
//! directive comments are prepended, and each line of a fenced block loses
//! the prefix its container owns. That prefix is the indentation up to the
//! opening fence, plus any container markers such as `> ` in a blockquote.
//! Every line of extracted code is therefore a suffix of its document line,
//! and one delta per line is enough to map any offset back.
//!
//! When a line is not a suffix (tabs expanded by the parser, say) there is no
//! sound delta for it, and no table is built.

use embedlint_ast::Location;

/// One correction: extracted offsets from `extracted_offset` up to the next
/// entry map to `offset + delta` in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry {
    /// First extracted offset this entry applies to.
    pub extracted_offset: usize,
    /// Amount added to an extracted offset to get the document offset.
    pub delta: isize,
}

/// Monotonic table of [`RangeEntry`]s for one block.
///
/// `extracted_offset` is strictly increasing and the first entry is always
/// at offset 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap {
    entries: Vec<RangeEntry>,
}

/// Total length of the synthetic comments, each followed by a line break.
pub fn comment_length(comments: &[String]) -> usize {
    comments.iter().map(|comment| comment.len() + 1).sum()
}

fn delta(document_offset: usize, extracted_offset: usize) -> isize {
    document_offset as isize - extracted_offset as isize
}

impl RangeMap {
    fn with_sentinel() -> Self {
        Self {
            entries: vec![RangeEntry {
                extracted_offset: 0,
                delta: 0,
            }],
        }
    }

    /// An entry at the same offset as the last one supersedes it.
    fn push(&mut self, entry: RangeEntry) {
        match self.entries.last_mut() {
            Some(last) if last.extracted_offset == entry.extracted_offset => *last = entry,
            _ => self.entries.push(entry),
        }
    }

    /// Builds the table for a fenced block.
    ///
    /// `loc` covers the block in `document`, opening delimiter line included,
    /// and `code` is the text the parser extracted from it. Returns `None`
    /// when the location does not fit the document or a code line is not a
    /// suffix of the document line it came from.
    pub fn fenced(
        document: &str,
        loc: &Location,
        code: &str,
        comments: &[String],
    ) -> Option<Self> {
        let raw = document.get(loc.byte_range())?;
        let mut raw_lines = raw.split('\n');
        let delimiter = raw_lines.next()?;

        let mut map = Self::with_sentinel();
        let mut extracted_cursor = comment_length(comments);
        let mut document_cursor = loc.start.offset + delimiter.len() + 1;

        for code_line in code.split('\n') {
            let raw_line = raw_lines.next()?;
            let content = code_line.strip_suffix('\r').unwrap_or(code_line);
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            if !line.ends_with(content) {
                return None;
            }
            let trim = line.len() - content.len();

            map.push(RangeEntry {
                extracted_offset: extracted_cursor,
                delta: delta(document_cursor + trim, extracted_cursor),
            });

            document_cursor += raw_line.len() + 1;
            extracted_cursor += code_line.len() + 1;
        }

        Some(map)
    }

    /// Builds the table for an inline block, whose code is a verbatim slice
    /// of the document starting at `loc.start`.
    ///
    /// Returns `None` when the document does not hold `code` there.
    pub fn inline(
        document: &str,
        loc: &Location,
        code: &str,
        comments: &[String],
    ) -> Option<Self> {
        if !document.get(loc.start.offset..)?.starts_with(code) {
            return None;
        }

        let extracted_offset = comment_length(comments);
        let mut map = Self::with_sentinel();
        map.push(RangeEntry {
            extracted_offset,
            delta: delta(loc.start.offset, extracted_offset),
        });
        Some(map)
    }

    /// Returns the correction entries.
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Returns the entry applying to an extracted offset.
    pub fn entry_for(&self, extracted_offset: usize) -> RangeEntry {
        let index = self
            .entries
            .partition_point(|entry| entry.extracted_offset <= extracted_offset);
        // The first entry sits at offset 0, so `index` is at least 1.
        self.entries[index.saturating_sub(1)]
    }

    /// Maps an extracted offset to its document offset.
    pub fn to_document(&self, extracted_offset: usize) -> usize {
        extracted_offset.saturating_add_signed(self.entry_for(extracted_offset).delta)
    }
}
