//! Extraction of embedded script blocks.

use embedlint_ast::{EmbeddedKind, Location, Visit};
use embedlint_parser::IndentStyle;
use tracing::{debug, warn};

use crate::directive::Directive;
use crate::range_map::{RangeMap, comment_length};

/// How a block's code sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The node's first line is a delimiter (a fence or an opening brace) and
    /// the code follows on the next lines, possibly indented.
    Fenced,
    /// The code is a verbatim slice starting at the node's start offset.
    Inline,
}

impl From<EmbeddedKind> for Layout {
    fn from(kind: EmbeddedKind) -> Self {
        if kind.is_fenced() {
            Layout::Fenced
        } else {
            Layout::Inline
        }
    }
}

/// A script fragment extracted from a document, ready to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Script text as reported by the parser.
    pub code: String,
    /// Kind of node the block came from.
    pub kind: EmbeddedKind,
    /// Location of the node, `None` when the parser gave none that fits the
    /// document.
    pub loc: Option<Location>,
    /// Column shift: a reported column maps to `column + indent - 1`. With
    /// [`IndentStyle::Column`] this is the column where the code starts.
    pub indent: u32,
    /// Synthetic directive comments, in document order.
    pub comments: Vec<String>,
    range_map: Option<RangeMap>,
}

impl Block {
    /// Returns the block layout.
    pub fn layout(&self) -> Layout {
        Layout::from(self.kind)
    }

    /// Returns the offset correction table.
    ///
    /// `None` when there is no location, or when the code cannot be lined up
    /// with the document text at it. Fixes are not kept for such blocks.
    pub fn range_map(&self) -> Option<&RangeMap> {
        self.range_map.as_ref()
    }

    /// Text handed to the linter: the synthetic comments, the code and a
    /// trailing line break.
    pub fn source_text(&self) -> String {
        self.comments
            .iter()
            .map(String::as_str)
            .chain([self.code.as_str(), ""])
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of lines taken by the synthetic comments.
    pub fn comment_line_count(&self) -> u32 {
        self.comments
            .iter()
            .map(|comment| comment.split('\n').count() as u32)
            .sum()
    }

    /// Byte length of the synthetic comment prefix.
    pub fn comment_length(&self) -> usize {
        comment_length(&self.comments)
    }

    /// Amount added to a code line number to get the document line.
    pub fn line_offset(&self) -> Option<u32> {
        self.loc.map(|loc| match self.layout() {
            Layout::Fenced => loc.start.line,
            Layout::Inline => loc.start.line.saturating_sub(1),
        })
    }
}

/// Collects the directives in the annotations right before a node.
///
/// Returns `None` when one of them asks to skip the node.
fn collect_directives(visit: &Visit<'_>) -> Option<Vec<String>> {
    let mut comments = Vec::new();

    for sibling in visit.preceding.iter().rev() {
        let Some(directive) = sibling.as_annotation().and_then(Directive::parse) else {
            break;
        };

        match directive.synthetic_comment() {
            Some(comment) => comments.push(comment),
            None => return None,
        }
    }

    comments.reverse();
    Some(comments)
}

/// Computes [`Block::indent`] for a visited node.
fn indent_of(
    document: &str,
    visit: &Visit<'_>,
    loc: Option<&Location>,
    style: IndentStyle,
    indent_width: usize,
) -> u32 {
    match (style, loc) {
        (IndentStyle::Nesting, _) => (visit.depth * indent_width) as u32,
        (IndentStyle::Column, Some(loc)) => match Layout::from(visit.kind) {
            Layout::Fenced => {
                let delimiter = document
                    .get(loc.byte_range())
                    .and_then(|raw| raw.split('\n').next())
                    .unwrap_or_default();
                let fence_indent = delimiter.len() - delimiter.trim_start().len();
                loc.start.column + fence_indent as u32
            }
            Layout::Inline => loc.start.column,
        },
        // Columns pass through unchanged.
        (IndentStyle::Column, None) => 1,
    }
}

/// Builds the block for an embedded node found in `document`.
///
/// Returns `None` when the node is marked to be skipped.
pub fn extract_block(
    document: &str,
    visit: &Visit<'_>,
    style: IndentStyle,
    indent_width: usize,
) -> Option<Block> {
    let Some(comments) = collect_directives(visit) else {
        debug!(
            "Skipping {} block at {:?}",
            visit.kind.as_str(),
            visit.code.loc.map(|loc| loc.start.line)
        );
        return None;
    };

    let code = &visit.code.code;
    let loc = visit
        .code
        .loc
        .filter(|loc| document.get(loc.byte_range()).is_some());

    let range_map = loc.as_ref().and_then(|loc| match Layout::from(visit.kind) {
        Layout::Fenced => RangeMap::fenced(document, loc, code, &comments),
        Layout::Inline => RangeMap::inline(document, loc, code, &comments),
    });

    match (&loc, &range_map) {
        (None, _) => warn!(
            "{} block has no usable location {:?}; its messages will not be remapped",
            visit.kind.as_str(),
            visit.code.loc
        ),
        (Some(loc), None) => warn!(
            "{} block at line {} does not line up with the document; its fixes will be dropped",
            visit.kind.as_str(),
            loc.start.line
        ),
        _ => {}
    }

    Some(Block {
        code: code.clone(),
        kind: visit.kind,
        indent: indent_of(document, visit, loc.as_ref(), style, indent_width),
        loc,
        comments,
        range_map,
    })
}
