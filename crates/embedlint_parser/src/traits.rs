//! Parser trait definition.

use embedlint_ast::Node;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// How a parser's trees relate nesting to document columns.
///
/// The block indent is added to every reported column as
/// `column + indent - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// The indent is `depth * indentWidth`: every containment level stands
    /// for one indentation step. Fits QML, where objects nest by a fixed
    /// width.
    #[default]
    Nesting,
    /// The indent is the document column where the block's code starts.
    /// Fits Markdown, where fences sit at arbitrary columns.
    Column,
}

/// Trait for parsing document text into a node tree.
///
/// # Example
///
/// ```rust,ignore
/// use embedlint_ast::Node;
/// use embedlint_parser::{ParseError, Parser};
///
/// struct NoScripts;
///
/// impl Parser for NoScripts {
///     fn name(&self) -> &str {
///         "no-scripts"
///     }
///
///     fn parse(&self, _source: &str) -> Result<Option<Node>, ParseError> {
///         Ok(None)
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses the document.
    ///
    /// Returns `Ok(None)` for an empty document.
    fn parse(&self, source: &str) -> Result<Option<Node>, ParseError>;

    /// Returns how block indents are computed for this parser's trees.
    fn indent_style(&self) -> IndentStyle {
        IndentStyle::Nesting
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn parse(&self, source: &str) -> Result<Option<Node>, ParseError> {
        (**self).parse(source)
    }

    fn indent_style(&self) -> IndentStyle {
        (**self).indent_style()
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn parse(&self, source: &str) -> Result<Option<Node>, ParseError> {
        (**self).parse(source)
    }

    fn indent_style(&self) -> IndentStyle {
        (**self).indent_style()
    }
}
