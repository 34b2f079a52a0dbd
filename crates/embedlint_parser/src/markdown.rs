//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! Fenced code blocks tagged with a script language become
//! [`Node::JavascriptBlock`]; HTML nodes become [`Node::Comment`] so that
//! `<!-- eslint ... -->` annotations can be picked up; everything else is a
//! plain container.

use embedlint_ast::{Annotation, Container, EmbeddedCode, Location, Node, Position};
use markdown::{ParseOptions, mdast, to_mdast};

use crate::{IndentStyle, ParseError, Parser};

/// Info-string languages treated as script by default.
const DEFAULT_LANGUAGES: &[&str] = &["js", "javascript", "jsx", "node"];

/// Markdown parser implementation.
pub struct MarkdownParser {
    languages: Vec<String>,
}

impl MarkdownParser {
    /// Creates a Markdown parser recognizing the default script languages.
    pub fn new() -> Self {
        Self::with_languages(DEFAULT_LANGUAGES.iter().copied())
    }

    /// Creates a Markdown parser recognizing the given info-string languages.
    pub fn with_languages<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|lang| lang.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Gets default parse options (GFM).
    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    fn is_script(&self, lang: Option<&str>) -> bool {
        lang.is_some_and(|lang| {
            self.languages
                .iter()
                .any(|known| known.eq_ignore_ascii_case(lang))
        })
    }

    /// Converts an mdast node to a document node.
    fn convert_node(&self, node: &mdast::Node) -> Node {
        let loc = node.position().map(to_location);

        match node {
            mdast::Node::Root(root) => {
                Node::Document(Container::new(self.convert_children(&root.children), loc))
            }

            mdast::Node::Code(code) if self.is_script(code.lang.as_deref()) => {
                Node::JavascriptBlock(EmbeddedCode::new(code.value.clone(), loc))
            }

            mdast::Node::Html(html) => Node::Comment(Annotation::new(html.value.clone(), loc)),

            other => {
                let children = other
                    .children()
                    .map(|children| self.convert_children(children))
                    .unwrap_or_default();
                Node::Section(Container::new(children, loc))
            }
        }
    }

    fn convert_children(&self, children: &[mdast::Node]) -> Vec<Node> {
        children.iter().map(|child| self.convert_node(child)).collect()
    }
}

fn to_location(position: &markdown::unist::Position) -> Location {
    Location::new(
        Position::new(
            position.start.offset,
            position.start.line as u32,
            position.start.column as u32,
        ),
        Position::new(
            position.end.offset,
            position.end.line as u32,
            position.end.column as u32,
        ),
    )
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    /// Fences may sit anywhere inside lists and quotes, so block columns
    /// come from the fence itself rather than its nesting.
    fn indent_style(&self) -> IndentStyle {
        IndentStyle::Column
    }

    fn parse(&self, source: &str) -> Result<Option<Node>, ParseError> {
        if source.trim().is_empty() {
            return Ok(None);
        }

        let options = Self::default_options();
        let mdast =
            to_mdast(source, &options).map_err(|e| ParseError::invalid_source(e.to_string()))?;

        Ok(Some(self.convert_node(&mdast)))
    }
}
