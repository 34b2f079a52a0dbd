//! Node definitions.
//!
//! The tree is produced once by a parser and never mutated afterwards.

use crate::Location;

/// A node in a parsed document.
///
/// Structural kinds carry a [`Container`]; the three embedded-script kinds
/// carry [`EmbeddedCode`]; comments carry an [`Annotation`]. Kinds reported
/// by an external parser that are not listed here end up in
/// [`Node::Unrecognized`] with their original kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Root of a QML document.
    Program(Container),
    /// A QML `import` statement.
    Import(Container),
    /// A QML object declaration (`Item { ... }`).
    Object(Container),
    /// A QML property binding; its script lives in the nested value.
    Property(Container),
    /// Root of a Markdown document.
    Document(Container),
    /// Any other Markdown container (list, list item, blockquote, paragraph...).
    Section(Container),
    /// A script block (a fenced code block, a QML `{ ... }` binding body).
    JavascriptBlock(EmbeddedCode),
    /// A single inline script expression.
    JavascriptValue(EmbeddedCode),
    /// A QML function declaration.
    Function(EmbeddedCode),
    /// A document-level comment.
    Comment(Annotation),
    /// A kind the parser reported but this crate does not know.
    Unrecognized(Unrecognized),
}

/// Fields shared by structural nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    /// Nested value node (a property's bound expression, for instance).
    pub value: Option<Box<Node>>,
    /// Ordered child nodes.
    pub children: Vec<Node>,
    /// Source location, when the parser provided a complete one.
    pub loc: Option<Location>,
}

impl Container {
    /// Creates a container with children and no nested value.
    pub fn new(children: Vec<Node>, loc: Option<Location>) -> Self {
        Self {
            value: None,
            children,
            loc,
        }
    }

    /// Creates a container holding a single nested value.
    pub fn with_value(value: Node, loc: Option<Location>) -> Self {
        Self {
            value: Some(Box::new(value)),
            children: Vec::new(),
            loc,
        }
    }
}

/// Script text embedded in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedCode {
    /// The script exactly as it should be handed to the linter.
    pub code: String,
    /// Source location of the whole node, delimiters included.
    pub loc: Option<Location>,
}

impl EmbeddedCode {
    /// Creates a new embedded code payload.
    pub fn new(code: impl Into<String>, loc: Option<Location>) -> Self {
        Self {
            code: code.into(),
            loc,
        }
    }
}

/// The three kinds of embedded script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddedKind {
    Block,
    Value,
    Function,
}

impl EmbeddedKind {
    /// Returns true if the node's first source line is a delimiter line
    /// (an opening fence or brace) rather than script.
    #[inline]
    pub const fn is_fenced(self) -> bool {
        matches!(self, EmbeddedKind::Block | EmbeddedKind::Function)
    }

    /// Returns the kind name used by parsers.
    pub const fn as_str(self) -> &'static str {
        match self {
            EmbeddedKind::Block => "JavascriptBlock",
            EmbeddedKind::Value => "JavascriptValue",
            EmbeddedKind::Function => "Function",
        }
    }
}

/// Comment delimiters an annotation can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentSyntax {
    /// `<!-- ... -->`
    Html,
    /// `/* ... */`
    Block,
    /// `// ...`
    Line,
}

/// A comment node, possibly holding a linter directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Raw comment text, delimiters included.
    pub text: String,
    /// Source location.
    pub loc: Option<Location>,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(text: impl Into<String>, loc: Option<Location>) -> Self {
        Self {
            text: text.into(),
            loc,
        }
    }

    /// Detects the delimiters used by this comment.
    ///
    /// Returns `None` when the text is not a single well-formed comment.
    pub fn syntax(&self) -> Option<CommentSyntax> {
        let text = self.text.trim_end_matches(['\r', '\n']);
        if text.starts_with("<!--") && text.ends_with("-->") && text.len() >= 7 {
            Some(CommentSyntax::Html)
        } else if text.starts_with("/*") && text.ends_with("*/") && text.len() >= 4 {
            Some(CommentSyntax::Block)
        } else if text.starts_with("//") && !text.contains('\n') {
            Some(CommentSyntax::Line)
        } else {
            None
        }
    }

    /// Returns the comment text between its delimiters, untrimmed.
    pub fn body(&self) -> Option<&str> {
        let text = self.text.trim_end_matches(['\r', '\n']);
        match self.syntax()? {
            CommentSyntax::Html => text.get(4..text.len() - 3),
            CommentSyntax::Block => text.get(2..text.len() - 2),
            CommentSyntax::Line => text.get(2..),
        }
    }
}

/// A node of unknown kind, kept so traversal can still descend into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    /// Kind name reported by the parser.
    pub kind: String,
    /// Structural payload.
    pub container: Container,
}

impl Node {
    /// Returns the kind name of this node.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Program(_) => "Program",
            Node::Import(_) => "Import",
            Node::Object(_) => "Object",
            Node::Property(_) => "Property",
            Node::Document(_) => "Document",
            Node::Section(_) => "Section",
            Node::JavascriptBlock(_) => EmbeddedKind::Block.as_str(),
            Node::JavascriptValue(_) => EmbeddedKind::Value.as_str(),
            Node::Function(_) => EmbeddedKind::Function.as_str(),
            Node::Comment(_) => "Comment",
            Node::Unrecognized(node) => &node.kind,
        }
    }

    /// Returns the structural payload of container-like nodes.
    pub fn container(&self) -> Option<&Container> {
        match self {
            Node::Program(c)
            | Node::Import(c)
            | Node::Object(c)
            | Node::Property(c)
            | Node::Document(c)
            | Node::Section(c) => Some(c),
            Node::Unrecognized(node) => Some(&node.container),
            Node::JavascriptBlock(_)
            | Node::JavascriptValue(_)
            | Node::Function(_)
            | Node::Comment(_) => None,
        }
    }

    /// Returns the embedded script carried by this node, if any.
    pub fn as_embedded(&self) -> Option<(EmbeddedKind, &EmbeddedCode)> {
        match self {
            Node::JavascriptBlock(code) => Some((EmbeddedKind::Block, code)),
            Node::JavascriptValue(code) => Some((EmbeddedKind::Value, code)),
            Node::Function(code) => Some((EmbeddedKind::Function, code)),
            _ => None,
        }
    }

    /// Returns the annotation carried by a comment node.
    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            Node::Comment(annotation) => Some(annotation),
            _ => None,
        }
    }

    /// Returns the ordered children of this node.
    pub fn children(&self) -> &[Node] {
        self.container().map_or(&[], |c| c.children.as_slice())
    }

    /// Returns the nested value node of this node.
    pub fn nested_value(&self) -> Option<&Node> {
        self.container().and_then(|c| c.value.as_deref())
    }

    /// Returns the location of this node.
    pub fn loc(&self) -> Option<&Location> {
        match self {
            Node::JavascriptBlock(code) | Node::JavascriptValue(code) | Node::Function(code) => {
                code.loc.as_ref()
            }
            Node::Comment(annotation) => annotation.loc.as_ref(),
            other => other.container().and_then(|c| c.loc.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use rstest::rstest;

    #[test]
    fn test_kind_names() {
        let block = Node::JavascriptBlock(EmbeddedCode::new("a()", None));
        let unknown = Node::Unrecognized(Unrecognized {
            kind: "Signal".to_string(),
            container: Container::default(),
        });

        assert_eq!(block.kind_name(), "JavascriptBlock");
        assert_eq!(unknown.kind_name(), "Signal");
    }

    #[test]
    fn test_embedded_accessors() {
        let value = Node::JavascriptValue(EmbeddedCode::new("parent.width", None));
        let (kind, code) = value.as_embedded().unwrap();

        assert_eq!(kind, EmbeddedKind::Value);
        assert!(!kind.is_fenced());
        assert_eq!(code.code, "parent.width");
        assert!(value.children().is_empty());
        assert!(value.nested_value().is_none());
    }

    #[test]
    fn test_container_accessors() {
        let loc = Location::new(Position::new(0, 1, 1), Position::new(5, 1, 6));
        let property = Node::Property(Container::with_value(
            Node::JavascriptValue(EmbeddedCode::new("1 + 1", None)),
            Some(loc),
        ));

        assert!(property.as_embedded().is_none());
        assert_eq!(property.loc(), Some(&loc));
        assert_eq!(property.nested_value().unwrap().kind_name(), "JavascriptValue");
    }

    #[rstest]
    #[case::html("<!-- eslint-disable -->", Some(CommentSyntax::Html), Some(" eslint-disable "))]
    #[case::html_trailing_newline("<!-- global foo -->\n", Some(CommentSyntax::Html), Some(" global foo "))]
    #[case::block("/* eslint semi: 2 */", Some(CommentSyntax::Block), Some(" eslint semi: 2 "))]
    #[case::line("// eslint-skip", Some(CommentSyntax::Line), Some(" eslint-skip"))]
    #[case::not_a_comment("<div>", None, None)]
    #[case::unterminated("<!-- eslint", None, None)]
    #[case::empty_html("<!---->", Some(CommentSyntax::Html), Some(""))]
    fn test_annotation_body(
        #[case] text: &str,
        #[case] syntax: Option<CommentSyntax>,
        #[case] body: Option<&str>,
    ) {
        let annotation = Annotation::new(text, None);
        assert_eq!(annotation.syntax(), syntax);
        assert_eq!(annotation.body(), body);
    }
}
