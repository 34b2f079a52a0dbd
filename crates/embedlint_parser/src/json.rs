//! Decoding of the JSON tree printed by external parsers.
//!
//! Each node looks like
//! `{ "kind": ..., "value" | "body": ..., "children": [...], "loc": { "start": {...}, "end": {...} } }`
//! where `value` is either script text or a nested node.

use embedlint_ast::{
    Annotation, Container, EmbeddedCode, EmbeddedKind, Location, Node, Position, Unrecognized,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::ParseError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    kind: String,
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(default)]
    body: Option<RawValue>,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
    #[serde(default)]
    loc: Option<RawLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Node(Box<RawNode>),
    Text(String),
    Other(serde_json::Value),
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    start: Option<RawPosition>,
    end: Option<RawPosition>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPosition {
    offset: Option<usize>,
    line: Option<u32>,
    column: Option<u32>,
}

impl RawPosition {
    fn into_position(self) -> Option<Position> {
        Some(Position::new(self.offset?, self.line?, self.column?))
    }
}

impl RawLocation {
    fn into_location(self) -> Option<Location> {
        let loc = Location::new(self.start?.into_position()?, self.end?.into_position()?);
        (!loc.is_inverted()).then_some(loc)
    }
}

/// Decodes parser stdout. `null` means an empty document.
pub(crate) fn decode_tree(output: &[u8]) -> Result<Option<Node>, ParseError> {
    let raw: Option<RawNode> = serde_json::from_slice(output)
        .map_err(|e| ParseError::invalid_output(format!("malformed JSON tree: {}", e)))?;
    Ok(raw.map(RawNode::into_node))
}

impl RawValue {
    fn into_text(self) -> Option<String> {
        match self {
            RawValue::Text(text) => Some(text),
            RawValue::Node(_) | RawValue::Other(_) => None,
        }
    }
}

enum Shape {
    Embedded(EmbeddedKind),
    Comment,
    Structural(fn(Container) -> Node),
    Unknown,
}

fn shape_of(kind: &str) -> Shape {
    match kind {
        "JavascriptBlock" => Shape::Embedded(EmbeddedKind::Block),
        "JavascriptValue" => Shape::Embedded(EmbeddedKind::Value),
        "Function" => Shape::Embedded(EmbeddedKind::Function),
        "Comment" => Shape::Comment,
        "Program" => Shape::Structural(Node::Program),
        "Import" => Shape::Structural(Node::Import),
        "Object" => Shape::Structural(Node::Object),
        "Property" => Shape::Structural(Node::Property),
        _ => Shape::Unknown,
    }
}

impl RawNode {
    pub(crate) fn into_node(self) -> Node {
        let loc = self.loc.and_then(RawLocation::into_location);
        let shape = shape_of(&self.kind);

        match shape {
            Shape::Embedded(kind) => {
                let code = self
                    .value
                    .and_then(RawValue::into_text)
                    .or_else(|| self.body.and_then(RawValue::into_text));
                let Some(code) = code else {
                    warn!("`{}` node has no script text, skipping it", self.kind);
                    return Node::Unrecognized(Unrecognized {
                        kind: self.kind,
                        container: Container::new(Vec::new(), loc),
                    });
                };
                let code = EmbeddedCode::new(code, loc);
                match kind {
                    EmbeddedKind::Block => Node::JavascriptBlock(code),
                    EmbeddedKind::Value => Node::JavascriptValue(code),
                    EmbeddedKind::Function => Node::Function(code),
                }
            }
            Shape::Comment => {
                let text = self.value.and_then(RawValue::into_text).unwrap_or_default();
                Node::Comment(Annotation::new(text, loc))
            }
            Shape::Structural(_) | Shape::Unknown => {
                let container = Container {
                    value: match self.value {
                        Some(RawValue::Node(node)) => Some(Box::new(node.into_node())),
                        _ => None,
                    },
                    children: self
                        .children
                        .unwrap_or_default()
                        .into_iter()
                        .map(RawNode::into_node)
                        .collect(),
                    loc,
                };
                if let Shape::Structural(build) = shape {
                    build(container)
                } else {
                    debug!("Unrecognized node kind `{}`", self.kind);
                    Node::Unrecognized(Unrecognized {
                        kind: self.kind,
                        container,
                    })
                }
            }
        }
    }
}
