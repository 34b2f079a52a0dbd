//! Depth-first search for embedded script nodes.
//!
//! The walk is pre-order and follows a node's nested value before its
//! children, which is document order for every parser we support. Embedded
//! nodes are reported and not descended into.

use crate::{EmbeddedCode, EmbeddedKind, Node};

/// One embedded script node found by [`embedded_code`].
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// The embedded node itself.
    pub node: &'a Node,
    /// Kind of embedded script.
    pub kind: EmbeddedKind,
    /// Script payload of the node.
    pub code: &'a EmbeddedCode,
    /// Containment depth; the root is at depth 0.
    pub depth: usize,
    /// Siblings that come before the node in its parent's child list.
    ///
    /// Empty when the node was reached through a nested value.
    pub preceding: &'a [Node],
}

struct Frame<'a> {
    node: &'a Node,
    depth: usize,
    preceding: &'a [Node],
}

/// Lazy iterator over the embedded script nodes of a tree.
pub struct EmbeddedCodeIter<'a> {
    stack: Vec<Frame<'a>>,
}

/// Returns every embedded script node under `root`, in document order.
pub fn embedded_code(root: &Node) -> EmbeddedCodeIter<'_> {
    EmbeddedCodeIter {
        stack: vec![Frame {
            node: root,
            depth: 0,
            preceding: &[],
        }],
    }
}

impl<'a> Iterator for EmbeddedCodeIter<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if let Some((kind, code)) = frame.node.as_embedded() {
                return Some(Visit {
                    node: frame.node,
                    kind,
                    code,
                    depth: frame.depth,
                    preceding: frame.preceding,
                });
            }

            // Pushed in reverse so the nested value pops first, then children in order.
            let children = frame.node.children();
            for index in (0..children.len()).rev() {
                self.stack.push(Frame {
                    node: &children[index],
                    depth: frame.depth + 1,
                    preceding: &children[..index],
                });
            }
            if let Some(value) = frame.node.nested_value() {
                self.stack.push(Frame {
                    node: value,
                    depth: frame.depth + 1,
                    preceding: &[],
                });
            }
        }

        None
    }
}
