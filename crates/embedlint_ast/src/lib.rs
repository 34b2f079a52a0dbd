//! # embedlint_ast
//!
//! Document tree definitions for embedlint.
//!
//! A parsed document is a tree of [`Node`]s. Every node kind the document
//! parsers know about has its own variant, so code that needs to find
//! embedded scripts can match on the tree instead of probing loosely typed
//! JSON objects.
//!
//! ## Example
//!
//! ```rust
//! use embedlint_ast::{Container, EmbeddedCode, Node, embedded_code};
//!
//! let tree = Node::Document(Container::new(
//!     vec![Node::JavascriptBlock(EmbeddedCode::new("var x = 1;", None))],
//!     None,
//! ));
//!
//! let visits: Vec<_> = embedded_code(&tree).collect();
//! assert_eq!(visits.len(), 1);
//! assert_eq!(visits[0].depth, 1);
//! ```

mod node;
mod span;
pub mod walk;

pub use node::{Annotation, CommentSyntax, Container, EmbeddedCode, EmbeddedKind, Node, Unrecognized};
pub use span::{Location, Position};
pub use walk::{EmbeddedCodeIter, Visit, embedded_code};
