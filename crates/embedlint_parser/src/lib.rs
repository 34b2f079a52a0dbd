//! # embedlint_parser
//!
//! Parser abstraction layer for embedlint.
//!
//! This crate provides:
//! - A `Parser` trait turning document text into an [`embedlint_ast::Node`] tree
//! - `ExternalParser`, which runs a document parser as a subprocess and reads
//!   its JSON tree from stdout
//! - `MarkdownParser`, a built-in parser for fenced script blocks in Markdown
//! - `process::wait_with_input`, which feeds a child's stdin while draining
//!   its output
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedlint_parser::{ExternalParser, Parser};
//!
//! let parser = ExternalParser::new("qml-parser");
//! let tree = parser.parse("Item { width: parent.width / 2 }")?;
//! ```

mod error;
mod external;
mod json;
mod markdown;
pub mod process;
mod traits;

pub use error::ParseError;
pub use external::{ExternalParser, ParserInput};
pub use markdown::MarkdownParser;
pub use traits::{IndentStyle, Parser};
