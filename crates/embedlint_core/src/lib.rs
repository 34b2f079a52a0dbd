//! # embedlint_core
//!
//! Extraction of embedded scripts and remapping of lint messages for
//! embedlint.
//!
//! This crate provides:
//! - The `Processor`, which turns a document into one lintable source per
//!   embedded script and maps the linter's messages back onto the document
//! - Directive comments (`<!-- eslint ... -->`, `<!-- eslint-skip -->`)
//! - The `BlockLinter` boundary and a subprocess-backed `CommandLinter`
//! - Configuration loading, file discovery and fix application
//!
//! ## Example
//!
//! ```rust
//! use embedlint_core::{LintMessage, Processor, ProcessorConfig};
//! use embedlint_parser::MarkdownParser;
//!
//! let document = "# Usage\n\n```js\nvar x = 1\n```\n";
//! let processor = Processor::new(MarkdownParser::new(), ProcessorConfig::default());
//!
//! let cycle = processor.preprocess(document).unwrap();
//! assert_eq!(cycle.sources(), vec!["var x = 1\n"]);
//!
//! // The linter reports in block coordinates...
//! let reported = vec![vec![LintMessage::new("no-var", "Unexpected var.", 1, 1)]];
//!
//! // ...and postprocessing moves the message to the document.
//! let messages = cycle.postprocess(reported).unwrap();
//! assert_eq!((messages[0].line, messages[0].column), (4, 1));
//! ```

mod block_extractor;
mod config;
mod directive;
mod error;
pub mod file_finder;
mod fixer;
mod linter;
mod message;
mod processor;
pub mod range_map;
mod translate;

pub use block_extractor::{Block, Layout, extract_block};
pub use config::{CONFIG_FILES, LinterCommand, ParserCommand, ProcessorConfig};
pub use directive::{Directive, SKIP_DIRECTIVE};
pub use error::{LinterError, ParseError, ProcessError};
pub use file_finder::FileFinder;
pub use fixer::{FixerResult, apply_fixes_to_content, apply_fixes_to_file};
pub use linter::{
    BlockLinter, CommandLinter, DEFAULT_LINTER_ARGS, DEFAULT_LINTER_COMMAND, parse_linter_output,
};
pub use message::{Fix, LintMessage, Severity};
pub use processor::{LintCycle, Processor};
pub use range_map::{RangeEntry, RangeMap};
pub use translate::{MessageFilter, UNSATISFIABLE_RULES, translate_message};
