//! The preprocess / postprocess pipeline.
//!
//! A lint cycle has two halves. [`Processor::preprocess`] parses a document
//! and returns a [`LintCycle`] holding one [`Block`] per embedded script;
//! the host lints every entry of [`LintCycle::sources`] and hands the message
//! groups, in the same order, to [`LintCycle::postprocess`].

use embedlint_ast::embedded_code;
use embedlint_parser::Parser;
use tracing::debug;

use crate::block_extractor::{Block, extract_block};
use crate::config::ProcessorConfig;
use crate::error::ProcessError;
use crate::linter::BlockLinter;
use crate::message::LintMessage;
use crate::translate::{MessageFilter, translate_message};

/// Extracts embedded scripts from documents and maps lint messages back.
pub struct Processor<P: Parser> {
    parser: P,
    config: ProcessorConfig,
}

impl<P: Parser> Processor<P> {
    /// Fixes produced by [`LintCycle::postprocess`] are safe to apply to the
    /// document.
    pub const SUPPORTS_AUTOFIX: bool = true;

    /// Creates a processor.
    pub fn new(parser: P, config: ProcessorConfig) -> Self {
        Self { parser, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Returns the parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Parses `text` and extracts its script blocks.
    pub fn preprocess(&self, text: &str) -> Result<LintCycle, ProcessError> {
        let filter = self.config.message_filter();

        let Some(tree) = self.parser.parse(text)? else {
            debug!("{} parser found an empty document", self.parser.name());
            return Ok(LintCycle::new(Vec::new(), filter));
        };

        let blocks: Vec<Block> = embedded_code(&tree)
            .filter_map(|visit| {
                extract_block(
                    text,
                    &visit,
                    self.parser.indent_style(),
                    self.config.indent_width,
                )
            })
            .collect();

        debug!("Extracted {} block(s)", blocks.len());
        Ok(LintCycle::new(blocks, filter))
    }

    /// Runs a whole cycle on `text`, linting every block with `linter`.
    pub fn lint(
        &self,
        text: &str,
        linter: &dyn BlockLinter,
    ) -> Result<Vec<LintMessage>, ProcessError> {
        let cycle = self.preprocess(text)?;

        let groups = cycle
            .sources()
            .iter()
            .map(|source| linter.lint(source))
            .collect::<Result<Vec<_>, _>>()?;

        cycle.postprocess(groups)
    }
}

/// The blocks extracted from one document, waiting for their messages.
#[derive(Debug, Clone)]
pub struct LintCycle {
    blocks: Vec<Block>,
    filter: MessageFilter,
}

impl LintCycle {
    /// Creates a cycle over already extracted blocks.
    pub fn new(blocks: Vec<Block>, filter: MessageFilter) -> Self {
        Self { blocks, filter }
    }

    /// Returns the extracted blocks.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the document has no blocks to lint.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the text to lint for each block, in block order.
    pub fn sources(&self) -> Vec<String> {
        self.blocks.iter().map(Block::source_text).collect()
    }

    /// Maps per-block message groups back onto the document.
    ///
    /// `groups[i]` holds the messages reported for `sources()[i]`.
    pub fn postprocess(
        self,
        groups: Vec<Vec<LintMessage>>,
    ) -> Result<Vec<LintMessage>, ProcessError> {
        if groups.len() != self.blocks.len() {
            return Err(ProcessError::GroupCountMismatch {
                expected: self.blocks.len(),
                actual: groups.len(),
            });
        }

        let filter = &self.filter;
        let reported: usize = groups.iter().map(Vec::len).sum();
        let messages: Vec<LintMessage> = self
            .blocks
            .iter()
            .zip(groups)
            .flat_map(|(block, group)| {
                group
                    .into_iter()
                    .filter_map(move |message| translate_message(block, message, filter))
            })
            .collect();

        if messages.len() < reported {
            debug!(
                "Filtered {} of {} message(s)",
                reported - messages.len(),
                reported
            );
        }

        Ok(messages)
    }
}
