//! Linter directives carried by document comments.
//!
//! A comment such as `<!-- eslint-disable no-alert -->` placed right before a
//! script block configures the linter for that block. It is handed to the
//! linter as a synthetic `/* ... */` comment at the top of the extracted text.

use std::sync::OnceLock;

use embedlint_ast::Annotation;
use regex::Regex;

/// Body of the directive that excludes the next block from linting.
pub const SKIP_DIRECTIVE: &str = "eslint-skip";

static DIRECTIVE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn directive_pattern() -> &'static Regex {
    DIRECTIVE_PATTERN.get_or_init(|| {
        Regex::new(r"^(eslint\b|global\s)").expect("directive pattern is a valid regex")
    })
}

/// A directive found in a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// A linter configuration comment; holds the comment body, untrimmed.
    Config(String),
    /// Do not lint the next block.
    Skip,
}

impl Directive {
    /// Reads the directive held by an annotation, if any.
    pub fn parse(annotation: &Annotation) -> Option<Self> {
        let body = annotation.body()?;
        let trimmed = body.trim();

        if !directive_pattern().is_match(trimmed) {
            return None;
        }

        if trimmed == SKIP_DIRECTIVE {
            Some(Directive::Skip)
        } else {
            Some(Directive::Config(body.to_string()))
        }
    }

    /// Returns the synthetic comment injected into the extracted text.
    pub fn synthetic_comment(&self) -> Option<String> {
        match self {
            Directive::Config(body) => Some(format!("/*{}*/", body)),
            Directive::Skip => None,
        }
    }
}
