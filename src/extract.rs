//! # Include Extraction
//!
//! Finds `#include "..."` directives in a file's text and reports the ones
//! that point inside the tracked scope. Only this one directive form is
//! recognized: optional leading spaces or tabs, `#`, optional spaces or tabs,
//! `include`, at least one space or tab, then a double-quoted path. Angle
//! bracket includes and anything macro-based never match.
//!
//! Extraction is a pure function of the text. The text itself is not
//! rewritten; callers substitute over the reported byte spans.

use std::ops::Range;
use std::path::Path;

use regex::Regex;

use crate::error::Result;

const INCLUDE_PATTERN: &str = r#"(?m)^[\t ]*#[\t ]*include[\t ]+"([^"\n]+)""#;

/// One matched include directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// The whole matched text, leading whitespace included
    pub text: String,
    /// The quoted path, verbatim
    pub target: String,
    /// Byte range of `text` within the scanned file
    pub span: Range<usize>,
    /// Whether `target` starts with the scope prefix
    pub in_scope: bool,
}

impl IncludeDirective {
    /// The target as a path
    pub fn target_path(&self) -> &Path {
        Path::new(&self.target)
    }
}

/// Scans text for include directives and classifies them against a scope
/// prefix
#[derive(Debug, Clone)]
pub struct IncludeExtractor {
    pattern: Regex,
    scope_prefix: String,
}

impl IncludeExtractor {
    /// Create an extractor that treats targets starting with `scope_prefix`
    /// as in-scope
    pub fn new(scope_prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(INCLUDE_PATTERN)?,
            scope_prefix: scope_prefix.into(),
        })
    }

    /// Whether an include target is resolved by the amalgamator
    pub fn is_in_scope(&self, target: &str) -> bool {
        target.starts_with(&self.scope_prefix)
    }

    /// Every directive in `text`, in source order, in-scope or not
    pub fn extract_all(&self, text: &str) -> Vec<IncludeDirective> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let target = caps.get(1)?.as_str();
                Some(IncludeDirective {
                    text: whole.as_str().to_string(),
                    target: target.to_string(),
                    span: whole.range(),
                    in_scope: self.is_in_scope(target),
                })
            })
            .collect()
    }

    /// The in-scope directives in `text`, in source order.
    ///
    /// Repeated identical directives are each reported.
    pub fn extract(&self, text: &str) -> Vec<IncludeDirective> {
        self.extract_all(text)
            .into_iter()
            .filter(|directive| directive.in_scope)
            .collect()
    }
}
