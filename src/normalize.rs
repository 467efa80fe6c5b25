//! Cosmetic cleanup applied to every resolved file body
//!
//! Three rewrites, in this order:
//!
//! 1. Every occurrence of the guard marker is removed. Single inclusion is
//!    already guaranteed by the amalgamator's visited set.
//! 2. Decorative banner comments (`//===----===//` ... `//===----===//`) are
//!    removed, from an opening banner line through the next one.
//! 3. Runs of three or more blank lines collapse to a single blank line.
//!
//! Banner removal runs before blank-line collapsing so the lines a banner
//! leaves behind are collapsed in the same pass.

use regex::Regex;

use crate::error::Result;

const BANNER_PATTERN: &str = r"(?s)/+[=-]+/+.*?/+[=-]+/+";
const BLANK_RUN_PATTERN: &str = r"(?m)(?:^[\t ]*\r?\n){3,}";

/// Text cleanup shared across a run
#[derive(Debug, Clone)]
pub struct Normalizer {
    guard_marker: String,
    banner: Regex,
    blank_run: Regex,
}

impl Normalizer {
    /// Create a normalizer that strips `guard_marker`
    pub fn new(guard_marker: impl Into<String>) -> Result<Self> {
        Ok(Self {
            guard_marker: guard_marker.into(),
            banner: Regex::new(BANNER_PATTERN)?,
            blank_run: Regex::new(BLANK_RUN_PATTERN)?,
        })
    }

    /// The marker removed from every body
    pub fn guard_marker(&self) -> &str {
        &self.guard_marker
    }

    /// Apply all three rewrites
    pub fn normalize(&self, text: &str) -> String {
        let text = self.strip_guards(text);
        let text = self.strip_banners(&text);
        self.collapse_blank_lines(&text)
    }

    /// Remove every occurrence of the guard marker
    pub fn strip_guards(&self, text: &str) -> String {
        text.replace(&self.guard_marker, "")
    }

    /// Remove banner comments, each through the next closing banner
    pub fn strip_banners(&self, text: &str) -> String {
        self.banner.replace_all(text, "").into_owned()
    }

    /// Collapse runs of three or more blank lines into one blank line
    pub fn collapse_blank_lines(&self, text: &str) -> String {
        self.blank_run.replace_all(text, "\n").into_owned()
    }
}
