//! # Output Configuration
//!
//! Controls how command results are printed: colored status labels when the
//! terminal supports them, plain bracketed labels otherwise.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colored labels should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` forces colors on (overriding `NO_COLOR`), `never` forces them
    /// off, anything else detects from the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Label for a successful step
    pub fn ok(&self, label: &str) -> String {
        if self.use_color {
            style(label).green().bold().to_string()
        } else {
            format!("[{}]", label)
        }
    }

    /// Label for a failed step
    pub fn fail(&self, label: &str) -> String {
        if self.use_color {
            style(label).red().bold().to_string()
        } else {
            format!("[{}]", label)
        }
    }

    /// De-emphasized detail text
    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        assert!(OutputConfig::from_env_and_flag("always").use_color);
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
    }

    #[test]
    fn test_color_never() {
        assert!(!OutputConfig::from_env_and_flag("never").use_color);
    }

    #[test]
    fn test_plain_labels() {
        let config = OutputConfig { use_color: false };
        assert_eq!(config.ok("wrote"), "[wrote]");
        assert_eq!(config.fail("stale"), "[stale]");
        assert_eq!(config.dim("3 files"), "3 files");
    }

    #[test]
    fn test_colored_labels_keep_text() {
        let config = OutputConfig { use_color: true };
        assert!(config.ok("wrote").contains("wrote"));
        assert!(config.fail("stale").contains("stale"));
    }
}
