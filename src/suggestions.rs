//! # Error Suggestions
//!
//! Turns library errors into messages that say what went wrong AND how to fix
//! it. Commands pass every failure through [`explain`] before returning it.

use std::path::Path;

use crate::config::Config;
use crate::error::Error;
use crate::path::to_slash;

/// Generate an error for an explicitly named configuration file that does
/// not exist.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Omit -c/--config to use .amalgamate.yaml or the built-in defaults\n\
         hint: Check the AMALGAMATE_CONFIG environment variable",
        path = path.display()
    )
}

/// Attach hints to a library error, using `config` to point at the setting
/// most likely involved.
pub fn explain(error: Error, config: &Config) -> anyhow::Error {
    let hint = match &error {
        Error::MissingInclude { path, .. } => Some(format!(
            "hint: '{}' is resolved against the include root '{}'\n\
             hint: Includes starting with '{}' are inlined; adjust --scope-prefix to leave it external",
            path.display(),
            config.include_root.display(),
            config.scope_prefix
        )),
        Error::Walk { .. } => Some(format!(
            "hint: The source directory '{}' is relative to the include root '{}'",
            config.source_dir.display(),
            config.include_root.display()
        )),
        Error::Encoding { .. } => error.path().map(|path| {
            format!(
                "hint: Add an exclude glob such as '{}' to the configuration to skip non-text files",
                to_slash(path)
            )
        }),
        Error::Stale { .. } => {
            Some("hint: Run 'amalgamate build' and commit the regenerated header".to_string())
        }
        _ => None,
    };

    match hint {
        Some(hint) => anyhow::anyhow!("{error}\n\n{hint}"),
        None => anyhow::Error::new(error),
    }
}
