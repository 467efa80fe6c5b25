//! Writing the amalgamated header to disk
//!
//! The header is written in a single call, and only once the whole tree has
//! been resolved, so a failed run never leaves a truncated artifact behind.

use std::fs;
use std::path::Path;

use log::info;

use crate::amalgamator::Amalgamation;
use crate::error::{Error, Result};

/// Write `amalgamation` to `output_path`, creating parent directories as
/// needed
pub fn execute(amalgamation: &Amalgamation, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(output_path, &amalgamation.text).map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} ({} files, {} bytes)",
        output_path.display(),
        amalgamation.files.len(),
        amalgamation.text.len()
    );
    Ok(())
}

/// Check that `output_path` holds exactly `amalgamation`
pub fn verify(amalgamation: &Amalgamation, output_path: &Path) -> Result<()> {
    let stale = match fs::read(output_path) {
        Ok(existing) => existing != amalgamation.text.as_bytes(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(source) => {
            return Err(Error::Read {
                path: output_path.to_path_buf(),
                source,
            })
        }
    };

    if stale {
        return Err(Error::Stale {
            output: output_path.to_path_buf(),
        });
    }
    Ok(())
}
