//! Run orchestration
//!
//! Ties configuration, the on-disk source tree and the amalgamator together.
//! Commands call into this module; it never prints, only logs.

use log::info;

use crate::amalgamator::{Amalgamation, Amalgamator};
use crate::config::Config;
use crate::error::Result;
use crate::filesystem::DiskTree;
use crate::write;

/// Amalgamate the tree described by `config` in memory
pub fn assemble(config: &Config) -> Result<Amalgamation> {
    config.validate()?;
    let tree = DiskTree::new(&config.include_root);
    let mut amalgamator = Amalgamator::from_config(&tree, config)?;

    info!(
        "Amalgamating {} (scope '{}')",
        tree.base().join(&config.source_dir).display(),
        config.scope_prefix
    );
    amalgamator.amalgamate(&config.source_dir)
}

/// Amalgamate and write the output file
pub fn build(config: &Config) -> Result<Amalgamation> {
    let amalgamation = assemble(config)?;
    write::execute(&amalgamation, &config.output)?;
    Ok(amalgamation)
}

/// Amalgamate and compare against the existing output file
pub fn check(config: &Config) -> Result<Amalgamation> {
    let amalgamation = assemble(config)?;
    write::verify(&amalgamation, &config.output)?;
    Ok(amalgamation)
}
