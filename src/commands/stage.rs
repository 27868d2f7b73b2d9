//! Stage command - the package manager's install hook.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::distribution::Distribution;
use crate::stage;

/// Stage a distribution directory into the configured prefix.
pub fn cmd_stage(config: &Config, distribution: &Path) -> Result<()> {
    let dist = Distribution::new(distribution);
    let paths = config.stage_paths();

    println!("Staging {} -> {}", distribution.display(), config.prefix.display());
    stage::stage(&dist, &paths).context("staging distribution")?;
    println!("Staged.");
    Ok(())
}
