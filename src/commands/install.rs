//! Install command - the full flow.
//!
//! Strictly sequential: stage, bootstrap, launcher, link, audit. A fatal
//! error halts the flow where it stands, with no rollback; the supported
//! recovery is re-running the whole install, and every step tolerates
//! partially-completed prior state.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;

use super::{cmd_post_install, cmd_stage};

/// Stage the distribution, then run the post-install hook.
pub fn cmd_install(config: &Config, distribution: &Path) -> Result<()> {
    cmd_stage(config, distribution)?;
    cmd_post_install(config)?;
    Ok(())
}
