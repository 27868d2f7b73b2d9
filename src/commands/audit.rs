//! Audit command - PATH check only.

use anyhow::Result;

use crate::audit;
use crate::config::Config;

/// Check the current `PATH` snapshot and print the result. Exits
/// successfully either way; a missing segment is an advisory.
pub fn cmd_audit(config: &Config) -> Result<()> {
    let outcome = audit::audit_path(&config.home_dir, std::env::var_os("PATH").as_deref());
    audit::print_report(&config.home_dir, outcome);
    Ok(())
}
