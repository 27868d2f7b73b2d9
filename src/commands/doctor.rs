//! Doctor command - installation health report.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::doctor;

/// Run all health checks and print the report. Fails (nonzero exit) only
/// when a check reports Fail; warnings are advisories.
pub fn cmd_doctor(config: &Config) -> Result<()> {
    let report = doctor::run_doctor(config, std::env::var_os("PATH").as_deref());
    report.print();

    if !report.all_passed() {
        bail!(
            "{} check(s) failed. Re-run the installer to repair.",
            report.fail_count()
        );
    }
    Ok(())
}
