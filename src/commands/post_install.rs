//! Post-install command - the package manager's post-install hook.
//!
//! Bootstraps the per-user state directory from an already-staged prefix,
//! materializes the launcher, wires up the command link, then audits PATH
//! and prints the completion banner. The audit can only advise; it never
//! fails the run.

use anyhow::{Context, Result};

use crate::audit::{self, AuditOutcome};
use crate::bootstrap;
use crate::config::Config;
use crate::launcher;
use crate::link;

/// Run the user-side half of the install flow.
pub fn cmd_post_install(config: &Config) -> Result<()> {
    let stage = config.stage_paths();

    println!("Bootstrapping {}...", config.state_dir().display());
    let state_dir =
        bootstrap::bootstrap_home(&stage, &config.home_dir).context("bootstrapping home")?;

    println!("Writing launcher...");
    let launcher_path =
        launcher::materialize_launcher(&stage, &state_dir).context("materializing launcher")?;

    println!("Linking {}...", config.command_link().display());
    link::link_command(&launcher_path, &config.home_dir).context("linking command")?;

    let outcome = audit::audit_path(&config.home_dir, std::env::var_os("PATH").as_deref());
    print_banner(config, outcome);
    Ok(())
}

/// Completion banner, PATH status included.
fn print_banner(config: &Config, outcome: AuditOutcome) {
    println!();
    println!("=== multi-claude installed ===");
    println!();
    audit::print_report(&config.home_dir, outcome);
    println!();
    println!("Usage:");
    println!("  Run `multi-claude` from any directory.");
    println!();
    println!("Teardown:");
    println!("  `multi-claude --exit` shuts the whole system down.");
    println!();
}
