//! Environment audit: is `<home>/bin` on the command search path?
//!
//! Pure and read-only. The check runs against an explicit `PATH` snapshot
//! handed in by the caller, segment by segment via `std::env::split_paths`
//! (a substring match would accept lookalikes such as `<home>/binx`).
//! A snapshot can only approximate live shell state (the install shell
//! inherited its `PATH` before we created `~/bin`), so the result is
//! advisory, never an error.

use std::ffi::OsStr;
use std::path::Path;

/// The exact line users must add when `<home>/bin` is absent.
pub const REMEDIATION_LINE: &str = "export PATH=\"$HOME/bin:$PATH\"";

/// Outcome of the path audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// `<home>/bin` appears as a segment of the snapshot.
    Ok,
    /// `<home>/bin` is absent; remediation is needed.
    Missing,
}

/// Check whether `<home>/bin` is a segment of the given `PATH` snapshot.
pub fn audit_path(home_dir: &Path, path_value: Option<&OsStr>) -> AuditOutcome {
    let bin_dir = home_dir.join("bin");
    let found = path_value
        .map(|value| std::env::split_paths(value).any(|segment| segment == bin_dir))
        .unwrap_or(false);

    if found {
        AuditOutcome::Ok
    } else {
        AuditOutcome::Missing
    }
}

/// Print the audit result: a confirmation, or the remediation block naming
/// the exact line to add.
pub fn print_report(home_dir: &Path, outcome: AuditOutcome) {
    println!("PATH check:");
    match outcome {
        AuditOutcome::Ok => {
            println!("  OK: {} is on PATH", home_dir.join("bin").display());
        }
        AuditOutcome::Missing => {
            println!("  {} is not on PATH.", home_dir.join("bin").display());
            println!("  Add this line to ~/.zshrc or ~/.bashrc:");
            println!("    {REMEDIATION_LINE}");
            println!("  Then restart your terminal.");
        }
    }
}
