//! Installation health checks.
//!
//! Read-only inspection of an existing installation, reported as a list of
//! pass/warn/fail rows. Fail rows mean the install is broken and should be
//! re-run; warn rows are advisories (PATH not yet configured, tmux not
//! found) that never block anything.

use std::fs;
use std::os::unix::fs::PermissionsExt;

use crate::audit::{self, AuditOutcome, REMEDIATION_LINE};
use crate::config::Config;
use crate::fsutil;

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckResult {
    pub fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: None,
        }
    }

    pub fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    pub fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }

    pub fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all health checks.
pub struct DoctorReport {
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// True when no check failed (warnings allowed).
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    pub fn fail_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .count()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== multi-claude install health ===\n");
        for check in &self.checks {
            let icon = match check.status {
                CheckStatus::Pass => "ok  ",
                CheckStatus::Warn => "warn",
                CheckStatus::Fail => "FAIL",
            };
            match &check.details {
                Some(details) => println!("  [{icon}] {} - {}", check.name, details),
                None => println!("  [{icon}] {}", check.name),
            }
        }
        println!();
    }
}

/// Run all health checks against the given configuration.
///
/// `path_value` is the `PATH` snapshot to audit, passed explicitly so tests
/// can inject one.
pub fn run_doctor(config: &Config, path_value: Option<&std::ffi::OsStr>) -> DoctorReport {
    let mut checks = Vec::new();

    let state_dir = config.state_dir();
    if state_dir.is_dir() {
        checks.push(CheckResult::pass_with(
            "state directory",
            &state_dir.display().to_string(),
        ));
    } else {
        checks.push(CheckResult::fail(
            "state directory",
            &format!("{} not found. Run the installer.", state_dir.display()),
        ));
        return DoctorReport { checks };
    }

    checks.push(check_launcher(config));
    checks.push(check_link(config));
    checks.push(check_content(config));
    checks.push(check_path(config, path_value));
    checks.push(check_tmux());

    DoctorReport { checks }
}

fn check_launcher(config: &Config) -> CheckResult {
    let launcher = config.launcher_path();
    match fs::metadata(&launcher) {
        Ok(meta) if meta.is_file() => {
            if meta.permissions().mode() & 0o100 != 0 {
                CheckResult::pass_with("launcher", &launcher.display().to_string())
            } else {
                CheckResult::fail("launcher", "present but not executable")
            }
        }
        _ => CheckResult::fail("launcher", &format!("{} missing", launcher.display())),
    }
}

fn check_link(config: &Config) -> CheckResult {
    let link = config.command_link();
    if !link.symlink_metadata().map(|m| m.file_type().is_symlink()).unwrap_or(false) {
        return CheckResult::fail(
            "command link",
            &format!("{} is missing or not a symlink", link.display()),
        );
    }
    match fs::read_link(&link) {
        Ok(target) if target == config.launcher_path() => {
            CheckResult::pass_with("command link", &format!("-> {}", target.display()))
        }
        Ok(target) => CheckResult::fail(
            "command link",
            &format!("points at {} instead of the launcher", target.display()),
        ),
        Err(e) => CheckResult::fail("command link", &format!("unreadable: {e}")),
    }
}

/// Compare launcher bytes against the staged main entry point.
fn check_content(config: &Config) -> CheckResult {
    let staged = config.stage_paths().main_entry();
    if !staged.is_file() {
        // A foreign prefix (package-manager-owned) may not be readable from
        // here; that is not an install defect.
        return CheckResult::warn(
            "launcher content",
            &format!("staged entry point {} not readable, skipping", staged.display()),
        );
    }
    let launcher = config.launcher_path();
    match (fsutil::hash_file(&launcher), fsutil::hash_file(&staged)) {
        (Ok(a), Ok(b)) if a == b => CheckResult::pass_with("launcher content", "matches stage"),
        (Ok(_), Ok(_)) => CheckResult::fail(
            "launcher content",
            "differs from the staged entry point; re-run the installer",
        ),
        (Err(e), _) | (_, Err(e)) => CheckResult::fail("launcher content", &e.to_string()),
    }
}

fn check_path(config: &Config, path_value: Option<&std::ffi::OsStr>) -> CheckResult {
    match audit::audit_path(&config.home_dir, path_value) {
        AuditOutcome::Ok => CheckResult::pass("PATH"),
        AuditOutcome::Missing => CheckResult::warn(
            "PATH",
            &format!(
                "{} is not on PATH. Add: {}",
                config.user_bin_dir().display(),
                REMEDIATION_LINE
            ),
        ),
    }
}

fn check_tmux() -> CheckResult {
    // Advisory only: the payload needs tmux at runtime, but declaring the
    // dependency is the host package manager's job.
    match which::which("tmux") {
        Ok(path) => CheckResult::pass_with("tmux", &path.display().to_string()),
        Err(_) => CheckResult::warn("tmux", "not found on PATH; multi-claude needs it at runtime"),
    }
}
