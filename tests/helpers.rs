//! Shared test utilities for multi-claude-install tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use multi_claude_install::config::Config;
use multi_claude_install::distribution::Distribution;

/// Test environment with a fake home, stage prefix, and distribution.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Fake user home directory
    pub home: PathBuf,
    /// Stage prefix (simulated package-manager territory)
    pub prefix: PathBuf,
    /// Distribution source directory
    pub dist: PathBuf,
}

impl TestEnv {
    /// Create a test environment with an empty home and a complete
    /// distribution fixture.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let home = base.join("home");
        let prefix = base.join("prefix");
        let dist = base.join("dist");
        fs::create_dir_all(&home).expect("Failed to create home dir");
        fs::create_dir_all(&dist).expect("Failed to create dist dir");
        write_distribution(&dist, "v1");

        Self {
            _temp_dir: temp_dir,
            home,
            prefix,
            dist,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            home_dir: self.home.clone(),
            prefix: self.prefix.clone(),
        }
    }

    pub fn distribution(&self) -> Distribution {
        Distribution::new(&self.dist)
    }

    /// Rewrite the distribution fixture with a new content tag, simulating
    /// a new release.
    pub fn retag_distribution(&self, tag: &str) {
        write_distribution(&self.dist, tag);
    }
}

/// Populate a complete distribution: four scripts, instructions tree,
/// template document. `tag` is baked into every file for content checks.
pub fn write_distribution(dist: &Path, tag: &str) {
    for script in ["multi-claude", "setup.sh", "agent-send.sh", "install.sh"] {
        let path = dist.join(script);
        fs::write(&path, format!("#!/bin/bash\n# {script} {tag}\n")).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    }
    let instructions = dist.join("instructions");
    fs::create_dir_all(instructions.join("agents")).expect("create instructions");
    fs::write(instructions.join("boss.md"), format!("boss {tag}")).expect("write boss.md");
    fs::write(instructions.join("agents/worker.md"), format!("worker {tag}"))
        .expect("write worker.md");
    fs::write(dist.join("CLAUDE.md"), format!("# CLAUDE {tag}")).expect("write CLAUDE.md");
}

/// Assert a path exists and is a regular file with the owner-exec bit set.
pub fn assert_executable(path: &Path) {
    let meta = fs::metadata(path)
        .unwrap_or_else(|e| panic!("{} should exist: {e}", path.display()));
    assert!(meta.is_file(), "{} should be a regular file", path.display());
    assert!(
        meta.permissions().mode() & 0o100 != 0,
        "{} should be executable",
        path.display()
    );
}

/// Assert a path is a symlink resolving to `target`.
pub fn assert_symlink(link: &Path, target: &Path) {
    let meta = link
        .symlink_metadata()
        .unwrap_or_else(|e| panic!("{} should exist: {e}", link.display()));
    assert!(
        meta.file_type().is_symlink(),
        "{} should be a symlink",
        link.display()
    );
    assert_eq!(
        fs::read_link(link).expect("read_link"),
        target,
        "{} should point at {}",
        link.display(),
        target.display()
    );
}
