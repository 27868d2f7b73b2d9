//! Configuration for the install flow.
//!
//! Every operation receives paths through an explicit [`Config`] rather
//! than looking up the home directory or environment on its own, so tests
//! can inject fake homes and prefixes. Environment variables override
//! defaults; CLI flags override both (wired up in `main`).

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::stage::StagePaths;

/// Fixed name of the per-user state directory under home.
pub const STATE_DIR_NAME: &str = ".multi-claude";

/// Fixed name of the launcher inside the state directory.
pub const LAUNCHER_NAME: &str = "multi-claude-global";

/// Fixed name of the command link inside the user bin directory.
pub const COMMAND_NAME: &str = "multi-claude";

/// Resolved installer configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// User home directory; everything user-side lives under it.
    pub home_dir: PathBuf,
    /// Stage prefix; the package manager owns this directory.
    pub prefix: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Precedence, highest first:
    /// 1. `home`/`prefix` arguments (CLI flags)
    /// 2. `MULTI_CLAUDE_HOME` / `MULTI_CLAUDE_PREFIX` environment variables
    ///    (a `.env` file is loaded into the environment by `main`)
    /// 3. `dirs::home_dir()` and a versioned per-user prefix under
    ///    `~/.local/share/multi-claude`
    pub fn load(home: Option<PathBuf>, prefix: Option<PathBuf>) -> Result<Self> {
        let home_dir = match home.or_else(|| env_path("MULTI_CLAUDE_HOME")) {
            Some(dir) => dir,
            None => match dirs::home_dir() {
                Some(dir) => dir,
                None => {
                    bail!("cannot determine home directory; pass --home or set MULTI_CLAUDE_HOME")
                }
            },
        };

        let prefix = prefix
            .or_else(|| env_path("MULTI_CLAUDE_PREFIX"))
            .unwrap_or_else(|| {
                home_dir
                    .join(".local/share/multi-claude")
                    .join(env!("CARGO_PKG_VERSION"))
            });

        Ok(Self { home_dir, prefix })
    }

    /// Package-manager-owned stage directories under the prefix.
    pub fn stage_paths(&self) -> StagePaths {
        StagePaths::under_prefix(&self.prefix)
    }

    /// Per-user state directory: `<home>/.multi-claude`.
    pub fn state_dir(&self) -> PathBuf {
        self.home_dir.join(STATE_DIR_NAME)
    }

    /// Launcher path inside the state directory.
    pub fn launcher_path(&self) -> PathBuf {
        self.state_dir().join(LAUNCHER_NAME)
    }

    /// User command directory: `<home>/bin`.
    pub fn user_bin_dir(&self) -> PathBuf {
        self.home_dir.join("bin")
    }

    /// Command link path: `<home>/bin/multi-claude`.
    pub fn command_link(&self) -> PathBuf {
        self.user_bin_dir().join(COMMAND_NAME)
    }

    /// Print configuration for `show`.
    pub fn print(&self) {
        let stage = self.stage_paths();
        println!("Configuration:");
        println!("  home:          {}", self.home_dir.display());
        println!("  prefix:        {}", self.prefix.display());
        println!("  stage bin:     {}", stage.bin.display());
        println!("  stage share:   {}", stage.share.display());
        println!("  stage libexec: {}", stage.libexec.display());
        println!("  state dir:     {}", self.state_dir().display());
        println!("  launcher:      {}", self.launcher_path().display());
        println!("  link:          {}", self.command_link().display());
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
