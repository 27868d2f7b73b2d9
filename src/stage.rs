//! Package staging: copy the distribution into manager-owned directories.
//!
//! Mirrors the package manager's install hook. Copies only; the source
//! distribution is never modified, and no user state is touched.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::distribution::{self, Distribution};
use crate::error::Result;
use crate::fsutil;

/// Name the template document is staged under.
pub const STAGED_TEMPLATE: &str = "CLAUDE_template.md";

/// Package-manager-owned stage directories. Their lifetime is
/// install..uninstall; the package manager owns the prefix.
#[derive(Debug, Clone, Serialize)]
pub struct StagePaths {
    /// Staged executables.
    pub bin: PathBuf,
    /// Staged shared resources (instructions tree, template).
    pub share: PathBuf,
    /// Staged library resources (legacy installer script).
    pub libexec: PathBuf,
}

impl StagePaths {
    /// Conventional layout under a single prefix.
    pub fn under_prefix(prefix: &Path) -> Self {
        Self {
            bin: prefix.join("bin"),
            share: prefix.join("share"),
            libexec: prefix.join("libexec"),
        }
    }

    /// Staged main entry point, source of the launcher's bytes.
    pub fn main_entry(&self) -> PathBuf {
        self.bin.join(distribution::MAIN_ENTRY)
    }

    pub fn setup_script(&self) -> PathBuf {
        self.bin.join(distribution::SETUP_SCRIPT)
    }

    pub fn messaging_script(&self) -> PathBuf {
        self.bin.join(distribution::MESSAGING_SCRIPT)
    }

    pub fn template_doc(&self) -> PathBuf {
        self.share.join(STAGED_TEMPLATE)
    }

    pub fn instructions_dir(&self) -> PathBuf {
        self.share.join(distribution::INSTRUCTIONS_DIR)
    }
}

/// Stage a distribution into the given stage directories.
///
/// Validates the distribution first: a missing member fails with a
/// `Packaging` error before any copy occurs. Existing staged files from a
/// prior version of this prefix are overwritten.
pub fn stage(dist: &Distribution, paths: &StagePaths) -> Result<()> {
    dist.validate()?;

    fsutil::ensure_dir(&paths.bin)?;
    fsutil::ensure_dir(&paths.share)?;
    fsutil::ensure_dir(&paths.libexec)?;

    // Executables into bin/.
    fsutil::copy_file(&dist.main_entry(), &paths.main_entry())?;
    fsutil::copy_file(&dist.setup_script(), &paths.setup_script())?;
    fsutil::copy_file(&dist.messaging_script(), &paths.messaging_script())?;
    fsutil::copy_file(
        &dist.installer_script(),
        &paths.bin.join(distribution::INSTALLER_SCRIPT),
    )?;

    // Resources into share/; the template is renamed on the way in.
    fsutil::copy_tree(&dist.instructions_dir(), &paths.instructions_dir())?;
    fsutil::copy_file(&dist.template_doc(), &paths.template_doc())?;

    // The legacy installer script also lands in libexec/.
    fsutil::copy_file(
        &dist.installer_script(),
        &paths.libexec.join(distribution::INSTALLER_SCRIPT),
    )?;

    Ok(())
}
