//! Distribution package layout and validation.
//!
//! A distribution is the immutable build output of the multi-claude
//! project: four executable scripts plus the instructions tree and the
//! CLAUDE.md template. The installer treats every member as opaque bytes.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

/// Main entry point script; becomes the launcher.
pub const MAIN_ENTRY: &str = "multi-claude";
/// tmux session setup script.
pub const SETUP_SCRIPT: &str = "setup.sh";
/// Inter-agent messaging script.
pub const MESSAGING_SCRIPT: &str = "agent-send.sh";
/// Legacy installer script, staged for the package manager's libexec.
pub const INSTALLER_SCRIPT: &str = "install.sh";
/// Per-agent instruction documents.
pub const INSTRUCTIONS_DIR: &str = "instructions";
/// Template document; staged under the name `CLAUDE_template.md`.
pub const TEMPLATE_DOC: &str = "CLAUDE.md";

/// Executable members, checked before resources.
const EXECUTABLES: [&str; 4] = [MAIN_ENTRY, SETUP_SCRIPT, MESSAGING_SCRIPT, INSTALLER_SCRIPT];

/// A distribution rooted at a source directory.
#[derive(Debug, Clone)]
pub struct Distribution {
    root: PathBuf,
}

impl Distribution {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn main_entry(&self) -> PathBuf {
        self.root.join(MAIN_ENTRY)
    }

    pub fn setup_script(&self) -> PathBuf {
        self.root.join(SETUP_SCRIPT)
    }

    pub fn messaging_script(&self) -> PathBuf {
        self.root.join(MESSAGING_SCRIPT)
    }

    pub fn installer_script(&self) -> PathBuf {
        self.root.join(INSTALLER_SCRIPT)
    }

    pub fn instructions_dir(&self) -> PathBuf {
        self.root.join(INSTRUCTIONS_DIR)
    }

    pub fn template_doc(&self) -> PathBuf {
        self.root.join(TEMPLATE_DOC)
    }

    /// Check that every required member is present.
    ///
    /// Fails with a `Packaging` error naming the first missing member, in a
    /// fixed order (executables, then resources), before anything is copied.
    pub fn validate(&self) -> Result<()> {
        for member in EXECUTABLES {
            if !self.root.join(member).is_file() {
                return Err(self.missing(member));
            }
        }
        if !self.instructions_dir().is_dir() {
            return Err(self.missing(INSTRUCTIONS_DIR));
        }
        if !self.template_doc().is_file() {
            return Err(self.missing(TEMPLATE_DOC));
        }
        Ok(())
    }

    fn missing(&self, member: &'static str) -> InstallError {
        InstallError::Packaging {
            member,
            distribution: self.root.clone(),
        }
    }
}
