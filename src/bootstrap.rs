//! Home bootstrap: materialize the per-user state directory from the stage.
//!
//! Creates `~/.multi-claude` and its `instructions/` subtree if absent and
//! copies the payload scripts and resources in with last-write-wins
//! overwrite. Reinstalls clobber any local edits inside the state
//! directory; that matches the upstream behavior and is pinned by tests.
//! There is no partial-success guarantee: a failed run may leave a
//! half-populated directory, and rerunning the whole flow is the recovery.

use std::path::{Path, PathBuf};

use crate::config::STATE_DIR_NAME;
use crate::distribution::{INSTRUCTIONS_DIR, MESSAGING_SCRIPT, SETUP_SCRIPT};
use crate::error::Result;
use crate::fsutil;
use crate::stage::{StagePaths, STAGED_TEMPLATE};

/// Populate `<home>/.multi-claude` from the staged artifacts.
///
/// Returns the state directory path. Idempotent: re-running against an
/// existing (or partially populated) state directory fully overwrites the
/// payload files.
pub fn bootstrap_home(stage: &StagePaths, home_dir: &Path) -> Result<PathBuf> {
    let state_dir = home_dir.join(STATE_DIR_NAME);
    fsutil::ensure_dir(&state_dir)?;
    fsutil::ensure_dir(&state_dir.join(INSTRUCTIONS_DIR))?;

    fsutil::copy_file(&stage.setup_script(), &state_dir.join(SETUP_SCRIPT))?;
    fsutil::copy_file(&stage.messaging_script(), &state_dir.join(MESSAGING_SCRIPT))?;
    fsutil::copy_file(&stage.template_doc(), &state_dir.join(STAGED_TEMPLATE))?;
    fsutil::copy_tree(&stage.instructions_dir(), &state_dir.join(INSTRUCTIONS_DIR))?;

    Ok(state_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn staged_prefix(prefix: &Path) -> StagePaths {
        let paths = StagePaths::under_prefix(prefix);
        fs::create_dir_all(&paths.bin).unwrap();
        fs::create_dir_all(paths.instructions_dir()).unwrap();
        fs::write(paths.setup_script(), "setup v2").unwrap();
        fs::write(paths.messaging_script(), "send v2").unwrap();
        fs::write(paths.template_doc(), "template v2").unwrap();
        fs::write(paths.instructions_dir().join("boss.md"), "boss v2").unwrap();
        paths
    }

    #[test]
    fn bootstrap_populates_empty_home() {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("home");
        fs::create_dir(&home).unwrap();
        let stage = staged_prefix(&tmp.path().join("prefix"));

        let state_dir = bootstrap_home(&stage, &home).unwrap();

        assert_eq!(state_dir, home.join(".multi-claude"));
        assert_eq!(
            fs::read_to_string(state_dir.join(SETUP_SCRIPT)).unwrap(),
            "setup v2"
        );
        assert_eq!(
            fs::read_to_string(state_dir.join(MESSAGING_SCRIPT)).unwrap(),
            "send v2"
        );
        assert_eq!(
            fs::read_to_string(state_dir.join(STAGED_TEMPLATE)).unwrap(),
            "template v2"
        );
        assert_eq!(
            fs::read_to_string(state_dir.join(INSTRUCTIONS_DIR).join("boss.md")).unwrap(),
            "boss v2"
        );
    }

    #[test]
    fn bootstrap_overwrites_stale_content() {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("home");
        let state_dir = home.join(".multi-claude");
        fs::create_dir_all(state_dir.join(INSTRUCTIONS_DIR)).unwrap();
        fs::write(state_dir.join(SETUP_SCRIPT), "setup v1, locally edited").unwrap();
        fs::write(state_dir.join(INSTRUCTIONS_DIR).join("boss.md"), "boss v1").unwrap();
        let stage = staged_prefix(&tmp.path().join("prefix"));

        bootstrap_home(&stage, &home).unwrap();

        assert_eq!(
            fs::read_to_string(state_dir.join(SETUP_SCRIPT)).unwrap(),
            "setup v2"
        );
        assert_eq!(
            fs::read_to_string(state_dir.join(INSTRUCTIONS_DIR).join("boss.md")).unwrap(),
            "boss v2"
        );
    }
}
