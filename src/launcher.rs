//! Launcher materialization.
//!
//! The launcher is a byte-for-byte copy of the staged main entry point,
//! never a symlink, so the state directory stays self-contained and can be
//! relocated or backed up as a unit. Regenerated on every install.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LAUNCHER_NAME;
use crate::error::{InstallError, Result};
use crate::fsutil;

/// Write `<state_dir>/multi-claude-global` from the staged main entry
/// point and mark it executable (0o755). Returns the launcher path.
pub fn materialize_launcher(stage: &crate::stage::StagePaths, state_dir: &Path) -> Result<PathBuf> {
    let source = stage.main_entry();
    let content = fs::read(&source).map_err(|e| InstallError::fs("read", &source, e))?;

    let launcher = state_dir.join(LAUNCHER_NAME);
    fsutil::write_file_mode(&launcher, &content, 0o755)?;
    Ok(launcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StagePaths;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn launcher_is_verbatim_and_executable() {
        let tmp = TempDir::new().unwrap();
        let stage = StagePaths::under_prefix(&tmp.path().join("prefix"));
        fs::create_dir_all(&stage.bin).unwrap();
        fs::write(stage.main_entry(), "#!/bin/bash\nexec tmux\n").unwrap();
        let state_dir = tmp.path().join("state");
        fs::create_dir(&state_dir).unwrap();

        let launcher = materialize_launcher(&stage, &state_dir).unwrap();

        assert_eq!(launcher, state_dir.join("multi-claude-global"));
        assert_eq!(fs::read(&launcher).unwrap(), b"#!/bin/bash\nexec tmux\n");
        let mode = fs::metadata(&launcher).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert!(
            !launcher.symlink_metadata().unwrap().file_type().is_symlink(),
            "launcher must be a real file"
        );
    }

    #[test]
    fn launcher_is_regenerated_on_reinstall() {
        let tmp = TempDir::new().unwrap();
        let stage = StagePaths::under_prefix(&tmp.path().join("prefix"));
        fs::create_dir_all(&stage.bin).unwrap();
        let state_dir = tmp.path().join("state");
        fs::create_dir(&state_dir).unwrap();

        fs::write(stage.main_entry(), "v1").unwrap();
        materialize_launcher(&stage, &state_dir).unwrap();
        fs::write(stage.main_entry(), "v2").unwrap();
        let launcher = materialize_launcher(&stage, &state_dir).unwrap();

        assert_eq!(fs::read(&launcher).unwrap(), b"v2");
    }
}
