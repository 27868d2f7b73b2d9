//! Command link: expose the launcher on the user's search path.

use std::path::{Path, PathBuf};

use crate::config::COMMAND_NAME;
use crate::error::Result;
use crate::fsutil;

/// Ensure `<home>/bin` exists and force-replace the `multi-claude` symlink
/// inside it to point at `launcher`. A pre-existing plain file, dead link,
/// or link to an old launcher at that path is replaced without error, so
/// reinstalls self-heal a corrupted link. Returns the link path.
pub fn link_command(launcher: &Path, home_dir: &Path) -> Result<PathBuf> {
    let bin_dir = home_dir.join("bin");
    fsutil::ensure_dir(&bin_dir)?;

    let link = bin_dir.join(COMMAND_NAME);
    fsutil::replace_symlink(launcher, &link)?;
    Ok(link)
}
