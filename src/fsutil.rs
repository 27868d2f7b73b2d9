//! Idempotent filesystem primitives for the install flow.
//!
//! All single-file writes go through a temporary file in the destination
//! directory followed by a rename, so a concurrent reader never observes a
//! truncated file. Directory creation and symlink replacement are safe to
//! re-run against partially-completed prior state.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::error::{InstallError, Result};

/// Create a directory and its parents. No-op if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| InstallError::fs("create directory", dir, e))
}

/// Atomically write `content` to `path` with the given Unix mode
/// (temp file + rename), creating the parent directory as needed.
/// Overwrites any existing file.
pub fn write_file_mode(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => {
            return Err(InstallError::fs(
                "resolve parent of",
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent"),
            ))
        }
    };
    ensure_dir(parent)?;

    let tmp = tmp_name(path);
    fs::write(&tmp, content).map_err(|e| InstallError::fs("write", &tmp, e))?;
    fs::set_permissions(&tmp, fs::Permissions::from_mode(mode))
        .map_err(|e| InstallError::fs("set permissions on", &tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| InstallError::fs("rename into place", path, e))
}

/// Copy a single file, overwriting any existing destination (last write
/// wins, no backup). The copy is atomic at the destination.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let content = fs::read(src).map_err(|e| InstallError::fs("read", src, e))?;
    let mode = fs::metadata(src)
        .map_err(|e| InstallError::fs("stat", src, e))?
        .permissions()
        .mode();
    write_file_mode(dst, &content, mode)
}

/// Recursively copy a directory tree, creating destination directories and
/// overwriting existing files. Source must exist.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir(dst)?;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            InstallError::fs("walk", path, e.into())
        })?;
        // WalkDir yields src itself first; strip_prefix never fails here.
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        if rel.as_os_str().is_empty() {
            continue;
        }
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Create a symlink at `link` pointing to `target`, replacing whatever is
/// already there (plain file, dead link, or stale link) without error.
///
/// The replacement is atomic: the link is created under a temporary name in
/// the same directory and renamed over the destination.
pub fn replace_symlink(target: &Path, link: &Path) -> Result<()> {
    if let Some(parent) = link.parent() {
        ensure_dir(parent)?;
    }

    let tmp = tmp_name(link);
    // Clear any leftover temp from a previous interrupted run.
    if tmp.symlink_metadata().is_ok() {
        fs::remove_file(&tmp).map_err(|e| InstallError::fs("remove stale temp link", &tmp, e))?;
    }
    std::os::unix::fs::symlink(target, &tmp)
        .map_err(|e| InstallError::fs("create symlink", &tmp, e))?;
    fs::rename(&tmp, link).map_err(|e| InstallError::fs("rename symlink into place", link, e))
}

/// SHA-256 of a file's content as a lowercase hex string.
pub fn hash_file(path: &Path) -> Result<String> {
    let content = fs::read(path).map_err(|e| InstallError::fs("read", path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}

fn tmp_name(path: &Path) -> std::path::PathBuf {
    let mut name = std::ffi::OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(".tmp");
    path.with_file_name(name)
}
