//! Error types for the install flow.
//!
//! Two fatal kinds: a distribution that is missing a required member
//! (raised before any copy happens), and a filesystem failure during
//! create/copy/link. The PATH advisory is never an error; see `audit`.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal install errors. No retries, no rollback: the flow halts at the
/// step that failed and rerunning the whole install is the recovery path.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A required distribution member is absent. Raised during validation,
    /// before any file is copied.
    #[error("distribution at {distribution} is missing required member `{member}`")]
    Packaging {
        member: &'static str,
        distribution: PathBuf,
    },

    /// A create/copy/link/permission operation failed.
    #[error("failed to {action} {path}: {source}")]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Wrap an io::Error with the operation and path that produced it.
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the component layer.
pub type Result<T, E = InstallError> = std::result::Result<T, E>;
