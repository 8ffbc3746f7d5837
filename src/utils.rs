//! Utility functions for artifact path handling

use crate::error::{DownloadError, Error, Result};
use std::path::{Component, Path, PathBuf};

/// Normalize an artifact name into a path safe to join under a destination root
///
/// Artifact names come from the remote listing and may contain directory
/// separators (`report/result.json`). Names that are absolute or traverse
/// upward would escape the destination, so they are rejected.
///
/// Returns `None` for absolute names, names containing `..`, and names that
/// normalize to nothing.
pub fn artifact_relative_path(name: &str) -> Option<PathBuf> {
    let path = Path::new(name);
    if path.is_absolute() {
        return None;
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if normalized.as_os_str().is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Join an artifact name under a destination root, rejecting unsafe names
///
/// # Examples
///
/// ```
/// use artifact_dl::utils::artifact_destination;
/// use std::path::Path;
///
/// let path = artifact_destination(Path::new("artifacts"), "report/result.json").unwrap();
/// assert_eq!(path, Path::new("artifacts/report/result.json"));
///
/// assert!(artifact_destination(Path::new("artifacts"), "../escape").is_err());
/// ```
pub fn artifact_destination(root: &Path, name: &str) -> Result<PathBuf> {
    artifact_relative_path(name)
        .map(|relative| root.join(relative))
        .ok_or_else(|| {
            Error::Download(DownloadError::UnsafePath {
                name: name.to_string(),
            })
        })
}
