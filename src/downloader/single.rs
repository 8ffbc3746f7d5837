//! Single-file download.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DownloadError, Error, Result};
use crate::types::ExecutionId;
use crate::utils;

use super::ArtifactDownloader;

/// Wrap a client failure with fetch context
///
/// Errors that are already download errors (e.g. the client's 404 mapping)
/// pass through untouched; everything else gains execution id and file name.
pub(crate) fn fetch_error(id: &ExecutionId, file_name: &str, error: Error) -> Error {
    match error {
        Error::Download(_) => error,
        other => Error::Download(DownloadError::Fetch {
            id: id.to_string(),
            file: file_name.to_string(),
            reason: other.to_string(),
        }),
    }
}

impl ArtifactDownloader {
    /// Download one named artifact file to a destination directory
    ///
    /// `file_name` must exactly match a remote artifact name; there is no
    /// pattern matching here. The destination directory is created if absent
    /// and an existing file at the target path is overwritten (artifacts are
    /// immutable once a run produced them, so a blind overwrite is safe).
    ///
    /// Nothing is created at the destination when the fetch fails.
    pub async fn download_file(
        &self,
        id: &ExecutionId,
        file_name: &str,
        destination_dir: &Path,
    ) -> Result<PathBuf> {
        debug!(id = %id, file = file_name, "downloading artifact file");

        let (local_path, bytes) = self.fetch_and_write(id, file_name, destination_dir).await?;

        info!(
            id = %id,
            file = file_name,
            path = %local_path.display(),
            bytes,
            "artifact file downloaded"
        );

        Ok(local_path)
    }

    /// Fetch one artifact and write it under the destination directory
    ///
    /// The fetch happens before anything touches the filesystem, so a failed
    /// fetch leaves no file behind. The write goes through `std::fs::write`,
    /// which closes the handle on every exit path.
    pub(crate) async fn fetch_and_write(
        &self,
        id: &ExecutionId,
        file_name: &str,
        destination_dir: &Path,
    ) -> Result<(PathBuf, u64)> {
        let content = self
            .client
            .fetch_artifact(id, file_name)
            .await
            .map_err(|e| fetch_error(id, file_name, e))?;

        let local_path = utils::artifact_destination(destination_dir, file_name)?;
        if let Some(parent) = local_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DownloadError::Write {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        std::fs::write(&local_path, &content).map_err(|e| DownloadError::Write {
            path: local_path.clone(),
            reason: e.to_string(),
        })?;

        Ok((local_path, content.len() as u64))
    }
}
