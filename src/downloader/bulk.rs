//! Bulk download with filtering and format branching.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{DownloadError, Error, Result};
use crate::types::{
    ArtifactDescriptor, ArtifactFormat, DownloadOptions, DownloadReport, ExecutionId, FileOutcome,
    FileStatus,
};

use super::single::fetch_error;
use super::{ArtifactDownloader, archive, filter};

impl ArtifactDownloader {
    /// Download all (or mask-filtered) artifacts of an execution
    ///
    /// Resolves the execution, lists its artifacts, applies the masks, and
    /// fetches the selected files in name order. The destination is a
    /// directory in folder mode and the archive file path in archive mode.
    ///
    /// Masks are compiled up front; a malformed pattern fails the whole
    /// operation with [`Error::InvalidFilter`] before any content is fetched.
    ///
    /// Partial-failure policy:
    /// - **folder mode is best-effort** — a file's failure is recorded in the
    ///   report and the remaining files still download; the call returns
    ///   `Ok(report)` either way (see
    ///   [`DownloadReport::into_result`](crate::types::DownloadReport::into_result)
    ///   for hard-error translation)
    /// - **archive mode is all-or-nothing** — the first failure aborts and no
    ///   archive file, not even a partial one, is left on disk
    pub async fn download_all(
        &self,
        id: &ExecutionId,
        options: &DownloadOptions,
    ) -> Result<DownloadReport> {
        let execution = self.resolve(id).await?;
        let artifacts = self.list_artifacts(&execution).await?;

        let masks = filter::compile_masks(&options.masks)?;
        let mut included: Vec<ArtifactDescriptor> = artifacts
            .into_iter()
            .filter(|artifact| filter::included(&artifact.name, &masks))
            .collect();
        // Name order keeps reports deterministic.
        included.sort_by(|a, b| a.name.cmp(&b.name));

        info!(
            id = %id,
            kind = execution.kind(),
            selected = included.len(),
            format = %options.format,
            destination = %options.destination.display(),
            "starting bulk download"
        );

        match options.format {
            ArtifactFormat::Folder => Ok(self
                .download_to_folder(id, &included, &options.destination)
                .await),
            ArtifactFormat::Archive => {
                self.download_to_archive(id, &included, &options.destination)
                    .await
            }
        }
    }

    async fn download_to_folder(
        &self,
        id: &ExecutionId,
        artifacts: &[ArtifactDescriptor],
        destination: &Path,
    ) -> DownloadReport {
        let mut outcomes = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            match self.fetch_and_write(id, &artifact.name, destination).await {
                Ok((path, bytes)) => outcomes.push(FileOutcome {
                    name: artifact.name.clone(),
                    status: FileStatus::Downloaded { path, bytes },
                }),
                Err(e) => {
                    warn!(
                        id = %id,
                        file = %artifact.name,
                        error = %e,
                        "artifact download failed, continuing"
                    );
                    outcomes.push(FileOutcome {
                        name: artifact.name.clone(),
                        status: FileStatus::Failed {
                            reason: e.to_string(),
                        },
                    });
                }
            }
        }

        let report = DownloadReport {
            execution_id: id.clone(),
            format: ArtifactFormat::Folder,
            destination: destination.to_path_buf(),
            outcomes,
        };
        info!(
            id = %id,
            downloaded = report.downloaded(),
            failed = report.failed(),
            "bulk folder download finished"
        );
        report
    }

    async fn download_to_archive(
        &self,
        id: &ExecutionId,
        artifacts: &[ArtifactDescriptor],
        destination: &Path,
    ) -> Result<DownloadReport> {
        // Every fetch must succeed before a single byte reaches disk.
        let mut entries = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let content = self
                .client
                .fetch_artifact(id, &artifact.name)
                .await
                .map_err(|e| fetch_error(id, &artifact.name, e))?;
            entries.push((artifact.name.clone(), content));
        }

        let bytes = archive::build_zip(destination, &entries)?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DownloadError::Write {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })?;
            }
        }
        if let Err(e) = std::fs::write(destination, &bytes) {
            // A truncated archive is worse than none.
            let _ = std::fs::remove_file(destination);
            return Err(Error::Download(DownloadError::Write {
                path: destination.to_path_buf(),
                reason: e.to_string(),
            }));
        }

        let outcomes = entries
            .into_iter()
            .map(|(name, content)| FileOutcome {
                name,
                status: FileStatus::Downloaded {
                    path: destination.to_path_buf(),
                    bytes: content.len() as u64,
                },
            })
            .collect();

        let report = DownloadReport {
            execution_id: id.clone(),
            format: ArtifactFormat::Archive,
            destination: destination.to_path_buf(),
            outcomes,
        };
        info!(
            id = %id,
            entries = report.outcomes.len(),
            archive_bytes = bytes.len(),
            path = %destination.display(),
            "bulk archive download finished"
        );
        Ok(report)
    }
}
