//! Artifact listing for a resolved execution.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ArtifactDescriptor, ExecutionId, ExecutionRef};

use super::ArtifactDownloader;

impl ArtifactDownloader {
    /// List the artifact descriptors of a resolved execution
    ///
    /// Dispatches to the listing endpoint matching the execution's kind.
    /// All-or-nothing per call: a remote failure surfaces as
    /// [`Error::ArtifactFetch`] and no partial listing is returned.
    pub async fn list_artifacts(
        &self,
        execution: &ExecutionRef,
    ) -> Result<Vec<ArtifactDescriptor>> {
        let id = execution.id();
        let result = match execution {
            ExecutionRef::Test(_) => self.client.list_test_artifacts(&id).await,
            ExecutionRef::Suite(_) => self.client.list_suite_artifacts(&id).await,
        };

        match result {
            Ok(artifacts) => {
                debug!(
                    id = %id,
                    kind = execution.kind(),
                    count = artifacts.len(),
                    "listed artifacts"
                );
                Ok(artifacts)
            }
            Err(e) => Err(Error::ArtifactFetch {
                id: id.to_string(),
                kind: execution.kind(),
                reason: e.to_string(),
            }),
        }
    }

    /// Resolve an id and list its artifacts in one call
    ///
    /// Convenience for consumers that hold only the execution id.
    pub async fn list(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>> {
        let execution = self.resolve(id).await?;
        self.list_artifacts(&execution).await
    }
}
