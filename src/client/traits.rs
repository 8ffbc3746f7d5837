//! Trait for results service access

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ArtifactDescriptor, Execution, ExecutionId};

/// Abstract contract over the remote results service
///
/// The lookup calls return `Ok(None)` when the service answered but holds no
/// record for the id — that is how the resolver distinguishes "not there"
/// from a transport failure, which surfaces as `Err`.
///
/// Test and suite executions are namespaced separately on the service, which
/// is why listing comes as two parallel, mutually exclusive calls sharing one
/// conceptual operation.
#[async_trait]
pub trait ResultsClient: Send + Sync {
    /// Fetch a single-test execution by id
    async fn get_test_execution(&self, id: &ExecutionId) -> Result<Option<Execution>>;

    /// Fetch a test-suite execution by id
    async fn get_suite_execution(&self, id: &ExecutionId) -> Result<Option<Execution>>;

    /// List the artifacts of a single-test execution
    async fn list_test_artifacts(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>>;

    /// List the artifacts of a test-suite execution
    async fn list_suite_artifacts(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>>;

    /// Fetch the content of one artifact file
    ///
    /// `file_name` must exactly match a name from the execution's artifact
    /// listing; there is no pattern matching at this layer.
    async fn fetch_artifact(&self, id: &ExecutionId, file_name: &str) -> Result<Vec<u8>>;
}
