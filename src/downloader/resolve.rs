//! Execution kind discovery.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ExecutionId, ExecutionRef};

use super::ArtifactDownloader;

impl ArtifactDownloader {
    /// Resolve an opaque id to a test or test-suite execution
    ///
    /// Ids carry no kind tag, so the kind is discovered by probing: the test
    /// lookup runs first, and the suite lookup runs only when the test lookup
    /// comes back absent or empty. Two sequential remote calls in the worst
    /// case, no retries.
    ///
    /// Fails with [`Error::NotFound`] carrying the original id when neither
    /// lookup yields an execution; the caller must not guess which kind was
    /// intended.
    pub async fn resolve(&self, id: &ExecutionId) -> Result<ExecutionRef> {
        debug!(id = %id, "resolving execution kind");

        match self.client.get_test_execution(id).await {
            Ok(Some(execution)) if !execution.id.is_empty() => {
                debug!(id = %id, name = %execution.name, "resolved as test execution");
                return Ok(ExecutionRef::Test(execution));
            }
            Ok(_) => {
                debug!(id = %id, "no test execution, probing test suite");
            }
            Err(e) => {
                debug!(id = %id, error = %e, "test execution lookup failed, probing test suite");
            }
        }

        match self.client.get_suite_execution(id).await {
            Ok(Some(execution)) => {
                debug!(id = %id, name = %execution.name, "resolved as test suite execution");
                Ok(ExecutionRef::Suite(execution))
            }
            Ok(None) => Err(Error::NotFound { id: id.to_string() }),
            Err(e) => {
                debug!(id = %id, error = %e, "test suite execution lookup failed");
                Err(Error::NotFound { id: id.to_string() })
            }
        }
    }
}
