//! Core downloader implementation split into focused submodules.
//!
//! The `ArtifactDownloader` struct and its methods are organized by domain:
//! - [`resolve`] - Execution kind discovery (test vs. test suite)
//! - [`list`] - Artifact listing for a resolved execution
//! - [`single`] - Single-file download
//! - [`bulk`] - Bulk download with filtering and format branching
//! - [`filter`] - Artifact name mask compilation and matching
//! - [`archive`] - Archive-mode zip packaging

mod archive;
mod bulk;
mod filter;
mod list;
mod resolve;
mod single;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::client::{HttpResultsClient, ResultsClient};
use crate::config::Config;
use crate::error::Result;

/// Artifact downloader for test and test-suite executions
///
/// Resolves executions in the results service, lists their artifacts, and
/// downloads them to local storage. The results client is held as a trait
/// object for pluggable transports.
///
/// Every invocation is self-contained: executions and artifact listings are
/// fetched fresh per call and never cached across calls.
#[derive(Clone)]
pub struct ArtifactDownloader {
    /// Results service client (trait object for pluggable implementations)
    pub(crate) client: Arc<dyn ResultsClient>,
}

impl ArtifactDownloader {
    /// Create a downloader backed by the HTTP results client
    ///
    /// Fails with a configuration error when the API base URL is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let client = HttpResultsClient::new(&config.api)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create a downloader over an existing client
    ///
    /// This is the seam tests and embedders use to supply their own
    /// [`ResultsClient`] implementation.
    pub fn with_client(client: Arc<dyn ResultsClient>) -> Self {
        Self { client }
    }
}
