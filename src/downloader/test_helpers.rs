//! Shared test helpers: an in-memory results client for downloader tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::client::ResultsClient;
use crate::downloader::ArtifactDownloader;
use crate::error::{DownloadError, Error, Result};
use crate::types::{ArtifactDescriptor, Execution, ExecutionId};

/// Minimal execution record for tests
pub(crate) fn execution(id: &str) -> Execution {
    Execution {
        id: id.to_string(),
        name: format!("{id}-name"),
        status: None,
        start_time: None,
        end_time: None,
    }
}

fn descriptor(name: &str, size: usize) -> ArtifactDescriptor {
    ArtifactDescriptor {
        name: name.to_string(),
        size: Some(size as u64),
        content_type: None,
    }
}

/// In-memory [`ResultsClient`] with per-endpoint call counters
///
/// Built up with the `with_*` methods, then turned into a downloader via
/// [`MockResultsClient::into_downloader`], which also hands back the client
/// so tests can assert on the counters.
#[derive(Default)]
pub(crate) struct MockResultsClient {
    test_executions: HashMap<String, Execution>,
    suite_executions: HashMap<String, Execution>,
    test_artifacts: HashMap<String, Vec<ArtifactDescriptor>>,
    suite_artifacts: HashMap<String, Vec<ArtifactDescriptor>>,
    contents: HashMap<(String, String), Vec<u8>>,
    failing_fetches: HashSet<(String, String)>,
    fail_listing: bool,
    pub(crate) test_lookup_calls: AtomicUsize,
    pub(crate) suite_lookup_calls: AtomicUsize,
    pub(crate) test_list_calls: AtomicUsize,
    pub(crate) suite_list_calls: AtomicUsize,
    pub(crate) fetch_calls: AtomicUsize,
}

impl MockResultsClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_test_execution(mut self, id: &str) -> Self {
        self.test_executions.insert(id.to_string(), execution(id));
        self
    }

    /// A lookup that answers 200 with a record carrying an empty id,
    /// which the resolver must treat as absent
    pub(crate) fn with_empty_test_execution(mut self, id: &str) -> Self {
        self.test_executions.insert(
            id.to_string(),
            Execution {
                id: String::new(),
                ..execution(id)
            },
        );
        self
    }

    pub(crate) fn with_suite_execution(mut self, id: &str) -> Self {
        self.suite_executions.insert(id.to_string(), execution(id));
        self
    }

    pub(crate) fn with_test_artifact(mut self, id: &str, name: &str, content: &[u8]) -> Self {
        self.test_artifacts
            .entry(id.to_string())
            .or_default()
            .push(descriptor(name, content.len()));
        self.contents
            .insert((id.to_string(), name.to_string()), content.to_vec());
        self
    }

    pub(crate) fn with_suite_artifact(mut self, id: &str, name: &str, content: &[u8]) -> Self {
        self.suite_artifacts
            .entry(id.to_string())
            .or_default()
            .push(descriptor(name, content.len()));
        self.contents
            .insert((id.to_string(), name.to_string()), content.to_vec());
        self
    }

    /// An artifact that appears in the test listing but whose fetch errors
    pub(crate) fn with_failing_fetch(mut self, id: &str, name: &str) -> Self {
        self.test_artifacts
            .entry(id.to_string())
            .or_default()
            .push(descriptor(name, 0));
        self.failing_fetches
            .insert((id.to_string(), name.to_string()));
        self
    }

    /// Make both listing endpoints fail
    pub(crate) fn with_failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub(crate) fn into_downloader(self) -> (ArtifactDownloader, Arc<MockResultsClient>) {
        let client = Arc::new(self);
        (ArtifactDownloader::with_client(client.clone()), client)
    }
}

#[async_trait]
impl ResultsClient for MockResultsClient {
    async fn get_test_execution(&self, id: &ExecutionId) -> Result<Option<Execution>> {
        self.test_lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.test_executions.get(id.as_str()).cloned())
    }

    async fn get_suite_execution(&self, id: &ExecutionId) -> Result<Option<Execution>> {
        self.suite_lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.suite_executions.get(id.as_str()).cloned())
    }

    async fn list_test_artifacts(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>> {
        self.test_list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(Error::Api {
                status: 500,
                message: "listing unavailable".into(),
            });
        }
        Ok(self
            .test_artifacts
            .get(id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn list_suite_artifacts(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>> {
        self.suite_list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(Error::Api {
                status: 500,
                message: "listing unavailable".into(),
            });
        }
        Ok(self
            .suite_artifacts
            .get(id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_artifact(&self, id: &ExecutionId, file_name: &str) -> Result<Vec<u8>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let key = (id.to_string(), file_name.to_string());
        if self.failing_fetches.contains(&key) {
            return Err(Error::Api {
                status: 502,
                message: "storage backend unavailable".into(),
            });
        }
        self.contents.get(&key).cloned().ok_or_else(|| {
            Error::Download(DownloadError::FileNotFound {
                id: id.to_string(),
                file: file_name.to_string(),
            })
        })
    }
}
