//! HTTP/JSON implementation of the results service client

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{DownloadError, Error, Result};
use crate::types::{ArtifactDescriptor, Execution, ExecutionId};

use super::ResultsClient;

/// Maximum number of response body bytes kept in an API error message
const ERROR_BODY_LIMIT: usize = 512;

/// Production [`ResultsClient`] over HTTP/JSON
///
/// Talks to the results service REST API:
///
/// - `GET {base}/executions/{id}`
/// - `GET {base}/test-suite-executions/{id}`
/// - `GET {base}/executions/{id}/artifacts`
/// - `GET {base}/test-suite-executions/{id}/artifacts`
/// - `GET {base}/executions/{id}/artifacts/{file}`
///
/// Path segments are percent-encoded. HTTP 404 on the execution lookups maps
/// to `Ok(None)`; any other non-success status maps to [`Error::Api`].
#[derive(Debug)]
pub struct HttpResultsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpResultsClient {
    /// Build a client from the API configuration
    ///
    /// Fails with [`Error::Config`] when the base URL does not parse.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        url::Url::parse(&config.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL {:?}: {}", config.base_url, e),
            key: Some("api.base_url".to_string()),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn execution_url(&self, id: &ExecutionId) -> String {
        format!(
            "{}/executions/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    fn suite_execution_url(&self, id: &ExecutionId) -> String {
        format!(
            "{}/test-suite-executions/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// GET a url and surface non-success statuses as [`Error::Api`]
    async fn get_checked(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "GET results service");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(mut body) if !body.is_empty() => {
                if body.len() > ERROR_BODY_LIMIT {
                    let mut end = ERROR_BODY_LIMIT;
                    while !body.is_char_boundary(end) {
                        end -= 1;
                    }
                    body.truncate(end);
                }
                body
            }
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Execution lookup shared by the test and suite endpoints
    ///
    /// 404 means "no such execution", which the resolver needs as a distinct
    /// answer rather than a failure.
    async fn get_execution_at(&self, url: &str) -> Result<Option<Execution>> {
        match self.get_checked(url).await {
            Ok(response) => Ok(Some(response.json::<Execution>().await?)),
            Err(Error::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_artifacts_at(&self, url: &str) -> Result<Vec<ArtifactDescriptor>> {
        let response = self.get_checked(url).await?;
        Ok(response.json::<Vec<ArtifactDescriptor>>().await?)
    }
}

#[async_trait]
impl ResultsClient for HttpResultsClient {
    async fn get_test_execution(&self, id: &ExecutionId) -> Result<Option<Execution>> {
        self.get_execution_at(&self.execution_url(id)).await
    }

    async fn get_suite_execution(&self, id: &ExecutionId) -> Result<Option<Execution>> {
        self.get_execution_at(&self.suite_execution_url(id)).await
    }

    async fn list_test_artifacts(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>> {
        let url = format!("{}/artifacts", self.execution_url(id));
        self.list_artifacts_at(&url).await
    }

    async fn list_suite_artifacts(&self, id: &ExecutionId) -> Result<Vec<ArtifactDescriptor>> {
        let url = format!("{}/artifacts", self.suite_execution_url(id));
        self.list_artifacts_at(&url).await
    }

    async fn fetch_artifact(&self, id: &ExecutionId, file_name: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/artifacts/{}",
            self.execution_url(id),
            urlencoding::encode(file_name)
        );
        match self.get_checked(&url).await {
            Ok(response) => Ok(response.bytes().await?.to_vec()),
            Err(Error::Api { status: 404, .. }) => {
                Err(Error::Download(DownloadError::FileNotFound {
                    id: id.to_string(),
                    file: file_name.to_string(),
                }))
            }
            Err(e) => Err(e),
        }
    }
}
