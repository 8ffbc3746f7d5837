//! Configuration types for artifact-dl

use crate::error::{Error, Result};
use crate::types::ArtifactFormat;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Results service connection configuration
///
/// Groups settings for reaching the remote results service. Used as a nested
/// sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the results service API (default: "http://localhost:8088/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (default: 30s)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Download behavior configuration (destination, format, filtering defaults)
///
/// These are the defaults a command layer falls back to when the user passes
/// no explicit flags; each invocation still carries its own
/// [`DownloadOptions`](crate::types::DownloadOptions).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Download directory (default: "artifacts")
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Default output format (default: folder)
    #[serde(default)]
    pub format: ArtifactFormat,

    /// Default artifact name masks (default: empty = include everything)
    #[serde(default)]
    pub masks: Vec<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            format: ArtifactFormat::default(),
            masks: Vec::new(),
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Results service connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Download behavior defaults
    #[serde(default)]
    pub download: DownloadConfig,
}

impl Config {
    /// Validate the configuration
    ///
    /// Checks the settings that would otherwise fail deep inside a download
    /// run, so a command layer can reject bad input up front.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL {:?}: {}", self.api.base_url, e),
            key: Some("api.base_url".to_string()),
        })?;

        if self.api.request_timeout.is_zero() {
            return Err(Error::Config {
                message: "request timeout must be non-zero".to_string(),
                key: Some("api.request_timeout".to_string()),
            });
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:8088/v1".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("artifacts")
}
