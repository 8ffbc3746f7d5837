//! Core types for artifact-dl

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Opaque identifier of a test or test suite execution
///
/// The results service does not tag ids with their kind; whether an id names
/// a single-test execution or a test-suite execution is discovered by probing
/// (see [`ArtifactDownloader::resolve`](crate::downloader::ArtifactDownloader::resolve)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionId(pub String);

impl ExecutionId {
    /// Create a new ExecutionId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExecutionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ExecutionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Execution status as reported by the results service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Queued and waiting to start
    Queued,
    /// Currently running
    Running,
    /// Finished successfully
    Passed,
    /// Finished with failures
    Failed,
    /// Aborted by user
    Aborted,
    /// Timed out before finishing
    Timeout,
}

/// A single run record of a test or test suite
///
/// Only the fields the artifact workflow needs are modeled; the results
/// service returns more, and serde ignores the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Opaque execution id
    #[serde(default)]
    pub id: String,
    /// Human-readable execution name
    #[serde(default)]
    pub name: String,
    /// Current status, if the service reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExecutionStatus>,
    /// When the execution started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// When the execution ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A resolved execution: exactly one of the two kinds
///
/// Produced by the disjunctive lookup in
/// [`ArtifactDownloader::resolve`](crate::downloader::ArtifactDownloader::resolve).
/// Artifacts are namespaced differently under each kind, so downstream calls
/// dispatch on the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutionRef {
    /// A single-test execution
    Test(Execution),
    /// A test-suite execution
    Suite(Execution),
}

impl ExecutionRef {
    /// The id of the underlying execution
    pub fn id(&self) -> ExecutionId {
        match self {
            ExecutionRef::Test(e) | ExecutionRef::Suite(e) => ExecutionId::new(e.id.clone()),
        }
    }

    /// The underlying execution record
    pub fn execution(&self) -> &Execution {
        match self {
            ExecutionRef::Test(e) | ExecutionRef::Suite(e) => e,
        }
    }

    /// Human-readable kind label, used in logs and error context
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionRef::Test(_) => "test",
            ExecutionRef::Suite(_) => "test suite",
        }
    }
}

/// Descriptor of one artifact file attached to an execution
///
/// Names are unique within an execution's artifact set; the listing order is
/// not meaningful.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDescriptor {
    /// Artifact file name, relative to the execution's artifact root
    pub name: String,
    /// File size in bytes, if the service reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Content type, if the service reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Output format of a bulk download
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Individual files under a destination directory tree
    #[default]
    Folder,
    /// One compressed zip archive at the destination path
    Archive,
}

impl std::fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactFormat::Folder => write!(f, "folder"),
            ArtifactFormat::Archive => write!(f, "archive"),
        }
    }
}

impl std::str::FromStr for ArtifactFormat {
    type Err = Error;

    /// Parse the user-facing format string
    ///
    /// Rejecting unknown values here keeps an unsupported format from ever
    /// reaching the network: the typed enum is the only thing
    /// [`download_all`](crate::downloader::ArtifactDownloader::download_all) accepts.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "folder" => Ok(ArtifactFormat::Folder),
            "archive" => Ok(ArtifactFormat::Archive),
            other => Err(Error::InvalidArgument {
                message: format!("unsupported format {other:?}, expected one of folder|archive"),
            }),
        }
    }
}

/// Parameters of one bulk download invocation
///
/// Every invocation carries its own options; nothing is shared through
/// process-wide state.
#[derive(Clone, Debug)]
pub struct DownloadOptions {
    /// Folder mode: directory the files are written under.
    /// Archive mode: path of the archive file itself.
    pub destination: PathBuf,
    /// Output format
    pub format: ArtifactFormat,
    /// Regular-expression masks selecting artifact names; empty = include all
    pub masks: Vec<String>,
}

impl DownloadOptions {
    /// Options derived from the configured defaults
    pub fn from_config(config: &crate::config::DownloadConfig) -> Self {
        Self {
            destination: config.download_dir.clone(),
            format: config.format,
            masks: config.masks.clone(),
        }
    }
}

/// Outcome of one artifact within a bulk download
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileStatus {
    /// File fetched and written to disk
    Downloaded {
        /// Local path the file was written to (folder mode) or the archive
        /// path it was packaged into (archive mode)
        path: PathBuf,
        /// Bytes transferred
        bytes: u64,
    },
    /// File could not be fetched or written
    Failed {
        /// The failure, rendered for diagnostics
        reason: String,
    },
}

/// Per-file record inside a [`DownloadReport`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    /// Artifact file name
    pub name: String,
    /// What happened to it
    pub status: FileStatus,
}

impl FileOutcome {
    /// Whether this file was downloaded successfully
    pub fn is_downloaded(&self) -> bool {
        matches!(self.status, FileStatus::Downloaded { .. })
    }
}

/// Aggregated result of one bulk download
///
/// Outcomes are ordered by artifact name, so reports are deterministic
/// regardless of how the per-file work completed.
#[must_use]
#[derive(Clone, Debug)]
pub struct DownloadReport {
    /// The execution id the bulk download ran against
    pub execution_id: ExecutionId,
    /// Format the download ran in
    pub format: ArtifactFormat,
    /// Destination directory (folder mode) or archive path (archive mode)
    pub destination: PathBuf,
    /// Per-file outcomes, sorted by artifact name
    pub outcomes: Vec<FileOutcome>,
}

impl DownloadReport {
    /// Number of files downloaded successfully
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_downloaded()).count()
    }

    /// Number of files that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.downloaded()
    }

    /// Whether every attempted file succeeded
    pub fn is_complete(&self) -> bool {
        self.failed() == 0
    }

    /// Convert a best-effort report into a hard error when any file failed
    ///
    /// Folder-mode runs return `Ok(report)` even with failures; command
    /// layers that want a non-zero exit for partial runs call this.
    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(Error::PartialDownload {
                id: self.execution_id.to_string(),
                failed: self.failed(),
                total: self.outcomes.len(),
            })
        }
    }
}
