//! Error types for artifact-dl
//!
//! This module provides comprehensive error handling for the library, including:
//! - Domain-specific error types (resolution, listing, download, filtering)
//! - Context information (execution id, file name, path) on every variant
//! - `#[from]` conversions for the ambient transport and serialization errors
//!
//! The library never exits the process: every operation returns [`Result`],
//! and exit-code translation is left to the consuming command layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for artifact-dl
///
/// This is the primary error type used throughout the library. Each variant includes
/// contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api.base_url")
        key: Option<String>,
    },

    /// Neither a test execution nor a test suite execution matched the id
    #[error("no test or test suite execution found with id {id}")]
    NotFound {
        /// The execution id that failed to resolve
        id: String,
    },

    /// Artifact listing call failed for a resolved execution
    #[error("failed to list artifacts for {kind} execution {id}: {reason}")]
    ArtifactFetch {
        /// The execution id whose artifacts could not be listed
        id: String,
        /// Which kind of execution was being listed ("test" or "test suite")
        kind: &'static str,
        /// The underlying failure
        reason: String,
    },

    /// Single-file download error
    #[error("download error: {0}")]
    Download(#[from] DownloadError),

    /// Malformed artifact name mask
    #[error("invalid filter pattern {pattern:?}: {reason}")]
    InvalidFilter {
        /// The mask that failed to compile
        pattern: String,
        /// The regex compile error
        reason: String,
    },

    /// Unsupported argument value (e.g., an unknown download format)
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was passed and what would have been accepted
        message: String,
    },

    /// Best-effort folder run finished with at least one file failure
    ///
    /// `download_all` itself returns `Ok` with a report in folder mode; this
    /// variant exists for callers that convert such a report into a hard
    /// error via [`DownloadReport::into_result`](crate::types::DownloadReport::into_result).
    #[error("{failed} of {total} artifact(s) failed to download for execution {id}")]
    PartialDownload {
        /// The execution id the bulk download ran against
        id: String,
        /// Number of artifacts that failed
        failed: usize,
        /// Number of artifacts attempted
        total: usize,
    },

    /// Archive construction failed
    #[error("archive error for {path}: {reason}")]
    Archive {
        /// The archive path being written
        path: PathBuf,
        /// The reason archive construction failed
        reason: String,
    },

    /// Results service responded with a non-success status
    #[error("results service returned status {status}: {message}")]
    Api {
        /// HTTP status code returned by the results service
        status: u16,
        /// Response body (truncated) or status reason
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while fetching or writing a single artifact file
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The named artifact does not exist for the execution
    #[error("artifact {file} not found for execution {id}")]
    FileNotFound {
        /// The execution id the file was requested for
        id: String,
        /// The artifact file name that was not found
        file: String,
    },

    /// Transport failure while fetching the artifact content
    #[error("failed to fetch {file} for execution {id}: {reason}")]
    Fetch {
        /// The execution id the file was requested for
        id: String,
        /// The artifact file name being fetched
        file: String,
        /// The underlying transport failure
        reason: String,
    },

    /// Filesystem failure while writing the artifact to disk
    #[error("failed to write {path}: {reason}")]
    Write {
        /// The local path that could not be written
        path: PathBuf,
        /// The underlying filesystem failure
        reason: String,
    },

    /// The artifact name would escape the destination directory
    #[error("unsafe artifact path {name:?}")]
    UnsafePath {
        /// The artifact name that was rejected
        name: String,
    },
}
