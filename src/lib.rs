//! # artifact-dl
//!
//! Library for resolving test executions and downloading their artifacts
//! from a results service.
//!
//! ## Design Philosophy
//!
//! artifact-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Explicit** - Every invocation carries its own options, no process-wide state
//! - **Pluggable** - The results service sits behind a trait, mockable in tests
//! - **Predictable** - Folder downloads are best-effort, archive downloads are
//!   all-or-nothing; reports are ordered by artifact name
//!
//! ## Quick Start
//!
//! ```no_run
//! use artifact_dl::{ArtifactDownloader, Config, DownloadOptions, ExecutionId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let downloader = ArtifactDownloader::new(&config)?;
//!
//!     let id = ExecutionId::new("64d24987f2c0c7b3e2a1b4f8");
//!
//!     // What did the run produce?
//!     for artifact in downloader.list(&id).await? {
//!         println!("{} ({:?} bytes)", artifact.name, artifact.size);
//!     }
//!
//!     // Fetch everything under ./artifacts
//!     let options = DownloadOptions::from_config(&config.download);
//!     let report = downloader.download_all(&id, &options).await?;
//!     println!(
//!         "downloaded {} artifact(s), {} failed",
//!         report.downloaded(),
//!         report.failed()
//!     );
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Results service client
pub mod client;
/// Configuration types
pub mod config;
/// Core downloader implementation (decomposed into focused submodules)
pub mod downloader;
/// Error types
pub mod error;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use client::{HttpResultsClient, ResultsClient};
pub use config::{ApiConfig, Config, DownloadConfig};
pub use downloader::ArtifactDownloader;
pub use error::{DownloadError, Error, Result};
pub use types::{
    ArtifactDescriptor, ArtifactFormat, DownloadOptions, DownloadReport, Execution, ExecutionId,
    ExecutionRef, ExecutionStatus, FileOutcome, FileStatus,
};
