//! Results service client
//!
//! This module provides a trait-based architecture for talking to the remote
//! results service that stores executions and their artifacts. The core
//! abstraction is the [`ResultsClient`] trait; the downloader holds it as a
//! trait object, so alternative transports (or mocks in tests) plug in
//! without touching the download logic.
//!
//! - [`HttpResultsClient`]: production implementation over HTTP/JSON
//!
//! ## Usage
//!
//! ```no_run
//! use artifact_dl::client::{HttpResultsClient, ResultsClient};
//! use artifact_dl::config::ApiConfig;
//! use artifact_dl::types::ExecutionId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpResultsClient::new(&ApiConfig::default())?;
//!
//!     let id = ExecutionId::new("run-1");
//!     if let Some(execution) = client.get_test_execution(&id).await? {
//!         println!("found test execution {}", execution.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod http;
mod traits;

pub use http::HttpResultsClient;
pub use traits::ResultsClient;
