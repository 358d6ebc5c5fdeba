//! Directory Client Abstraction Layer
//!
//! This module provides the interface the block editor uses to reach
//! the centre directory API. The trait exists so fixtures can stand in
//! for the HTTP backend when exercising the editor.

mod http;

pub use http::HttpDirectoryClient;

use async_trait::async_trait;
use centreboard_shared::{CentreDetail, CentreSummary};

/// Error types for directory client operations
#[derive(Debug, thiserror::Error)]
pub enum DirectoryClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("{message}")]
    NotFound { message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for directory API implementations
#[async_trait(?Send)]
pub trait DirectoryApi {
    /// Fetch all centre summaries, in directory order
    async fn list_centres(&self) -> Result<Vec<CentreSummary>, DirectoryClientError>;

    /// Fetch the detail record for a centre slug
    async fn centre_detail(&self, slug: &str) -> Result<CentreDetail, DirectoryClientError>;
}
