//! HTTP directory client
//!
//! Talks to the centre directory REST API over `gloo-net`, defaulting
//! to the origin the UI was served from.

use gloo_net::http::Request;

use centreboard_shared::{CentreDetail, CentreSummary, ErrorBody};

use super::{DirectoryApi, DirectoryClientError};

/// Client for the centre directory REST API
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    /// API base URL, without trailing slash
    base_url: String,
}

impl HttpDirectoryClient {
    /// Create a client against an explicit base URL
    pub fn new(url: &str) -> Self {
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Create a client against the origin the UI was served from
    pub fn from_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        Self::new(&origin)
    }

    fn centres_url(&self) -> String {
        format!("{}/api/v1/centres", self.base_url)
    }

    fn centre_url(&self, slug: &str) -> String {
        format!("{}/api/v1/centre/{}", self.base_url, slug)
    }
}

#[async_trait::async_trait(?Send)]
impl DirectoryApi for HttpDirectoryClient {
    async fn list_centres(&self) -> Result<Vec<CentreSummary>, DirectoryClientError> {
        let response = Request::get(&self.centres_url())
            .send()
            .await
            .map_err(|e| DirectoryClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(DirectoryClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<Vec<CentreSummary>>()
            .await
            .map_err(|e| DirectoryClientError::InvalidResponse(e.to_string()))
    }

    async fn centre_detail(&self, slug: &str) -> Result<CentreDetail, DirectoryClientError> {
        let response = Request::get(&self.centre_url(slug))
            .send()
            .await
            .map_err(|e| DirectoryClientError::ConnectionFailed(e.to_string()))?;

        if response.status() == 404 {
            // The API ships a structured body for missing detail
            // records; a routing miss has none
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("Centre not found: {}", slug),
            };
            return Err(DirectoryClientError::NotFound { message });
        }

        if !response.ok() {
            return Err(DirectoryClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<CentreDetail>()
            .await
            .map_err(|e| DirectoryClientError::InvalidResponse(e.to_string()))
    }
}
