//! Search client for making requests to the backend
//!
//! The original UI let a failed fetch surface as an unhandled rejection;
//! here every failure mode is an explicit [`ClientError`] so the caller
//! has to acknowledge it.

use std::sync::OnceLock;

use crate::types::{SearchRequest, SearchResult};

static SEARCH_ENDPOINT: OnceLock<String> = OnceLock::new();

/// Override the search endpoint. Call this at startup, before any search.
pub fn init_search_endpoint(url: String) {
    SEARCH_ENDPOINT.set(url).ok();
}

/// Get the configured search endpoint
fn search_endpoint() -> &'static str {
    SEARCH_ENDPOINT.get().map(|s| s.as_str()).unwrap_or("/search")
}

/// Error type for search requests
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Search failed with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the `/search` endpoint
#[derive(Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    /// Create a client against an explicit endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute one search, returning results in backend order
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let results = serde_json::from_str(&body)?;
        Ok(results)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(search_endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let client = SearchClient::default();
        assert_eq!(client.endpoint, "/search");
    }

    #[test]
    fn test_decode_error_from_malformed_body() {
        let err: ClientError = serde_json::from_str::<Vec<SearchResult>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status(502);
        assert_eq!(err.to_string(), "Search failed with status 502");
    }
}
