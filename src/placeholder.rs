// src/placeholder.rs
// =============================================================================
// Lookups against JSONPlaceholder, a free fake REST API for testing.
//
// The user endpoint is fetched with the status+body variant, so callers see
// both the status code and the parsed document.
// =============================================================================

use url::Url;

use crate::fetcher::{fetch_with_status, FetchError, FetchRequest, StatusAndBody};

pub const PLACEHOLDER_API_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    base_url: Url,
}

impl PlaceholderClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(PLACEHOLDER_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let base = FetchRequest::new(base_url)?;
        Ok(Self {
            base_url: base.url().clone(),
        })
    }

    /// GET /users/{id}
    pub async fn get_user(&self, id: u32) -> Result<StatusAndBody, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push("users")
            .push(&id.to_string());

        fetch_with_status(&FetchRequest::from_url(url)?).await
    }
}
