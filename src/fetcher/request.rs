// src/fetcher/request.rs
// =============================================================================
// The request descriptor: where to send a GET and which headers to send.
//
// A FetchRequest is validated when it is built, so a fetch never starts with
// a URL we cannot use. Only absolute http:// and https:// URLs are accepted.
// Once built, a request is never modified by the fetcher.
// =============================================================================

use reqwest::header::HeaderMap;
use url::Url;

use super::config::{validate_header, FetchConfig};
use super::error::FetchError;

#[derive(Debug, Clone)]
pub struct FetchRequest {
    url: Url,
    headers: HeaderMap,
}

impl FetchRequest {
    /// Parses and validates the target URL
    ///
    /// Example:
    ///   FetchRequest::new("https://api.github.com/users/octocat")  -> Ok
    ///   FetchRequest::new("ftp://example.com/file")                -> Err(InvalidUrl)
    ///   FetchRequest::new("/users/1")                              -> Err(InvalidUrl)
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|e| FetchError::InvalidUrl(format!("'{}': {}", url, e)))?;
        Self::from_url(parsed)
    }

    /// Same as `new`, for a URL that has already been parsed
    pub fn from_url(url: Url) -> Result<Self, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "'{}': only http and https are supported",
                url
            )));
        }
        if url.host_str().is_none() {
            return Err(FetchError::InvalidUrl(format!("'{}': missing host", url)));
        }

        Ok(Self {
            url,
            headers: HeaderMap::new(),
        })
    }

    /// Applies every header of a config to this request
    pub fn with_config(mut self, config: &FetchConfig) -> Self {
        for (name, value) in config.headers() {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, FetchError> {
        let (name, value) = validate_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
