// src/fetcher/config.rs
// =============================================================================
// Static request options.
//
// Some APIs insist on a header being present on every request. GitHub, for
// example, rejects requests that do not send a User-Agent. Instead of hiding
// such headers in a global, we keep them in a FetchConfig value and hand it
// to whoever builds requests.
//
// Rust concepts:
// - Builder-style methods that take `self` and return `Self`
// - HeaderMap: reqwest's case-insensitive header collection
// =============================================================================

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::error::FetchError;

/// User-Agent sent to the GitHub API, which refuses anonymous clients
pub const GITHUB_USER_AGENT: &str = "fetch-json";

/// A fixed set of headers applied to every request built from it
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    headers: HeaderMap,
}

impl FetchConfig {
    /// Empty config: requests go out with reqwest's default headers only
    pub fn new() -> Self {
        Self::default()
    }

    /// Config carrying the User-Agent GitHub requires
    pub fn github() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(GITHUB_USER_AGENT));
        Self { headers }
    }

    /// Adds (or replaces) one header
    ///
    /// Fails if the name or the value is not a legal HTTP header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, FetchError> {
        let (name, value) = validate_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a header given as "Name: value" (the form used on the command line)
    pub fn with_raw_header(self, raw: &str) -> Result<Self, FetchError> {
        let (name, value) = raw
            .split_once(':')
            .ok_or_else(|| FetchError::InvalidHeader(format!("expected 'Name: value', got '{}'", raw)))?;
        self.with_header(name.trim(), value.trim())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

// Checks that a header name/value pair can actually be sent
pub(crate) fn validate_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), FetchError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| FetchError::InvalidHeader(format!("bad header name '{}'", name)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| FetchError::InvalidHeader(format!("bad value for header '{}'", name)))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_config_sets_user_agent() {
        let config = FetchConfig::github();
        assert_eq!(config.headers().get(USER_AGENT).unwrap(), GITHUB_USER_AGENT);
    }

    #[test]
    fn test_raw_header_is_split_and_trimmed() {
        let config = FetchConfig::new().with_raw_header("Accept:  application/json").unwrap();
        assert_eq!(config.headers().get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_raw_header_without_colon_is_rejected() {
        let result = FetchConfig::new().with_raw_header("Accept application/json");
        assert!(matches!(result, Err(FetchError::InvalidHeader(_))));
    }

    #[test]
    fn test_bad_header_name_is_rejected() {
        let result = FetchConfig::new().with_header("bad header", "x");
        assert!(matches!(result, Err(FetchError::InvalidHeader(_))));
    }
}
