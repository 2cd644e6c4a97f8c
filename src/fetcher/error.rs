// src/fetcher/error.rs
// =============================================================================
// The error type every fetch returns.
//
// A fetch fails for exactly one reason:
// - Transport: we never got a complete response (DNS, refused, reset...)
// - HttpStatus: the server answered with a status code >= 400
// - Parse: the body was not the JSON we expected
//
// InvalidUrl and InvalidHeader are raised while building a request,
// before any connection is opened.
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error for us
// - #[from]: lets the ? operator convert other errors into FetchError
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection could not be established or was interrupted
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status code >= 400.
    ///
    /// Only the code is kept, the response body is dropped.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The body could not be parsed as JSON
    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl FetchError {
    /// True when the failure happened below HTTP (no usable response)
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    /// True when the body was received but was not valid JSON
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse(_))
    }

    /// The HTTP status code, if this is a status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_only_the_code() {
        let err = FetchError::HttpStatus(500);
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_transport());
        assert!(!err.is_parse());
        assert_eq!(err.to_string(), "HTTP status 500");
    }

    #[test]
    fn test_parse_error_converts_with_question_mark() {
        fn parse(text: &str) -> Result<serde_json::Value, FetchError> {
            Ok(serde_json::from_str(text)?)
        }

        let err = parse("not json").unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.status_code(), None);
    }
}
