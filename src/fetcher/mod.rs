// src/fetcher/mod.rs
// =============================================================================
// This module contains the fetcher: one HTTP GET that returns parsed JSON.
//
// Submodules:
// - request: the validated request descriptor (URL + headers)
// - config: static headers shared by many requests
// - fetch: the request itself (future shape)
// - callback: the same request delivered to a closure
// - aggregate: waiting on several requests at once
// - error: the FetchError type
// =============================================================================

mod aggregate;
mod callback;
mod config;
mod error;
mod fetch;
mod request;

pub use aggregate::{fetch_all, fetch_all_as};
pub use callback::{fetch_with_callback, fetch_with_status_callback};
pub use config::{FetchConfig, GITHUB_USER_AGENT};
pub use error::FetchError;
pub use fetch::{fetch_as, fetch_json, fetch_with_status, StatusAndBody};
pub use request::FetchRequest;
