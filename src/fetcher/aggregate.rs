// src/fetcher/aggregate.rs
// =============================================================================
// Waiting for several fetches at once (like Promise.all in JavaScript).
//
// All requests start together. The aggregate succeeds only when every
// request succeeds, and fails with the first error otherwise. Results come
// back in the same order as the requests, no matter which response arrived
// first over the wire.
// =============================================================================

use futures::future::try_join_all;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::FetchError;
use super::fetch::{fetch_as, fetch_json};
use super::request::FetchRequest;

/// Fetches every request concurrently, all-or-nothing
pub async fn fetch_all(requests: &[FetchRequest]) -> Result<Vec<Value>, FetchError> {
    debug!("fetching {} request(s) concurrently", requests.len());
    try_join_all(requests.iter().map(fetch_json)).await
}

/// Typed version of `fetch_all`
pub async fn fetch_all_as<T: DeserializeOwned>(requests: &[FetchRequest]) -> Result<Vec<T>, FetchError> {
    debug!("fetching {} request(s) concurrently", requests.len());
    try_join_all(requests.iter().map(fetch_as::<T>)).await
}
