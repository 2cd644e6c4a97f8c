// src/lib.rs
// =============================================================================
// fetch-json: a tiny async HTTP GET client for JSON APIs.
//
// Modules:
// - fetcher: the single GET -> JSON request, as a future or a callback
// - github: GitHub REST API lookups built on the fetcher
// - placeholder: JSONPlaceholder user lookups built on the fetcher
// =============================================================================

pub mod fetcher;
pub mod github;
pub mod placeholder;

pub use fetcher::{
    fetch_all, fetch_json, fetch_with_callback, fetch_with_status, FetchConfig, FetchError,
    FetchRequest, StatusAndBody,
};
