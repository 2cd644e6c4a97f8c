// src/github/mod.rs
// =============================================================================
// This module handles requests to the GitHub REST API.
//
// Currently implements:
// - Fetching a user by username
// - Fetching a user's repositories (by chaining through repos_url)
// - Fetching several users concurrently
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;

// Re-export the client and its types
pub use fetch::{parse_username, GithubClient, GithubRepo, GithubUser, GITHUB_API_URL};
