// src/github/fetch.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// What it can do:
// - Look up a user: GET https://api.github.com/users/{username}
// - List a user's repositories by following the `repos_url` in the user
// - Look up several users at once and wait for all of them
//
// GitHub rejects requests without a User-Agent header, so every request is
// built from a FetchConfig that carries one.
//
// Rust concepts:
// - #[derive(Deserialize)]: serde fills our structs from the JSON body
// - async functions: For network I/O
// - Option<T>: For fields GitHub may leave out or set to null
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::fetcher::{fetch_all_as, fetch_as, FetchConfig, FetchError, FetchRequest};

/// Public GitHub REST API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// The parts of a GitHub user we care about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    /// Display name, null when the user never set one
    #[serde(default)]
    pub name: Option<String>,
    pub repos_url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u32>,
}

/// The parts of a GitHub repository we care about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
}

// A small client for the GitHub API
//
// It holds no connection, only where to send requests and which
// headers to send with them.
#[derive(Debug, Clone)]
pub struct GithubClient {
    base_url: Url,
    config: FetchConfig,
}

impl GithubClient {
    /// Client for api.github.com with the required User-Agent
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(GITHUB_API_URL, FetchConfig::github())
    }

    /// Client for another base URL (a mock server in tests, or GitHub Enterprise)
    pub fn with_base_url(base_url: &str, config: FetchConfig) -> Result<Self, FetchError> {
        // Validates the URL the same way every request will
        let base = FetchRequest::new(base_url)?;
        Ok(Self {
            base_url: base.url().clone(),
            config,
        })
    }

    // Fetches one user
    //
    // Example:
    //   client.get_user("oliverjam").await?.repos_url
    //     -> "https://api.github.com/users/oliverjam/repos"
    pub async fn get_user(&self, username: &str) -> Result<GithubUser, FetchError> {
        let request = self.user_request(username)?;
        fetch_as(&request).await
    }

    /// Fetches the repositories listed at `user.repos_url`
    pub async fn get_repos(&self, user: &GithubUser) -> Result<Vec<GithubRepo>, FetchError> {
        let request = FetchRequest::new(&user.repos_url)?.with_config(&self.config);
        fetch_as(&request).await
    }

    /// Looks up a user, then follows their repos_url
    pub async fn get_user_repos(&self, username: &str) -> Result<(GithubUser, Vec<GithubRepo>)> {
        let user = self
            .get_user(username)
            .await
            .with_context(|| format!("Failed to fetch GitHub user '{}'", username))?;

        let repos = self
            .get_repos(&user)
            .await
            .with_context(|| format!("Failed to fetch repositories of '{}'", user.login))?;

        Ok((user, repos))
    }

    // Looks up several users concurrently
    //
    // Results are in the same order as `usernames`. If any lookup fails,
    // the whole call fails.
    pub async fn get_users(&self, usernames: &[String]) -> Result<Vec<GithubUser>, FetchError> {
        let requests = usernames
            .iter()
            .map(|username| self.user_request(username))
            .collect::<Result<Vec<_>, _>>()?;

        fetch_all_as(&requests).await
    }

    fn user_request(&self, username: &str) -> Result<FetchRequest, FetchError> {
        let username = parse_username(username)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push("users")
            .push(&username);

        Ok(FetchRequest::from_url(url)?.with_config(&self.config))
    }
}

// Extracts a GitHub username from user input
//
// Supported formats:
//   - oliverjam
//   - https://github.com/oliverjam
//   - github.com/oliverjam/
//
// GitHub usernames only contain ASCII letters, digits and '-'.
pub fn parse_username(input: &str) -> Result<String, FetchError> {
    // Remove common prefixes
    let name = input
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_start_matches("github.com/")
        .trim_end_matches('/');

    if name.is_empty() {
        return Err(FetchError::InvalidUrl("empty GitHub username".to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(FetchError::InvalidUrl(format!("not a GitHub username: '{}'", input)));
    }

    Ok(name.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does get_user_repos return anyhow::Result?
//    - It chains two requests, and we want to know which one failed
//    - .with_context() wraps the FetchError with a readable message
//    - The single-request methods keep the precise FetchError instead
//
// 2. What is path_segments_mut()?
//    - It lets us append path segments to a Url safely
//    - Characters that are not allowed in a path get percent-encoded
//    - pop_if_empty() removes a trailing "/" from the base URL first
//
// 3. Why collect::<Result<Vec<_>, _>>()?
//    - Building each request can fail (bad username)
//    - Collecting into Result stops at the first error
// -----------------------------------------------------------------------------
