// src/fetcher/fetch.rs
// =============================================================================
// This module performs a single HTTP GET and turns the answer into JSON.
//
// Lifecycle of one request:
//   Idle -> Connecting -> Streaming -> Succeeded | Failed
//
// - Connecting: open the connection and send the GET with our headers.
//   A transport error here ends the request immediately.
// - Streaming: read the body chunk by chunk into a buffer owned by this call.
// - At the end of the body we look at the status code:
//   >= 400 fails with just the code (the body is thrown away),
//   anything else is parsed as JSON.
//
// Each call builds its own client with idle pooling turned off, so every
// fetch opens its own connection and nothing is shared between calls.
//
// Rust concepts:
// - async/await: the body is read without blocking the caller
// - Generics: one pipeline, several ways to decode the body
// - FnOnce: a closure that is called exactly once
// =============================================================================

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::error::FetchError;
use super::request::FetchRequest;

/// Success value for callers that also want the status code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusAndBody {
    pub status_code: u16,
    pub body: Value,
}

// Where a request currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchState {
    Idle,
    Connecting,
    Streaming,
    Succeeded,
    Failed,
}

impl FetchState {
    // Succeeded and Failed are final
    fn is_terminal(self) -> bool {
        matches!(self, FetchState::Succeeded | FetchState::Failed)
    }

    fn advance(&mut self, url: &Url, next: FetchState) {
        debug_assert!(!self.is_terminal(), "request already finished");
        debug!("{}: {:?} -> {:?}", url, self, next);
        *self = next;
    }
}

// Fetches a URL and returns the body as an untyped JSON document
//
// This is the body-only variant: the status code is only used to decide
// between success and failure.
//
// Example:
//   let request = FetchRequest::new("https://jsonplaceholder.typicode.com/users/1")?;
//   let user = fetch_json(&request).await?;
//   println!("{}", user["name"]);
pub async fn fetch_json(request: &FetchRequest) -> Result<Value, FetchError> {
    fetch_as(request).await
}

// Fetches a URL and returns (status code, JSON body)
pub async fn fetch_with_status(request: &FetchRequest) -> Result<StatusAndBody, FetchError> {
    run(request, |status_code, body| {
        Ok(StatusAndBody {
            status_code,
            body: serde_json::from_slice(&body)?,
        })
    })
    .await
}

// Fetches a URL and deserializes the body straight into `T`
//
// A body that is valid JSON but has the wrong shape for `T` is reported
// as a parse error too.
pub async fn fetch_as<T: DeserializeOwned>(request: &FetchRequest) -> Result<T, FetchError> {
    run(request, |_status, body| Ok(serde_json::from_slice(&body)?)).await
}

// Drives one request through its lifecycle and records how it ended
//
// `decode` only runs when the status code is below 400.
async fn run<T, F>(request: &FetchRequest, decode: F) -> Result<T, FetchError>
where
    F: FnOnce(u16, Vec<u8>) -> Result<T, FetchError>,
{
    let mut state = FetchState::Idle;

    let result = match read_body(request, &mut state).await {
        Ok((status, body)) => decode(status, body),
        Err(e) => Err(e),
    };

    let terminal = if result.is_ok() {
        FetchState::Succeeded
    } else {
        FetchState::Failed
    };
    state.advance(request.url(), terminal);

    if let Err(e) = &result {
        debug!("{}: {}", request.url(), e);
    }
    result
}

// Sends the GET, accumulates the body and checks the status code
//
// Returns the status code and the full body on success.
async fn read_body(request: &FetchRequest, state: &mut FetchState) -> Result<(u16, Vec<u8>), FetchError> {
    state.advance(request.url(), FetchState::Connecting);

    // One client per call: no connection is kept around for the next fetch.
    // Redirects are not followed, a 3xx is classified like any other status.
    let client = Client::builder()
        .pool_max_idle_per_host(0)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let mut response = client
        .get(request.url().clone())
        .headers(request.headers().clone())
        .send()
        .await?;

    state.advance(request.url(), FetchState::Streaming);

    // The accumulator lives only as long as this call
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        debug!("{}: received {} bytes", request.url(), chunk.len());
        body.extend_from_slice(&chunk);
    }

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(FetchError::HttpStatus(status));
    }

    Ok((status, body))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why read the body with chunk() instead of text()?
//    - Bodies arrive over the network in pieces
//    - chunk() hands us each piece as soon as it arrives
//    - We append the pieces to a Vec<u8> in the order they came in
//
// 2. Why is the status checked after the body is read?
//    - The whole exchange finishes before we decide anything
//    - For status >= 400 we still drain the body, but never parse it
//
// 3. What does DeserializeOwned mean?
//    - "Any type serde can build from JSON without borrowing the input"
//    - serde_json::Value works, and so does any #[derive(Deserialize)] struct
//
// 4. Why the `run` helper with a closure?
//    - All variants share the same connect/stream/classify steps
//    - Only the last step (turning bytes into a value) differs
// -----------------------------------------------------------------------------
