// src/fetcher/callback.rs
// =============================================================================
// Callback-style wrappers around the async fetch functions.
//
// Instead of awaiting a future, the caller hands over a closure that receives
// the outcome. The closure is an FnOnce, so the compiler guarantees it cannot
// be called twice, and the spawned task calls it exactly once.
//
// The task runs on the current tokio runtime. The returned JoinHandle can be
// awaited to know when the callback has run.
// =============================================================================

use serde_json::Value;
use tokio::task::JoinHandle;

use super::error::FetchError;
use super::fetch::{fetch_json, fetch_with_status, StatusAndBody};
use super::request::FetchRequest;

/// Body-only callback shape
///
/// Must be called from within a tokio runtime.
pub fn fetch_with_callback<F>(request: FetchRequest, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Value, FetchError>) + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = fetch_json(&request).await;
        callback(outcome);
    })
}

/// Status+body callback shape
pub fn fetch_with_status_callback<F>(request: FetchRequest, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<StatusAndBody, FetchError>) + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = fetch_with_status(&request).await;
        callback(outcome);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_callback_receives_success_once() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/1")
            .with_status(200)
            .with_body(r#"{"name":"Leanne Graham"}"#)
            .create_async()
            .await;

        let calls = Arc::new(AtomicUsize::new(0));
        let name = Arc::new(Mutex::new(None));

        let request = FetchRequest::new(&format!("{}/users/1", server.url())).unwrap();
        let handle = {
            let calls = Arc::clone(&calls);
            let name = Arc::clone(&name);
            fetch_with_callback(request, move |outcome| {
                calls.fetch_add(1, Ordering::SeqCst);
                let body = outcome.expect("fetch should succeed");
                *name.lock().unwrap() = body["name"].as_str().map(str::to_string);
            })
        };
        handle.await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(name.lock().unwrap().as_deref(), Some("Leanne Graham"));
    }

    #[tokio::test]
    async fn test_callback_receives_failure_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let status = Arc::new(Mutex::new(None));

        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/1")
            .with_status(500)
            .with_body(r#"{"error":"Oops"}"#)
            .create_async()
            .await;

        let request = FetchRequest::new(&format!("{}/users/1", server.url())).unwrap();
        let handle = {
            let calls = Arc::clone(&calls);
            let status = Arc::clone(&status);
            fetch_with_status_callback(request, move |outcome| {
                calls.fetch_add(1, Ordering::SeqCst);
                *status.lock().unwrap() = outcome.err().and_then(|e| e.status_code());
            })
        };
        handle.await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*status.lock().unwrap(), Some(500));
    }

    #[tokio::test]
    async fn test_callback_reports_transport_error() {
        let transport = Arc::new(Mutex::new(false));

        let request = FetchRequest::new("http://127.0.0.1:1/").unwrap();
        let handle = {
            let transport = Arc::clone(&transport);
            fetch_with_callback(request, move |outcome| {
                *transport.lock().unwrap() = matches!(outcome, Err(ref e) if e.is_transport());
            })
        };
        handle.await.unwrap();

        assert!(*transport.lock().unwrap());
    }
}
