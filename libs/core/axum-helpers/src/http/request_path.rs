//! Request path tracking for error envelopes.
//!
//! `track_request_path` stores the path of the in-flight request in a tokio
//! task-local so that `ErrorResponse::new` can stamp it without handlers
//! threading the URI through every error.

use axum::{
    extract::{OriginalUri, Request},
    middleware::Next,
    response::Response,
};
use std::future::Future;

tokio::task_local! {
    static REQUEST_PATH: String;
}

/// Middleware that records the original request path for the duration of the request.
///
/// Uses `OriginalUri` when present so nested routers still report the full path.
///
/// # Example
/// ```ignore
/// let router = Router::new()
///     .route("/", get(list))
///     .layer(axum::middleware::from_fn(track_request_path));
/// ```
pub async fn track_request_path(request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    REQUEST_PATH.scope(path, next.run(request)).await
}

/// Run `future` with `path` as the current request path.
pub async fn with_request_path<F: Future>(path: String, future: F) -> F::Output {
    REQUEST_PATH.scope(path, future).await
}

/// Path of the request being handled on this task, if any.
pub fn current_request_path() -> Option<String> {
    REQUEST_PATH.try_with(Clone::clone).ok()
}
