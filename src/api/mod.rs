// API module entry
// REST surface for the activities catalog

mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::AppState;

// Re-export public types
pub use response::*;

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
/// Path segments are percent-decoded before matching, so activity names
/// containing spaces ("Chess%20Club") resolve correctly.
pub async fn dispatch(
    method: &Method,
    path: &str,
    query: Option<&str>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let segments: Vec<String> = path
        .trim_matches('/')
        .split('/')
        .map(decode_component)
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match (method, segments.as_slice()) {
        (&Method::GET, ["activities"]) => handlers::list_activities(state).await,
        (&Method::POST, ["activities", name, "signup"]) => {
            handlers::signup(state, name, query).await
        }
        (&Method::DELETE, ["activities", name, "unregister"]) => {
            handlers::unregister(state, name, query).await
        }
        // Unknown route or method
        _ => response::not_found(),
    }
}

/// Percent-decode one path segment or query value.
///
/// Malformed sequences fall back to the raw input rather than failing the
/// request.
fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Extract a query parameter by name, percent-decoded.
pub(crate) fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then(|| decode_component(value))
    })
}
