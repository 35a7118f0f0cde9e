// Shared helpers for the integration suites: build an application state
// and drive the real request handler with synthetic requests.
// Each suite uses a different subset of the helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use activities_server::config::{AppState, Config};
use activities_server::handler;
use activities_server::store::{Activity, ActivityStore, load_catalog};
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

/// Default configuration with access logging silenced for test output.
pub fn test_config() -> Config {
    let mut config = Config::load_from("no-such-config-file").unwrap();
    config.logging.access_log = false;
    config
}

/// State backed by the repository seed catalog.
pub fn seeded_state() -> Arc<AppState> {
    let catalog = load_catalog("activities.toml").unwrap();
    state_with_catalog(catalog)
}

/// State backed by a custom catalog.
pub fn state_with_catalog(catalog: HashMap<String, Activity>) -> Arc<AppState> {
    Arc::new(AppState::new(test_config(), ActivityStore::new(catalog)))
}

/// Send one request through the full routing stack.
pub async fn request(state: &Arc<AppState>, method: &str, uri: &str) -> Response<Full<Bytes>> {
    request_with_headers(state, method, uri, &[]).await
}

/// Send one request with extra headers.
pub async fn request_with_headers(
    state: &Arc<AppState>,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
) -> Response<Full<Bytes>> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(()).unwrap();

    let peer: SocketAddr = "127.0.0.1:54321".parse().unwrap();
    handler::handle_request(req, peer, Arc::clone(state))
        .await
        .unwrap()
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
