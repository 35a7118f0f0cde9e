//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route matching, and access logging.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::HeaderMap;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for static serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type: no route reads a request body, and tests
/// drive the handler with synthetic requests.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let http_version = version_label(req.version());
    let user_agent = header_string(req.headers(), "user-agent");

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let ctx = RequestContext {
        path: uri.path(),
        is_head: method == Method::HEAD,
        if_none_match: header_string(req.headers(), "if-none-match"),
    };

    // Reject oversized payloads before routing
    let response = match check_body_size(req.headers(), state.config.http.max_body_size) {
        Some(resp) => resp,
        None => route_request(&method, &ctx, uri.query(), &state).await,
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = response_body_bytes(&response);
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
async fn route_request(
    method: &Method,
    ctx: &RequestContext<'_>,
    query: Option<&str>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    // 1. Preflight requests, including those for the API routes
    if *method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    // 2. Activities API (handles its own method matching, including POST/DELETE)
    if ctx.path == "/activities" || ctx.path.starts_with("/activities/") {
        return api::dispatch(method, ctx.path, query, state).await;
    }

    // 3. Everything else is read-only
    match *method {
        Method::GET | Method::HEAD => {
            let statics = &state.config.static_files;

            // Root path redirects to the front-end index document
            if ctx.path == "/" {
                return http::build_redirect_response(&statics.index_redirect_target(), 307);
            }

            if in_static_prefix(ctx.path, &statics.route_prefix) {
                return static_files::serve_directory(
                    ctx,
                    &statics.dir,
                    &statics.route_prefix,
                    &statics.index_files,
                )
                .await;
            }

            http::build_404_response()
        }
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {}", ctx.path));
            http::build_405_response("GET, HEAD, OPTIONS")
        }
    }
}

fn in_static_prefix(path: &str, route_prefix: &str) -> bool {
    let prefix = route_prefix.trim_end_matches('/');
    path == prefix || path.starts_with(&format!("{prefix}/"))
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: hyper::Version) -> String {
    match version {
        hyper::Version::HTTP_10 => "1.0".to_string(),
        hyper::Version::HTTP_2 => "2".to_string(),
        _ => "1.1".to_string(),
    }
}

fn response_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body as _;

    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_prefix_matching() {
        assert!(in_static_prefix("/static/index.html", "/static"));
        assert!(in_static_prefix("/static", "/static"));
        assert!(in_static_prefix("/static/css/app.css", "/static/"));
        assert!(!in_static_prefix("/staticfile", "/static"));
        assert!(!in_static_prefix("/activities", "/static"));
    }
}
