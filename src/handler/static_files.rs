//! Static file serving module
//!
//! Handles loading the front-end bundle, MIME type detection, and
//! response building.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve static files from a directory
pub async fn serve_directory(
    ctx: &RequestContext<'_>,
    dir: &str,
    route_prefix: &str,
    index_files: &[String],
) -> Response<Full<Bytes>> {
    match load_from_directory(dir, ctx.path, route_prefix, index_files).await {
        Some((content, content_type)) => build_static_file_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Load static file from directory with index file support
pub async fn load_from_directory(
    static_dir: &str,
    path: &str,
    route_prefix: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    // Remove route prefix from path
    let prefix_clean = route_prefix.trim_matches('/');
    let relative_path = if prefix_clean.is_empty() {
        clean_path.as_str()
    } else {
        clean_path
            .strip_prefix(&format!("{prefix_clean}/"))
            .unwrap_or(&clean_path)
    };
    // A leading slash would make join() discard static_dir
    let relative_path = relative_path.trim_start_matches('/');

    let mut file_path = Path::new(static_dir).join(relative_path);

    // Security: ensure file_path is within static_dir
    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // Check if path is a directory, try index files
    if file_path.is_dir() || relative_path.is_empty() || relative_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.exists() && index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    // Determine content type from extension
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build static file response with `ETag` support
fn build_static_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    // Check if client has cached version
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    // build_cached_response keeps Content-Length but empties the body on HEAD
    http::build_cached_response(Bytes::from(data.to_owned()), content_type, &etag, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &[String] = &[];

    #[tokio::test]
    async fn loads_bundle_files_with_content_type() {
        let (content, content_type) =
            load_from_directory("static", "/static/index.html", "/static", INDEX)
                .await
                .unwrap();
        assert!(!content.is_empty());
        assert_eq!(content_type, "text/html; charset=utf-8");

        let (_, css_type) = load_from_directory("static", "/static/styles.css", "/static", INDEX)
            .await
            .unwrap();
        assert_eq!(css_type, "text/css");
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let result =
            load_from_directory("static", "/static/nonexistent.html", "/static", INDEX).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn traversal_is_blocked() {
        let result =
            load_from_directory("static", "/static/../Cargo.toml", "/static", INDEX).await;
        assert!(result.is_none());

        let result = load_from_directory("static", "/static/%2e%2e/Cargo.toml", "/static", INDEX)
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn directory_request_uses_index_files() {
        let index_files = vec!["index.html".to_string()];
        let (content, content_type) =
            load_from_directory("static", "/static/", "/static", &index_files)
                .await
                .unwrap();
        assert!(!content.is_empty());
        assert_eq!(content_type, "text/html; charset=utf-8");
    }
}
