// Activities API handlers module
// List, signup and unregister operations over the shared store

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::query_param;
use super::response::{detail_response, json_response, message_response, missing_parameter};
use crate::config::AppState;
use crate::store::{SignupError, UnregisterError};

/// GET /activities
///
/// Returns the full catalog with current rosters.
pub async fn list_activities(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let snapshot = state.store.snapshot().await;
    json_response(StatusCode::OK, &snapshot)
}

/// POST /activities/{name}/signup?email=...
pub async fn signup(
    state: &Arc<AppState>,
    name: &str,
    query: Option<&str>,
) -> Response<Full<Bytes>> {
    let Some(email) = query_param(query, "email") else {
        return missing_parameter("email");
    };

    match state.store.signup(name, &email).await {
        Ok(message) => message_response(&message),
        Err(err) => {
            let status = match err {
                SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
                SignupError::AlreadySignedUp | SignupError::ActivityFull => {
                    StatusCode::BAD_REQUEST
                }
            };
            detail_response(status, &err.to_string())
        }
    }
}

/// DELETE /activities/{name}/unregister?email=...
pub async fn unregister(
    state: &Arc<AppState>,
    name: &str,
    query: Option<&str>,
) -> Response<Full<Bytes>> {
    let Some(email) = query_param(query, "email") else {
        return missing_parameter("email");
    };

    match state.store.unregister(name, &email).await {
        Ok(message) => message_response(&message),
        Err(err) => {
            let status = match err {
                UnregisterError::ActivityNotFound => StatusCode::NOT_FOUND,
                UnregisterError::NotSignedUp => StatusCode::BAD_REQUEST,
            };
            detail_response(status, &err.to_string())
        }
    }
}
