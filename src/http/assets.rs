use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use super::AppState;

/// Document returned for any non-API path with no matching file, so the
/// client can do its own routing.
pub const FALLBACK_DOCUMENT: &str = "index.html";

pub const API_PREFIX: &str = "/api/";

/// Router fallback: serves files from the client directory.
///
/// `/api/` paths are never served from disk and keep the plain 404 an
/// unmatched route gets.
pub async fn serve_asset(State(state): State<AppState>, mut request: Request) -> Response {
    let Some(dir) = state.static_dir.as_ref() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if request.uri().path().starts_with(API_PREFIX) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let fallback = ServeFile::new(dir.join(FALLBACK_DOCUMENT));

    // Files are only read for GET and HEAD; any other method gets the
    // fallback document.
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        *request.method_mut() = Method::GET;
        return match fallback.oneshot(request).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        };
    }

    match ServeDir::new(dir).fallback(fallback).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
