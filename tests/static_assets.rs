use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use rolodex_server::prelude::*;

const INDEX_HTML: &str = "<!doctype html><title>Rolodex</title>";

fn client_dir(with_index: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.js"), "console.log('rolodex');").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("style.css"), "body {}").unwrap();
    if with_index {
        fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    }
    dir
}

fn app_serving(dir: &Path) -> Router {
    build_router(AppState::new(Arc::new(MemStore::new())).with_static_dir(dir))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    request(app, Method::GET, uri).await
}

async fn request(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_existing_files_verbatim() {
    let dir = client_dir(true);
    let app = app_serving(dir.path());

    let (status, body) = get(&app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('rolodex');");

    let (status, body) = get(&app, "/assets/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body {}");
}

#[tokio::test]
async fn root_and_client_routes_get_fallback_document() {
    let dir = client_dir(true);
    let app = app_serving(dir.path());

    for uri in ["/", "/contacts/42/edit", "/missing.png"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, INDEX_HTML, "{uri}");
    }
}

#[tokio::test]
async fn api_paths_never_fall_back() {
    let dir = client_dir(true);
    let app = app_serving(dir.path());

    let (status, body) = get(&app, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = get(&app, "/api/contacts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn missing_fallback_document_is_not_found() {
    let dir = client_dir(false);
    let app = app_serving(dir.path());

    let (status, _) = get(&app, "/contacts/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn absent_client_directory_disables_asset_hosting() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_serving(&dir.path().join("client"));

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, _) = get(&app, "/api/contacts").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn other_methods_on_client_paths_get_fallback_document() {
    let dir = client_dir(true);
    let app = app_serving(dir.path());

    for (method, uri) in [
        (Method::POST, "/contacts/new"),
        (Method::POST, "/app.js"),
        (Method::DELETE, "/"),
    ] {
        let (status, body) = request(&app, method.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{method} {uri}");
        assert_eq!(body, INDEX_HTML, "{method} {uri}");
    }

    let (status, body) = request(&app, Method::POST, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}
