//! HTTP surface: the contacts API plus optional static asset hosting.

pub mod assets;
pub mod payload;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::ContactManager;
use crate::store::ContactStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Repository operations over the backing store.
    pub contacts: ContactManager,
    /// Prebuilt client directory, when one exists on disk.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(storage: Arc<dyn ContactStore>) -> Self {
        Self {
            contacts: ContactManager::new(storage),
            static_dir: None,
        }
    }

    /// Serves assets from `dir` if it exists right now. A missing directory
    /// disables asset hosting entirely.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if dir.is_dir() {
            tracing::info!(dir = %dir.display(), "serving static client files");
            self.static_dir = Some(dir);
        } else {
            tracing::debug!(dir = %dir.display(), "no static client directory");
            self.static_dir = None;
        }
        self
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    let collection = get(routes::list_contacts).post(routes::create_contact);
    let member = get(routes::get_contact)
        .put(routes::update_contact)
        .delete(routes::delete_contact);

    // Paths match with or without a trailing slash.
    let mut router = Router::new()
        .route("/api/contacts", collection.clone())
        .route("/api/contacts/", collection)
        .route("/api/contacts/:id", member.clone())
        .route("/api/contacts/:id/", member);

    if state.static_dir.is_some() {
        router = router.fallback(assets::serve_asset);
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
