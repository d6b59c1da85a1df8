//! pokedex-gallery library
//!
//! Searchable card gallery over an in-memory record set, plus the HTTP
//! host that serves it as a document.

use std::sync::Arc;

use axum::Router;
use pokedex_common::Record;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod gallery;

use gallery::GallerySession;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Canonical record set (never mutated)
    pub records: Arc<[Record]>,
}

impl AppState {
    /// Create new application state
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }

    /// Fresh gallery session for one request
    pub fn session(&self) -> GallerySession {
        GallerySession::in_memory(Arc::clone(&self.records))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // Document routes: page load, form submit, clear-filter click
    let document = Router::new()
        .route("/", get(api::serve_index))
        .route(gallery::page::SEARCH_ACTION, get(api::submit_search))
        .route(gallery::page::CLEAR_ACTION, get(api::clear_filter));

    let data = Router::new()
        .route("/api/records", get(api::list_records))
        .route("/api/records/:identifier", get(api::get_record))
        .route("/api/search", get(api::search_records))
        .route("/api/buildinfo", get(api::get_build_info));

    Router::new()
        .merge(document)
        .merge(data)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
