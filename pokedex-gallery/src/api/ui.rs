//! Gallery document routes
//!
//! Each request gets its own session, so handlers never share mutable state.
//! The browser's form submit and button click arrive here as GET requests.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::gallery::{render_page, GallerySession};
use crate::AppState;

/// Raw values of the two search inputs
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub category: String,
}

/// GET /
///
/// Initial page load renders the full set
pub async fn serve_index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let mut session = state.session();
    session.load();
    page(&session)
}

/// GET /search?phrase=..&category=..
///
/// Search form submission
pub async fn submit_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, PageError> {
    let mut session = state.session();
    let count = session.submit(&query.phrase, &query.category);
    info!(
        phrase = %query.phrase,
        category = %query.category,
        results = count,
        "Search submitted"
    );
    page(&session)
}

/// GET /clear
///
/// Clear-filter button
pub async fn clear_filter(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let mut session = state.session();
    session.clear_filter();
    page(&session)
}

fn page(session: &GallerySession) -> Result<Html<String>, PageError> {
    render_page(session.surface(), session.form())
        .map(Html)
        .map_err(|e| PageError::Template(e.to_string()))
}

/// Page rendering errors
#[derive(Debug)]
pub enum PageError {
    Template(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Template(msg) => {
                error!("Failed to render gallery page: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", msg),
                )
                    .into_response()
            }
        }
    }
}
