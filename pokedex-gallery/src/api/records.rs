//! Record data as JSON

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokedex_common::Record;
use serde::Serialize;
use serde_json::json;

use super::ui::SearchQuery;
use crate::gallery::{find_matches, search_terms};
use crate::AppState;

/// Search response with results and the query that produced them
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub phrase: String,
    pub category: String,
    pub total_results: usize,
    pub records: Vec<Record>,
}

/// GET /api/records
///
/// The canonical record set, uncapitalized, in source order
pub async fn list_records(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.records.to_vec())
}

/// GET /api/records/:identifier
pub async fn get_record(
    State(state): State<AppState>,
    Path(identifier): Path<u32>,
) -> Result<Json<Record>, RecordError> {
    state
        .records
        .iter()
        .find(|r| r.identifier == identifier)
        .cloned()
        .map(Json)
        .ok_or(RecordError::NotFound(identifier))
}

/// GET /api/search?phrase=..&category=..
///
/// Same matching as the search form, without rendering
pub async fn search_records(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let terms = search_terms(&query.phrase, &query.category);
    let records: Vec<Record> = find_matches(&terms, &state.records)
        .into_iter()
        .cloned()
        .collect();

    Json(SearchResponse {
        phrase: query.phrase,
        category: query.category,
        total_results: records.len(),
        records,
    })
}

/// Record lookup errors
#[derive(Debug)]
pub enum RecordError {
    NotFound(u32),
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecordError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("No record with identifier {}", id))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
