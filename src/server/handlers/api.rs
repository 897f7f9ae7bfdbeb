//! Read-only JSON API over the entry store.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::AppState;
use super::api_types::ApiResponse;
use super::helpers::first_query_value;
use crate::pagination::{Pagination, PAGE_SIZE};

/// One page of entries, `/api/entries?page=N`.
pub async fn api_entries(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let pagination = Pagination::resolve(first_query_value(&params, "page"), state.store.len());
    let entries = state.store.page(&pagination);
    ApiResponse::paginated(&pagination, PAGE_SIZE, entries).into_response()
}

/// Single entry, `/api/entries/:date`.
pub async fn api_entry(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    match state.store.find_by_key(&date) {
        Some(entry) => ApiResponse::ok(entry).into_response(),
        None => ApiResponse::error(
            StatusCode::NOT_FOUND,
            format!("No diary entry for {}", date),
        )
        .into_response(),
    }
}
