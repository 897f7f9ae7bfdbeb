//! Entry detail handler and the not-found fallback.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::Response,
};

use super::super::pages;
use super::super::AppState;
use super::helpers::{html_response, not_found_page};

const ENTRY_NOT_FOUND: &str = "There is no diary entry for that date.";

/// Entry detail page, `/:date`.
///
/// A segment that does not decode to UTF-8 cannot match any key, so it gets
/// the same 404 page as an unknown date.
pub async fn entry_detail(
    State(state): State<AppState>,
    date: Result<Path<String>, PathRejection>,
) -> Response {
    let date = match date {
        Ok(Path(date)) => date,
        Err(e) => {
            tracing::debug!("Undecodable entry path: {}", e);
            return not_found_page(&state, pages::ENTRY_NOT_FOUND_TITLE, ENTRY_NOT_FOUND);
        }
    };

    match state.store.find_by_key(&date) {
        Some(entry) => html_response(StatusCode::OK, pages::render_entry(&state.site, entry)),
        None => {
            tracing::debug!("No diary entry for {:?}", date);
            not_found_page(&state, pages::ENTRY_NOT_FOUND_TITLE, ENTRY_NOT_FOUND)
        }
    }
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri.path());
    not_found_page(
        &state,
        pages::PAGE_NOT_FOUND_TITLE,
        pages::PAGE_NOT_FOUND_MESSAGE,
    )
}
