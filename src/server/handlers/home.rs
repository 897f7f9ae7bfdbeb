//! Listing page handlers.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
};

use super::super::pages::{self, LinkStyle};
use super::super::AppState;
use super::helpers::{first_query_value, html_response};
use crate::pagination::Pagination;

/// Listing page, `/?page=N`.
///
/// The query is taken as raw pairs so that junk or repeated `page` values
/// fall back to a valid page instead of a 400.
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let pagination = Pagination::resolve(first_query_value(&params, "page"), state.store.len());
    render(&state, &pagination)
}

/// Listing page in path form, `/page/:page`.
///
/// A segment that does not decode (e.g. `/page/%FF`) is treated like any
/// other junk input and lands on page 1.
pub async fn home_page(
    State(state): State<AppState>,
    page: Result<Path<String>, PathRejection>,
) -> Response {
    let page = page.ok().map(|Path(page)| page);
    let pagination = Pagination::resolve(page.as_deref(), state.store.len());
    render(&state, &pagination)
}

fn render(state: &AppState, pagination: &Pagination) -> Response {
    tracing::debug!(
        "Rendering listing page {}/{}",
        pagination.current_page,
        pagination.total_pages
    );
    html_response(
        StatusCode::OK,
        pages::render_home(&state.site, &state.store, pagination, LinkStyle::Query),
    )
}
