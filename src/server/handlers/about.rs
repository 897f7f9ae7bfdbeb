//! About page handler.

use axum::{extract::State, http::StatusCode, response::Response};

use super::super::pages;
use super::super::AppState;
use super::helpers::html_response;

/// "What is this?" page, `/what`.
pub async fn about_page(State(state): State<AppState>) -> Response {
    html_response(StatusCode::OK, pages::render_about(&state.site))
}
