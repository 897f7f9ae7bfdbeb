//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/entries", get(handlers::api_entries))
        .route("/api/entries/:date", get(handlers::api_entry))
        .layer(CorsLayer::permissive());

    Router::new()
        // Listing, in query and path form
        .route("/", get(handlers::home))
        .route("/page/:page", get(handlers::home_page))
        .route("/page/:page/", get(handlers::home_page))
        .route("/what", get(handlers::about_page))
        .route("/static/style.css", get(handlers::serve_css))
        // Entry detail; static segments above take priority
        .route("/:date", get(handlers::entry_detail))
        .route("/:date/", get(handlers::entry_detail))
        .merge(api)
        .fallback(handlers::not_found)
        .with_state(state)
}
