//! Helper functions shared by the handlers.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::pages;
use super::super::AppState;

/// Turn a rendered page into a response, mapping template failures to 500.
pub fn html_response(status: StatusCode, rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

/// 404 page with the given title and message.
pub fn not_found_page(state: &AppState, title: &str, message: &str) -> Response {
    html_response(
        StatusCode::NOT_FOUND,
        pages::render_not_found(&state.site, title, message),
    )
}

/// First value for `key` in a raw query string.
///
/// Repeated keys (`?page=2&page=3`) resolve to the first occurrence.
pub fn first_query_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_query_value() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "3".to_string()),
            ("q".to_string(), "x".to_string()),
        ];
        assert_eq!(first_query_value(&params, "page"), Some("2"));
        assert_eq!(first_query_value(&params, "q"), Some("x"));
        assert_eq!(first_query_value(&params, "missing"), None);
    }
}
