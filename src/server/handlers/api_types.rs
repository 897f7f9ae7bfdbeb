//! Typed JSON API response envelope.
//!
//! Every endpoint returns this wrapper:
//! ```json
//! { "error": false, "context": {}, "data": { ... } }
//! ```

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::pagination::Pagination;

#[derive(Debug, Serialize)]
pub struct ApiResponse<C: Serialize, T: Serialize> {
    pub error: bool,
    pub context: C,
    pub data: T,
}

/// Empty context for non-paginated responses.
#[derive(Debug, Default, Serialize)]
pub struct EmptyContext {}

/// Pagination context metadata.
#[derive(Debug, Serialize)]
pub struct PaginationContext {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Error payload inside the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorData {
    pub message: String,
}

impl ApiResponse<EmptyContext, ErrorData> {
    pub fn error(status: StatusCode, message: impl Into<String>) -> impl IntoResponse {
        (
            status,
            Json(ApiResponse {
                error: true,
                context: EmptyContext {},
                data: ErrorData {
                    message: message.into(),
                },
            }),
        )
    }
}

impl<T: Serialize> ApiResponse<EmptyContext, T> {
    pub fn ok(data: T) -> Json<ApiResponse<EmptyContext, T>> {
        Json(ApiResponse {
            error: false,
            context: EmptyContext {},
            data,
        })
    }
}

impl<T: Serialize> ApiResponse<PaginationContext, T> {
    pub fn paginated(
        pagination: &Pagination,
        per_page: usize,
        data: T,
    ) -> Json<ApiResponse<PaginationContext, T>> {
        Json(ApiResponse {
            error: false,
            context: PaginationContext {
                page: pagination.current_page,
                per_page,
                total: pagination.total_items,
                total_pages: pagination.total_pages,
            },
            data,
        })
    }
}
