//! Response envelopes shared by every catalog endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::PaginationOutput;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field → messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Single-resource envelope: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Pagination block of a collection response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
    pub total: u64,
}

/// Collection envelope: `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> CollectionResponse<T> {
    /// Presents every item of a page with `f`.
    pub fn from_output<O>(output: PaginationOutput<O>, f: impl FnMut(O) -> T) -> Self {
        Self {
            meta: PaginationMeta {
                current_page: output.current_page,
                per_page: output.per_page,
                last_page: output.last_page,
                total: output.total,
            },
            data: output.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_missing_details() {
        let body = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")).unwrap();
        assert_eq!(body, serde_json::json!({"code": "NOT_FOUND", "message": "gone"}));
    }

    #[test]
    fn collection_copies_pagination_meta() {
        let output = PaginationOutput {
            items: vec![1, 2],
            total: 7,
            current_page: 2,
            last_page: 4,
            per_page: 2,
        };

        let response = CollectionResponse::from_output(output, |n| n * 10);

        assert_eq!(response.data, [10, 20]);
        assert_eq!(
            serde_json::to_value(response.meta).unwrap(),
            serde_json::json!({"current_page": 2, "per_page": 2, "last_page": 4, "total": 7})
        );
    }
}
