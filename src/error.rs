//! HTTP-facing errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("namespace not found: {0}")]
    NamespaceNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PageNotFound(_) | ApiError::NamespaceNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(
            ApiError::PageNotFound("/tr/x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NamespaceNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::NamespaceNotFound("billing".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ApiError::NamespaceNotFound("billing".into()).to_string(),
            "namespace not found: billing"
        );
    }
}
