//! Mapping of handler failures to HTTP responses

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::types::ErrorResponse;

pub const SERVICE_UNAVAILABLE_DETAIL: &str = "AI Service is not available. Check API key.";
pub const EMPTY_SYMPTOMS_DETAIL: &str = "Symptoms cannot be empty.";
pub const INTERNAL_ERROR_DETAIL: &str = "An internal error occurred.";

/// An HTTP error carrying a client-facing detail message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn service_unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, SERVICE_UNAVAILABLE_DETAIL)
    }

    #[must_use]
    pub fn empty_symptoms() -> Self {
        Self::new(StatusCode::BAD_REQUEST, EMPTY_SYMPTOMS_DETAIL)
    }

    /// Generic 500; the cause is logged by the caller, never returned
    #[must_use]
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            ApiError::service_unavailable().status,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ApiError::empty_symptoms().detail, "Symptoms cannot be empty.");
        assert_eq!(
            ApiError::internal().to_string(),
            "500 Internal Server Error: An internal error occurred."
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::empty_symptoms().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
