//! Response types for the roster API.
//!
//! This module defines the error response structure and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response body. Every error carries a single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation message.
    pub message: String,
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(message),
        }
    }

    /// Maps an engine error to a response.
    ///
    /// Validation, identifier and not-found errors keep their own message.
    /// Anything else becomes a 500 carrying `failure` instead, so internal
    /// details never reach the caller.
    pub fn from_engine_error(error: EngineError, failure: &str) -> Self {
        match error {
            EngineError::Validation(err) => Self::bad_request(err.to_string()),
            EngineError::InvalidId { .. } => Self::bad_request(error.to_string()),
            EngineError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(error.to_string()),
            },
            EngineError::Store { .. }
            | EngineError::SalaryOverflow { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidSeed { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(failure),
            },
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("Employee not found");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"error":"Employee not found"}"#);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let response = ApiErrorResponse::from_engine_error(
            ValidationError::MissingCountry.into(),
            "Failed to create employee",
        );
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.error, "Country is required");
    }

    #[test]
    fn test_invalid_id_is_bad_request() {
        let response = ApiErrorResponse::from_engine_error(
            EngineError::InvalidId {
                raw: "abc".to_string(),
            },
            "Failed to fetch employee",
        );
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.error, "Invalid employee ID");
    }

    #[test]
    fn test_not_found_is_404() {
        let response = ApiErrorResponse::from_engine_error(
            EngineError::NotFound { id: 9 },
            "Failed to fetch employee",
        );
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.error, "Employee not found");
    }

    #[test]
    fn test_store_error_hides_details() {
        let response = ApiErrorResponse::from_engine_error(
            EngineError::Store {
                message: "connection refused to 10.0.0.3".to_string(),
            },
            "Failed to fetch employees",
        );
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.error, "Failed to fetch employees");
    }

    #[test]
    fn test_salary_overflow_is_500() {
        let response = ApiErrorResponse::from_engine_error(
            EngineError::SalaryOverflow {
                group: "Monaco".to_string(),
            },
            "Failed to fetch country metrics",
        );
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.error, "Failed to fetch country metrics");
    }
}
