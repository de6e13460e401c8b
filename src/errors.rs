//! # Order Errors
//!
//! Error types shared by the repository, service and HTTP layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;

/// Failures surfaced by an order lookup
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The backing repository could not answer the lookup
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OrderError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<OrderError> for ErrorResponse {
    fn from(err: OrderError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_is_internal() {
        let err = OrderError::Storage("disk gone".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Storage error: disk gone");
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(OrderError::Storage("offline".to_string()));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["code"], 500);
        assert_eq!(json["error"], "Storage error: offline");
    }

    #[test]
    fn test_into_response_status() {
        let response = OrderError::Storage("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
