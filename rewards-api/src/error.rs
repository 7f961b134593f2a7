//! API Error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rewards_core::LedgerError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            ApiError::Ledger(LedgerError::NegativeSponsorBalance { .. }) => (
                StatusCode::BAD_REQUEST,
                "NEGATIVE_PAYER_BALANCE",
                "cannot drive a payer negative".to_string(),
            ),
            ApiError::Ledger(LedgerError::InsufficientBalance { .. }) => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_BALANCE",
                "cannot spend more than available".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
