// Error handling module for the Alimento API
// Provides the wire-level error type and its HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::ToSchema;

use crate::catalog::CatalogError;
use crate::orders::{OrderError, ValidationError};

/// Main error type for the API
/// All handlers return Result<T, ApiError>
///
/// Each variant maps to a specific HTTP status code and error code.
#[derive(Debug)]
pub enum ApiError {
    /// Rejected order input
    /// Maps to HTTP 400 Bad Request
    Validation(ValidationError),

    /// Request body is not a JSON order
    /// Maps to HTTP 400 Bad Request
    MalformedBody(String),

    /// Resource not found by key
    /// Maps to HTTP 404 Not Found
    NotFound { resource: String, id: String },

    /// Duplicate resource conflict
    /// Maps to HTTP 409 Conflict
    Conflict { message: String },

    /// The order could not be recorded in the ledger
    /// Maps to HTTP 500; details stay in the logs
    Persistence(String),
}

/// Consistent error response structure
///
/// `error` carries the human-readable message, `error_code` the
/// machine-readable classification.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "No items in order")]
    pub error: String,

    #[schema(example = "EMPTY_ITEMS")]
    pub error_code: String,

    /// RFC 3339 timestamp of when the error occurred
    pub timestamp: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, error_code: &str) -> Self {
        Self {
            error: error.into(),
            error_code: error_code.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Convert ApiError to HTTP status code and ErrorResponse
    ///
    /// Logging level follows severity: debug for expected client errors,
    /// warn for conflicts, error for anything that breaks the write path.
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::Validation(reason) => {
                debug!("Validation error: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(reason.to_string(), reason.code()),
                )
            }
            ApiError::MalformedBody(detail) => {
                debug!("Malformed request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(format!("Malformed request body: {}", detail), "INVALID_BODY"),
                )
            }
            ApiError::NotFound { resource, id } => {
                debug!("Resource not found: {} with id {}", resource, id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(format!("{} {} not found", resource, id), "NOT_FOUND"),
                )
            }
            ApiError::Conflict { message } => {
                warn!("Conflict error: {}", message);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new(message.clone(), "CONFLICT"),
                )
            }
            ApiError::Persistence(detail) => {
                error!("Persistence error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("The order could not be recorded", "PERSISTENCE_ERROR"),
                )
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(reason) => ApiError::Validation(reason),
            OrderError::NotFound(order_number) => ApiError::NotFound {
                resource: "Order".to_string(),
                id: order_number,
            },
            OrderError::DuplicateOrderNumber(order_number) => ApiError::Conflict {
                message: format!("Order number {} already recorded", order_number),
            },
            err @ OrderError::LedgerTimeout(_) => ApiError::Persistence(err.to_string()),
        }
    }
}

/// Errors that stop the server from starting
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Invalid menu: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to initialise order ledger: {0}")]
    Ledger(#[from] OrderError),
}

/// Fallback for unmatched routes
pub async fn route_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound {
        resource: "Route".to_string(),
        id: uri.path().to_string(),
    }
}
