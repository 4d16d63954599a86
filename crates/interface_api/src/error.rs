//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;
use domain_billing::BillingError;
use domain_property::DirectoryError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Returns the HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = match &self {
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Conflict(_) => "conflict",
            ApiError::Internal(_) => "internal_error",
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a raw port error that escaped domain translation
fn port_to_api(e: PortError) -> ApiError {
    match e {
        PortError::NotFound { .. } => ApiError::NotFound(e.to_string()),
        PortError::Conflict { .. } => ApiError::Conflict(e.to_string()),
        PortError::Validation { .. } => ApiError::BadRequest(e.to_string()),
        other => ApiError::Internal(other.to_string()),
    }
}

impl From<BillingError> for ApiError {
    fn from(e: BillingError) -> Self {
        match e {
            BillingError::BillNotFound(_) => ApiError::NotFound(e.to_string()),
            BillingError::DuplicateCycle { .. } => ApiError::Conflict(e.to_string()),
            BillingError::InvalidMonth(_)
            | BillingError::InvalidMeterRange { .. }
            | BillingError::InvalidAmount(_)
            | BillingError::InvalidReference(_) => ApiError::BadRequest(e.to_string()),
            BillingError::Store(port) => port_to_api(port),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::PropertyNotFound(_)
            | DirectoryError::UnitNotFound(_)
            | DirectoryError::TenantNotFound(_)
            | DirectoryError::LeaseNotFound(_) => ApiError::NotFound(e.to_string()),
            DirectoryError::DuplicateCode(_)
            | DirectoryError::DuplicateUnitName { .. }
            | DirectoryError::StillReferenced(_) => ApiError::Conflict(e.to_string()),
            DirectoryError::InvalidReference(_) => ApiError::BadRequest(e.to_string()),
            DirectoryError::Store(port) => port_to_api(port),
        }
    }
}
