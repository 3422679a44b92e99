//! Response types for the Attendance Reconciliation Engine API.
//!
//! This module defines the compute response wrapper, the error response
//! structures, and the mapping from engine errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AttendanceReport;

/// Successful response body of the `/attendance/compute` endpoint.
///
/// The report plus the job id the result was stored under, for the
/// follow-up CSV download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    /// The id the report is stored under for CSV download.
    pub job_id: Uuid,
    /// The full report document.
    #[serde(flatten)]
    pub report: AttendanceReport,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a job-not-found error response.
    pub fn job_not_found(job_id: &str) -> Self {
        Self::with_details(
            "JOB_NOT_FOUND",
            format!("Job not found: {}", job_id),
            "The job id is unknown or its result has expired",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::PolicyNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "POLICY_ERROR",
                    "Policy configuration error",
                    format!("Policy file not found: {}", path),
                ),
            },
            EngineError::PolicyParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "POLICY_ERROR",
                    "Policy parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_POLICY",
                    format!("Invalid time format: {}", value),
                    "Shift window bounds must be HH:MM strings",
                ),
            },
            EngineError::InvalidPolicy { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_POLICY",
                    format!("Invalid policy field '{}': {}", field, message),
                    "The policy overrides contain invalid values",
                ),
            },
            EngineError::JobNotFound { job_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::job_not_found(&job_id),
            },
        }
    }
}
