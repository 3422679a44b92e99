//! HTTP request handlers for the Attendance Reconciliation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::{csv_filename, report_to_csv};
use crate::models::{PunchEntry, ScheduledShift};
use crate::reconcile::build_report;

use super::request::ComputeRequest;
use super::response::{ApiError, ApiErrorResponse, ComputeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/compute", post(compute_handler))
        .route("/attendance/:job_id/csv", get(csv_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /attendance/compute.
///
/// Accepts the schedule and punch tables plus optional policy overrides,
/// runs the reconciliation engine, stores the report under a fresh job id,
/// and returns the report with that id.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance compute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let policy = request.policy.unwrap_or_default();
    if let Err(err) = policy.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected policy overrides");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let schedule: Vec<ScheduledShift> = request.schedule.into_iter().map(Into::into).collect();
    let punches: Vec<PunchEntry> = request.punches.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let report = build_report(request.employee_name, &schedule, &punches, &policy);
    let duration = start_time.elapsed();

    let job_id = Uuid::new_v4();
    state.store().insert(job_id, report.clone());

    info!(
        correlation_id = %correlation_id,
        job_id = %job_id,
        scheduled_shifts = report.summary.scheduled_shifts,
        shifts_worked = report.summary.shifts_worked,
        warnings = report.warnings.len(),
        duration_us = duration.as_micros(),
        "Attendance computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ComputeResponse { job_id, report }),
    )
        .into_response()
}

/// Handler for GET /attendance/:job_id/csv.
///
/// Renders a previously computed report as a CSV attachment. Unknown,
/// malformed, or expired job ids all yield a 404.
async fn csv_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let report = Uuid::parse_str(&job_id)
        .ok()
        .and_then(|id| state.store().get(&id));

    let Some(report) = report else {
        warn!(job_id = %job_id, "CSV requested for unknown job");
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::job_not_found(&job_id)),
        )
            .into_response();
    };

    let filename = csv_filename(&report, &job_id);
    let body = report_to_csv(&report);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "Attendance Reconciliation Engine is running"
    }))
}
