//! HTTP API module for the Attendance Reconciliation Engine.
//!
//! This module provides the REST endpoints for computing attendance reports
//! and downloading them as CSV.

mod handlers;
mod request;
mod response;
mod state;
mod store;

pub use handlers::create_router;
pub use request::{ComputeRequest, PunchEntryRequest, ScheduledShiftRequest};
pub use response::{ApiError, ComputeResponse};
pub use state::AppState;
pub use store::{InMemoryResultStore, ResultStore, DEFAULT_RESULT_TTL};
