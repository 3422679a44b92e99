//! Error types for the Attendance Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the reconciliation core itself is total and never fails for a
//! well-formed pair of input tables; these errors belong to the boundary
//! layers (policy loading, request validation, job lookup).

use thiserror::Error;

/// The main error type for the Attendance Reconciliation Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::PolicyNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day string in a shift window was not valid `HH:MM`.
    #[error("Invalid time format: {value}. Expected HH:MM")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A policy field held an out-of-range or inconsistent value.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A stored result was requested under an unknown or expired job id.
    #[error("Job not found: {job_id}")]
    JobNotFound {
        /// The job id that was requested.
        job_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
