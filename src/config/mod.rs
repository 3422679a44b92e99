//! Shift policy configuration for the Attendance Reconciliation Engine.
//!
//! This module defines the policy object the engine consumes (shift windows,
//! tardy/early grace thresholds, timezone identifier) and the two ways a
//! policy is produced: loading a YAML file from disk, or merging a JSON
//! override string supplied with a request over the built-in defaults.
//!
//! # Example
//!
//! ```
//! use attendance_engine::config::ShiftPolicy;
//!
//! let policy = ShiftPolicy::default();
//! assert_eq!(policy.tardy_minutes, 5);
//! assert!(policy.pm.cross_midnight);
//! ```

mod loader;
mod types;

pub use types::{ShiftPolicy, ShiftWindow};
