//! Summary statistics and the full report document.

use serde::{Deserialize, Serialize};

use crate::config::ShiftPolicy;

use super::day_record::DayRecord;

/// Headline metrics reduced from the full day-record sequence.
///
/// Owns no independent state; it is recomputable at any time from the
/// records via [`crate::reconcile::summarize`]. Percentage and hour fields
/// are rounded to 2 decimal places; the counts are exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of scheduled shifts.
    pub scheduled_shifts: usize,
    /// Number of shifts with a recorded clock-in.
    pub shifts_worked: usize,
    /// Percentage of shifts worked.
    pub attendance_pct_shifts: f64,
    /// Total scheduled hours.
    pub scheduled_hours: f64,
    /// Total clipped worked hours.
    pub worked_hours: f64,
    /// Percentage of scheduled hours worked.
    pub attendance_pct_hours: f64,
    /// Number of tardy shifts.
    pub tardy_count: usize,
    /// Number of early-dismissal shifts.
    pub early_dismissal_count: usize,
}

impl Summary {
    /// The all-zero summary, the reduction of an empty record sequence.
    pub fn empty() -> Self {
        Self {
            scheduled_shifts: 0,
            shifts_worked: 0,
            attendance_pct_shifts: 0.0,
            scheduled_hours: 0.0,
            worked_hours: 0.0,
            attendance_pct_hours: 0.0,
            tardy_count: 0,
            early_dismissal_count: 0,
        }
    }
}

/// The complete result document for one reconciliation run.
///
/// Carries the day-level records in schedule order, the summary derived from
/// them, the policy that was applied, and any advisory data-quality warnings
/// raised while matching punches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Employee name as detected by the upstream punch parser, when known.
    pub employee_name: Option<String>,
    /// The policy the run was computed under.
    pub policy_used: ShiftPolicy,
    /// Aggregate metrics.
    pub summary: Summary,
    /// One record per scheduled shift, in schedule order.
    pub day_level: Vec<DayRecord>,
    /// Advisory data-quality warnings (unmatched dates, duplicate punches).
    #[serde(default)]
    pub warnings: Vec<String>,
}
