//! The reconciliation engine.
//!
//! This module matches scheduled shifts to punch entries, normalizes
//! cross-midnight time arithmetic, derives per-day attendance facts, and
//! aggregates them into summary statistics. The computation is pure,
//! synchronous, and deterministic: given the same schedule, punches, and
//! policy it produces identical output, and it never fails for well-formed
//! tables — missing or duplicate punch data degrades to documented defaults
//! with advisory warnings.

mod day;
mod normalize;
mod summary;

pub use day::reconcile_day;
pub use normalize::{clamp, lunch_minutes, minutes_between, normalized_clock_out, normalized_lunch_in};
pub use summary::summarize;

use tracing::info;

use crate::config::ShiftPolicy;
use crate::models::{AttendanceReport, DayRecord, PunchEntry, ScheduledShift};

/// Reconciles the schedule table against the punch table.
///
/// Walks the schedule in input order. For each shift, the punch entries for
/// the shift's date are selected and the first in input order wins; extra
/// entries for the same date raise an advisory warning, never an error. The
/// per-shift work is delegated to [`reconcile_day`].
///
/// Returns the day records in schedule order together with the warnings
/// collected along the way.
pub fn reconcile(
    schedule: &[ScheduledShift],
    punches: &[PunchEntry],
    policy: &ShiftPolicy,
) -> (Vec<DayRecord>, Vec<String>) {
    let mut warnings = Vec::new();

    let records: Vec<DayRecord> = schedule
        .iter()
        .map(|shift| {
            let mut matches = punches.iter().filter(|p| p.date == shift.date);
            let first = matches.next();
            if first.is_some() && matches.next().is_some() {
                warnings.push(format!(
                    "Multiple punch records found for {}, using first one",
                    shift.date
                ));
            }
            reconcile_day(shift, first, policy)
        })
        .collect();

    info!(shifts = records.len(), warnings = warnings.len(), "Computed attendance");

    (records, warnings)
}

/// Runs the full pipeline and assembles the result document.
///
/// Convenience over [`reconcile`] + [`summarize`] for callers that want the
/// complete [`AttendanceReport`] in one step.
pub fn build_report(
    employee_name: Option<String>,
    schedule: &[ScheduledShift],
    punches: &[PunchEntry],
    policy: &ShiftPolicy,
) -> AttendanceReport {
    let (day_level, warnings) = reconcile(schedule, punches, policy);
    let summary = summarize(&day_level);

    AttendanceReport {
        employee_name,
        policy_used: policy.clone(),
        summary,
        day_level,
        warnings,
    }
}
