//! Day-level reconciliation output model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::shift::ShiftType;

/// The reconciled outcome for one scheduled shift.
///
/// One record is produced per scheduled shift, in schedule order, and is
/// immutable once produced. The actual-time fields hold the punch
/// timestamps after cross-midnight normalization, so a clock-out recorded
/// against the wrong calendar day appears here already advanced.
///
/// Invariant: `0 ≤ worked_minutes_clipped ≤ sched_minutes`, and
/// `attendance_fraction` is `worked_minutes_clipped / sched_minutes` when
/// `sched_minutes > 0`, else `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The shift's calendar date.
    pub date: NaiveDate,
    /// AM or PM.
    pub shift_type: ShiftType,
    /// Scheduled start timestamp.
    pub sched_start_dt: NaiveDateTime,
    /// Scheduled end timestamp.
    pub sched_end_dt: NaiveDateTime,
    /// Clock-in, when recorded.
    pub actual_in: Option<NaiveDateTime>,
    /// Final clock-out, normalized for cross-midnight shifts.
    pub actual_out: Option<NaiveDateTime>,
    /// Lunch clock-out, when recorded.
    pub actual_out1: Option<NaiveDateTime>,
    /// Lunch clock-in, normalized for cross-midnight shifts.
    pub actual_in2: Option<NaiveDateTime>,
    /// Scheduled duration in minutes.
    pub sched_minutes: f64,
    /// Worked minutes net of lunch, uncapped.
    pub worked_minutes: f64,
    /// Worked minutes clamped into `[0, sched_minutes]`.
    pub worked_minutes_clipped: f64,
    /// `worked_minutes_clipped / sched_minutes`, or 0 for a zero-length window.
    pub attendance_fraction: f64,
    /// Whether a clock-in exists for the shift's date.
    pub present: bool,
    /// Clocked in strictly later than scheduled start plus the grace threshold.
    pub tardy: bool,
    /// Clocked out strictly earlier than scheduled end minus the grace threshold.
    pub early_dismissal: bool,
}
