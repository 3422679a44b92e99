//! Pure per-shift reconciliation.

use chrono::Duration;
use tracing::debug;

use crate::config::ShiftPolicy;
use crate::models::{DayRecord, PunchEntry, ScheduledShift};

use super::normalize::{clamp, lunch_minutes, minutes_between, normalized_clock_out, normalized_lunch_in};

/// Reconciles one scheduled shift against its matched punch entry, if any.
///
/// This is a pure function: it reads the shift, the punch entry selected by
/// the caller, and the policy thresholds, and produces the [`DayRecord`] for
/// the shift. It never fails — absent or partial punch data degrades to
/// `present = false` or a zero worked duration, per the reporting rules:
///
/// - presence requires a clock-in; worked time additionally requires a
///   clock-out,
/// - cross-midnight shifts have the clock-out (and lunch clock-in) advanced
///   a day when recorded against the shift's start date,
/// - lunch time is subtracted, floored at zero,
/// - tardy/early-dismissal use strict comparisons against the grace
///   thresholds,
/// - worked minutes are clipped into `[0, sched_minutes]` for the fraction,
///   with the uncapped value retained alongside.
pub fn reconcile_day(
    shift: &ScheduledShift,
    punch: Option<&PunchEntry>,
    policy: &ShiftPolicy,
) -> DayRecord {
    let sched_minutes = shift.scheduled_minutes();

    let mut actual_in = None;
    let mut actual_out = None;
    let mut actual_out1 = None;
    let mut actual_in2 = None;
    let mut worked_minutes = 0.0;
    let mut present = false;

    if let Some(entry) = punch {
        actual_in = entry.in1;
        actual_out = entry.out2;
        actual_out1 = entry.out1;
        actual_in2 = entry.in2;

        present = actual_in.is_some();

        if let (Some(clock_in), Some(clock_out)) = (actual_in, actual_out) {
            let cross_midnight = shift.crosses_midnight();

            let normalized_out = normalized_clock_out(cross_midnight, clock_in, clock_out);
            if normalized_out != clock_out {
                debug!(date = %shift.date, clock_out = %normalized_out, "Adjusted cross-midnight clock-out");
            }
            let clock_out = normalized_out;
            actual_out = Some(clock_out);

            if let (Some(lunch_out), Some(lunch_in)) = (actual_out1, actual_in2) {
                actual_in2 = Some(normalized_lunch_in(cross_midnight, lunch_out, lunch_in));
            }

            let lunch = lunch_minutes(actual_out1, actual_in2);
            let total = minutes_between(clock_in, clock_out);
            worked_minutes = (total - lunch).max(0.0);

            debug!(
                date = %shift.date,
                total_minutes = total,
                lunch_minutes = lunch,
                worked_minutes = worked_minutes,
                "Computed worked time"
            );
        }
    }

    let mut tardy = false;
    let mut early_dismissal = false;

    if present {
        if let Some(clock_in) = actual_in {
            if clock_in > shift.sched_start + Duration::minutes(policy.tardy_minutes) {
                tardy = true;
            }
        }
        if let Some(clock_out) = actual_out {
            if clock_out < shift.sched_end - Duration::minutes(policy.early_minutes) {
                early_dismissal = true;
            }
        }
    }

    let worked_minutes_clipped = clamp(worked_minutes, 0.0, sched_minutes);
    let attendance_fraction = if sched_minutes > 0.0 {
        worked_minutes_clipped / sched_minutes
    } else {
        0.0
    };

    DayRecord {
        date: shift.date,
        shift_type: shift.shift_type,
        sched_start_dt: shift.sched_start,
        sched_end_dt: shift.sched_end,
        actual_in,
        actual_out,
        actual_out1,
        actual_in2,
        sched_minutes,
        worked_minutes,
        worked_minutes_clipped,
        attendance_fraction,
        present,
        tardy,
        early_dismissal,
    }
}
