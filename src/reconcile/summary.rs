//! Summary aggregation over the day-record sequence.

use crate::models::{DayRecord, Summary};

/// Rounds to 2 decimal places for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reduces a day-record sequence into headline metrics.
///
/// Total over any input, including the empty slice (all-zero summary), and
/// order-independent: every field is a count, a sum, or a ratio of sums.
/// Accumulation uses unrounded values; rounding to 2 decimal places happens
/// once on the way out, so rounding error never compounds across the sum.
///
/// # Example
///
/// ```
/// use attendance_engine::reconcile::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.scheduled_shifts, 0);
/// assert_eq!(summary.attendance_pct_hours, 0.0);
/// ```
pub fn summarize(records: &[DayRecord]) -> Summary {
    if records.is_empty() {
        return Summary::empty();
    }

    let scheduled_shifts = records.len();
    let shifts_worked = records.iter().filter(|r| r.present).count();
    let tardy_count = records.iter().filter(|r| r.tardy).count();
    let early_dismissal_count = records.iter().filter(|r| r.early_dismissal).count();

    let scheduled_hours: f64 = records.iter().map(|r| r.sched_minutes).sum::<f64>() / 60.0;
    let worked_hours: f64 = records.iter().map(|r| r.worked_minutes_clipped).sum::<f64>() / 60.0;

    let attendance_pct_shifts = if scheduled_shifts > 0 {
        shifts_worked as f64 / scheduled_shifts as f64 * 100.0
    } else {
        0.0
    };
    let attendance_pct_hours = if scheduled_hours > 0.0 {
        worked_hours / scheduled_hours * 100.0
    } else {
        0.0
    };

    Summary {
        scheduled_shifts,
        shifts_worked,
        attendance_pct_shifts: round2(attendance_pct_shifts),
        scheduled_hours: round2(scheduled_hours),
        worked_hours: round2(worked_hours),
        attendance_pct_hours: round2(attendance_pct_hours),
        tardy_count,
        early_dismissal_count,
    }
}
