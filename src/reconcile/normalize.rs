//! Time-arithmetic helpers for cross-midnight normalization and clamping.
//!
//! Punch clocks record a bare time against a calendar day, so the final
//! clock-out of a shift that runs past midnight often lands on the wrong
//! date in the raw table. These helpers repair that, compute lunch
//! durations, and clamp worked time for reporting.

use chrono::{Duration, NaiveDateTime};

/// Signed minutes from `start` to `end`, with sub-minute precision.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

/// Clamps `value` into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Repairs a clock-out recorded against the wrong calendar day.
///
/// For a cross-midnight shift, a clock-out whose time of day is numerically
/// earlier than the clock-in's was punched after midnight but recorded on
/// the shift's start date; it is advanced by one day. Same-day shifts are
/// returned unchanged.
pub fn normalized_clock_out(
    cross_midnight: bool,
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
) -> NaiveDateTime {
    if cross_midnight && clock_out.time() < clock_in.time() {
        clock_out + Duration::days(1)
    } else {
        clock_out
    }
}

/// Repairs a lunch clock-in recorded against the wrong calendar day.
///
/// The same adjustment as [`normalized_clock_out`], applied to the lunch
/// pair: on a cross-midnight shift a lunch-in whose time of day precedes the
/// lunch-out's is advanced by one day. The lunch-out is never adjusted.
pub fn normalized_lunch_in(
    cross_midnight: bool,
    lunch_out: NaiveDateTime,
    lunch_in: NaiveDateTime,
) -> NaiveDateTime {
    if cross_midnight && lunch_in.time() < lunch_out.time() {
        lunch_in + Duration::days(1)
    } else {
        lunch_in
    }
}

/// Minutes spent at lunch, floored to zero.
///
/// Defined only when both lunch punches exist; a missing pair contributes
/// nothing, and a lunch-in earlier than the lunch-out (bad data, not a
/// midnight cross) floors to zero rather than subtracting negative time.
pub fn lunch_minutes(lunch_out: Option<NaiveDateTime>, lunch_in: Option<NaiveDateTime>) -> f64 {
    match (lunch_out, lunch_in) {
        (Some(out), Some(inn)) => minutes_between(out, inn).max(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_minutes_between_handles_seconds() {
        assert_eq!(
            minutes_between(dt("2025-05-01 09:00:00"), dt("2025-05-01 09:30:30")),
            30.5
        );
    }

    #[test]
    fn test_minutes_between_is_signed() {
        assert_eq!(
            minutes_between(dt("2025-05-01 10:00:00"), dt("2025-05-01 09:00:00")),
            -60.0
        );
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-3.0, 0.0, 405.0), 0.0);
        assert_eq!(clamp(200.0, 0.0, 405.0), 200.0);
        assert_eq!(clamp(500.0, 0.0, 405.0), 405.0);
    }

    #[test]
    fn test_clock_out_advanced_on_cross_midnight_shift() {
        let adjusted =
            normalized_clock_out(true, dt("2025-05-01 15:58:00"), dt("2025-05-01 00:10:00"));
        assert_eq!(adjusted, dt("2025-05-02 00:10:00"));
    }

    #[test]
    fn test_clock_out_untouched_on_same_day_shift() {
        let out = dt("2025-05-01 16:28:00");
        assert_eq!(normalized_clock_out(false, dt("2025-05-01 09:50:00"), out), out);
    }

    #[test]
    fn test_clock_out_untouched_when_time_of_day_later_than_in() {
        // Already recorded on the correct day.
        let out = dt("2025-05-01 23:55:00");
        assert_eq!(normalized_clock_out(true, dt("2025-05-01 16:00:00"), out), out);
    }

    #[test]
    fn test_lunch_in_advanced_when_crossing_midnight() {
        let adjusted =
            normalized_lunch_in(true, dt("2025-05-01 23:45:00"), dt("2025-05-01 00:20:00"));
        assert_eq!(adjusted, dt("2025-05-02 00:20:00"));
    }

    #[test]
    fn test_lunch_minutes_missing_pair_is_zero() {
        assert_eq!(lunch_minutes(None, None), 0.0);
        assert_eq!(lunch_minutes(Some(dt("2025-05-01 12:00:00")), None), 0.0);
        assert_eq!(lunch_minutes(None, Some(dt("2025-05-01 12:30:00"))), 0.0);
    }

    #[test]
    fn test_lunch_minutes_normal_pair() {
        assert_eq!(
            lunch_minutes(
                Some(dt("2025-05-01 12:00:00")),
                Some(dt("2025-05-01 12:30:00"))
            ),
            30.0
        );
    }

    #[test]
    fn test_negative_lunch_floors_to_zero() {
        assert_eq!(
            lunch_minutes(
                Some(dt("2025-05-01 12:30:00")),
                Some(dt("2025-05-01 12:00:00"))
            ),
            0.0
        );
    }
}
