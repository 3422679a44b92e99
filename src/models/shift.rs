//! Scheduled shift model and related types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The type of a scheduled shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Morning shift.
    AM,
    /// Evening shift; typically configured to cross midnight.
    PM,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::AM => write!(f, "AM"),
            ShiftType::PM => write!(f, "PM"),
        }
    }
}

/// One entry of the schedule table: a work period the employee was rostered
/// for on a given date, with its bounds already baked in by the upstream
/// schedule parser.
///
/// Invariant: `sched_end > sched_start`; the end may fall on the next
/// calendar day for cross-midnight shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// The calendar date the shift belongs to.
    pub date: NaiveDate,
    /// Whether this is an AM or PM shift.
    pub shift_type: ShiftType,
    /// The scheduled start timestamp.
    pub sched_start: NaiveDateTime,
    /// The scheduled end timestamp.
    pub sched_end: NaiveDateTime,
}

impl ScheduledShift {
    /// Returns the scheduled duration in minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{ScheduledShift, ShiftType};
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let shift = ScheduledShift {
    ///     date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
    ///     shift_type: ShiftType::AM,
    ///     sched_start: "2025-05-01T09:45:00".parse::<NaiveDateTime>().unwrap(),
    ///     sched_end: "2025-05-01T16:30:00".parse::<NaiveDateTime>().unwrap(),
    /// };
    /// assert_eq!(shift.scheduled_minutes(), 405.0);
    /// ```
    pub fn scheduled_minutes(&self) -> f64 {
        (self.sched_end - self.sched_start).num_seconds() as f64 / 60.0
    }

    /// Whether the scheduled end falls on a later calendar day than the
    /// scheduled start.
    pub fn crosses_midnight(&self) -> bool {
        self.sched_end.date() > self.sched_start.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_scheduled_minutes_am_window() {
        let shift = ScheduledShift {
            date: make_date("2025-05-01"),
            shift_type: ShiftType::AM,
            sched_start: make_datetime("2025-05-01", "09:45:00"),
            sched_end: make_datetime("2025-05-01", "16:30:00"),
        };
        assert_eq!(shift.scheduled_minutes(), 405.0);
        assert!(!shift.crosses_midnight());
    }

    #[test]
    fn test_cross_midnight_pm_window() {
        let shift = ScheduledShift {
            date: make_date("2025-05-01"),
            shift_type: ShiftType::PM,
            sched_start: make_datetime("2025-05-01", "16:00:00"),
            sched_end: make_datetime("2025-05-02", "00:15:00"),
        };
        assert_eq!(shift.scheduled_minutes(), 495.0);
        assert!(shift.crosses_midnight());
    }

    #[test]
    fn test_shift_type_display() {
        assert_eq!(ShiftType::AM.to_string(), "AM");
        assert_eq!(ShiftType::PM.to_string(), "PM");
    }

    #[test]
    fn test_shift_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ShiftType::AM).unwrap(), "\"AM\"");
        assert_eq!(serde_json::to_string(&ShiftType::PM).unwrap(), "\"PM\"");
    }

    #[test]
    fn test_shift_serde_round_trip() {
        let shift = ScheduledShift {
            date: make_date("2025-05-01"),
            shift_type: ShiftType::PM,
            sched_start: make_datetime("2025-05-01", "16:00:00"),
            sched_end: make_datetime("2025-05-02", "00:15:00"),
        };
        let json = serde_json::to_string(&shift).unwrap();
        let back: ScheduledShift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, back);
    }
}
