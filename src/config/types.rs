//! Policy configuration types.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The bounds of one shift window (AM or PM) as configured.
///
/// Times are kept as `HH:MM` strings in configuration form and parsed on
/// demand; `cross_midnight` marks windows whose end falls on the following
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Shift start time of day, `HH:MM`.
    pub start: String,
    /// Shift end time of day, `HH:MM`.
    pub end: String,
    /// Whether the window's end falls on the next calendar day.
    #[serde(default)]
    pub cross_midnight: bool,
}

impl ShiftWindow {
    /// Parses the window's start and end into times of day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] when either bound is not a valid
    /// `HH:MM` string.
    pub fn bounds(&self) -> EngineResult<(NaiveTime, NaiveTime)> {
        Ok((parse_shift_time(&self.start)?, parse_shift_time(&self.end)?))
    }

    /// Anchors the window onto a calendar date, producing the concrete
    /// scheduled start and end timestamps.
    ///
    /// For a cross-midnight window the end lands on the following day.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::ShiftWindow;
    /// use chrono::NaiveDate;
    ///
    /// let pm = ShiftWindow {
    ///     start: "16:00".to_string(),
    ///     end: "00:15".to_string(),
    ///     cross_midnight: true,
    /// };
    /// let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    /// let (start, end) = pm.anchored(date).unwrap();
    /// assert_eq!(start.to_string(), "2025-05-01 16:00:00");
    /// assert_eq!(end.to_string(), "2025-05-02 00:15:00");
    /// ```
    pub fn anchored(&self, date: NaiveDate) -> EngineResult<(NaiveDateTime, NaiveDateTime)> {
        let (start, end) = self.bounds()?;
        let start_dt = date.and_time(start);
        let end_date = if self.cross_midnight {
            date.checked_add_days(Days::new(1))
                .ok_or_else(|| EngineError::InvalidPolicy {
                    field: "end".to_string(),
                    message: format!("window end overflows calendar after {date}"),
                })?
        } else {
            date
        };
        Ok((start_dt, end_date.and_time(end)))
    }
}

/// Parses a shift time string (`HH:MM`) into a time of day.
fn parse_shift_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}

/// The policy object consumed by the reconciliation engine.
///
/// The `am`/`pm` windows are read by the upstream schedule collaborator when
/// baking bounds into each scheduled shift; the engine itself reads only the
/// two grace thresholds. `timezone` is carried for the upstream parsers —
/// the engine treats all timestamps as already timezone-consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftPolicy {
    /// The AM shift window.
    pub am: ShiftWindow,
    /// The PM shift window.
    pub pm: ShiftWindow,
    /// Minutes late after scheduled start before a clock-in counts as tardy.
    pub tardy_minutes: i64,
    /// Minutes before scheduled end at which a clock-out counts as an early
    /// dismissal.
    pub early_minutes: i64,
    /// IANA timezone identifier used by the upstream parsers.
    pub timezone: String,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            am: ShiftWindow {
                start: "09:45".to_string(),
                end: "16:30".to_string(),
                cross_midnight: false,
            },
            pm: ShiftWindow {
                start: "16:00".to_string(),
                end: "00:15".to_string(),
                cross_midnight: true,
            },
            tardy_minutes: 5,
            early_minutes: 15,
            timezone: "America/New_York".to_string(),
        }
    }
}
