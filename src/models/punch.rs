//! Punch-clock entry model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the punch table: the clock events recorded for a date.
///
/// `in1`/`out2` are the day's clock-in and final clock-out; `out1`/`in2` are
/// the optional lunch-out/lunch-in pair. Any of the four may be absent — a
/// missing value is a data-quality condition, not an error. A well-formed
/// table has at most one entry per date, but duplicates can occur and are
/// tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchEntry {
    /// The calendar date the punches were recorded against.
    pub date: NaiveDate,
    /// Clock-in.
    #[serde(default)]
    pub in1: Option<NaiveDateTime>,
    /// Lunch clock-out.
    #[serde(default)]
    pub out1: Option<NaiveDateTime>,
    /// Lunch clock-in.
    #[serde(default)]
    pub in2: Option<NaiveDateTime>,
    /// Final clock-out.
    #[serde(default)]
    pub out2: Option<NaiveDateTime>,
}
