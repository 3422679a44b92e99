//! Core data models for the Attendance Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod punch;
mod shift;
mod summary;

pub use day_record::DayRecord;
pub use punch::PunchEntry;
pub use shift::{ScheduledShift, ShiftType};
pub use summary::{AttendanceReport, Summary};
