//! Request types for the Attendance Reconciliation Engine API.
//!
//! This module defines the JSON request structures for the
//! `/attendance/compute` endpoint. Spreadsheet ingestion happens upstream;
//! the endpoint receives the two already-normalized tables.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::ShiftPolicy;
use crate::models::{PunchEntry, ScheduledShift, ShiftType};

/// Request body for the `/attendance/compute` endpoint.
///
/// Contains the schedule and punch tables for one employee, plus optional
/// policy overrides. Policy fields left out of the override object keep
/// their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Employee name detected by the upstream punch parser, when known.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// The schedule table, in date order as produced upstream.
    pub schedule: Vec<ScheduledShiftRequest>,
    /// The punch table.
    pub punches: Vec<PunchEntryRequest>,
    /// Optional policy overrides, merged over the defaults.
    #[serde(default)]
    pub policy: Option<ShiftPolicy>,
}

/// One scheduled shift in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledShiftRequest {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// AM or PM.
    pub shift_type: ShiftType,
    /// The scheduled start timestamp.
    pub sched_start: NaiveDateTime,
    /// The scheduled end timestamp.
    pub sched_end: NaiveDateTime,
}

/// One punch-clock row in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchEntryRequest {
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

impl From<ScheduledShiftRequest> for ScheduledShift {
    fn from(req: ScheduledShiftRequest) -> Self {
        ScheduledShift {
            date: req.date,
            shift_type: req.shift_type,
            sched_start: req.sched_start,
            sched_end: req.sched_end,
        }
    }
}

impl From<PunchEntryRequest> for PunchEntry {
    fn from(req: PunchEntryRequest) -> Self {
        PunchEntry {
            date: req.date,
            in1: req.in1,
            out1: req.out1,
            in2: req.in2,
            out2: req.out2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_compute_request() {
        let json = r#"{
            "employee_name": "Jane Doe",
            "schedule": [
                {
                    "date": "2025-05-01",
                    "shift_type": "AM",
                    "sched_start": "2025-05-01T09:45:00",
                    "sched_end": "2025-05-01T16:30:00"
                }
            ],
            "punches": [
                {
                    "date": "2025-05-01",
                    "in1": "2025-05-01T09:50:00",
                    "out2": "2025-05-01T16:28:00"
                }
            ]
        }"#;

        let request: ComputeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_name.as_deref(), Some("Jane Doe"));
        assert_eq!(request.schedule.len(), 1);
        assert_eq!(request.schedule[0].shift_type, ShiftType::AM);
        assert_eq!(request.punches.len(), 1);
        assert!(request.punches[0].out1.is_none());
        assert!(request.policy.is_none());
    }

    #[test]
    fn test_partial_policy_override_fills_defaults() {
        let json = r#"{
            "schedule": [],
            "punches": [],
            "policy": {"tardy_minutes": 10}
        }"#;

        let request: ComputeRequest = serde_json::from_str(json).unwrap();
        let policy = request.policy.unwrap();
        assert_eq!(policy.tardy_minutes, 10);
        assert_eq!(policy.early_minutes, 15);
    }

    #[test]
    fn test_shift_conversion() {
        let req = ScheduledShiftRequest {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            shift_type: ShiftType::PM,
            sched_start: "2025-05-01T16:00:00".parse().unwrap(),
            sched_end: "2025-05-02T00:15:00".parse().unwrap(),
        };
        let shift: ScheduledShift = req.into();
        assert_eq!(shift.shift_type, ShiftType::PM);
        assert!(shift.crosses_midnight());
    }

    #[test]
    fn test_punch_conversion_preserves_optionals() {
        let req = PunchEntryRequest {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            in1: Some("2025-05-01T09:50:00".parse().unwrap()),
            out1: None,
            in2: None,
            out2: None,
        };
        let entry: PunchEntry = req.into();
        assert!(entry.in1.is_some());
        assert!(entry.out2.is_none());
    }
}
