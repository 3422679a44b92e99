//! CSV rendering of an attendance report.
//!
//! The export format is one row per day record followed by a blank row, a
//! `__SUMMARY__` marker row, and one `key,value` row per summary field. All
//! field values are plain numbers, dates, or booleans, so no CSV quoting is
//! required.

use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::models::AttendanceReport;

/// Column order of the day-record section.
const HEADERS: [&str; 15] = [
    "date",
    "shift_type",
    "sched_start_dt",
    "sched_end_dt",
    "actual_in",
    "actual_out",
    "actual_out1",
    "actual_in2",
    "sched_minutes",
    "worked_minutes",
    "worked_minutes_clipped",
    "attendance_fraction",
    "present",
    "tardy",
    "early_dismissal",
];

fn opt_dt(value: Option<NaiveDateTime>) -> String {
    value.map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string()).unwrap_or_default()
}

/// Renders a report as CSV text.
///
/// # Example
///
/// ```
/// use attendance_engine::config::ShiftPolicy;
/// use attendance_engine::export::report_to_csv;
/// use attendance_engine::reconcile::build_report;
///
/// let report = build_report(None, &[], &[], &ShiftPolicy::default());
/// let csv = report_to_csv(&report);
/// assert!(csv.starts_with("date,shift_type"));
/// assert!(csv.contains("__SUMMARY__"));
/// ```
pub fn report_to_csv(report: &AttendanceReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", HEADERS.join(","));

    for record in &report.day_level {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            record.date,
            record.shift_type,
            record.sched_start_dt.format("%Y-%m-%dT%H:%M:%S"),
            record.sched_end_dt.format("%Y-%m-%dT%H:%M:%S"),
            opt_dt(record.actual_in),
            opt_dt(record.actual_out),
            opt_dt(record.actual_out1),
            opt_dt(record.actual_in2),
            record.sched_minutes,
            record.worked_minutes,
            record.worked_minutes_clipped,
            record.attendance_fraction,
            record.present,
            record.tardy,
            record.early_dismissal,
        );
    }

    let summary = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "__SUMMARY__");
    let _ = writeln!(out, "scheduled_shifts,{}", summary.scheduled_shifts);
    let _ = writeln!(out, "shifts_worked,{}", summary.shifts_worked);
    let _ = writeln!(out, "attendance_pct_shifts,{}", summary.attendance_pct_shifts);
    let _ = writeln!(out, "scheduled_hours,{}", summary.scheduled_hours);
    let _ = writeln!(out, "worked_hours,{}", summary.worked_hours);
    let _ = writeln!(out, "attendance_pct_hours,{}", summary.attendance_pct_hours);
    let _ = writeln!(out, "tardy_count,{}", summary.tardy_count);
    let _ = writeln!(out, "early_dismissal_count,{}", summary.early_dismissal_count);

    out
}

/// Builds the download filename for a report.
///
/// Spaces in the employee name are underscored; an unknown employee falls
/// back to `unknown`. Only the first 8 characters of the job id are used.
pub fn csv_filename(report: &AttendanceReport, job_id: &str) -> String {
    let employee = report
        .employee_name
        .as_deref()
        .unwrap_or("unknown")
        .replace(' ', "_");
    let prefix: String = job_id.chars().take(8).collect();
    format!("attendance_{employee}_{prefix}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShiftPolicy;
    use crate::models::{PunchEntry, ScheduledShift, ShiftType};
    use crate::reconcile::build_report;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn sample_report() -> AttendanceReport {
        let schedule = vec![
            ScheduledShift {
                date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                shift_type: ShiftType::AM,
                sched_start: dt("2025-05-01 09:45:00"),
                sched_end: dt("2025-05-01 16:30:00"),
            },
            ScheduledShift {
                date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
                shift_type: ShiftType::PM,
                sched_start: dt("2025-05-02 16:00:00"),
                sched_end: dt("2025-05-03 00:15:00"),
            },
        ];
        let punches = vec![PunchEntry {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            in1: Some(dt("2025-05-01 09:44:00")),
            out1: None,
            in2: None,
            out2: Some(dt("2025-05-01 16:30:00")),
        }];
        build_report(
            Some("Jane Doe".to_string()),
            &schedule,
            &punches,
            &ShiftPolicy::default(),
        )
    }

    #[test]
    fn test_csv_layout() {
        let csv = report_to_csv(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], HEADERS.join(","));
        assert!(lines[1].starts_with("2025-05-01,AM,2025-05-01T09:45:00,2025-05-01T16:30:00,"));
        assert!(lines[2].starts_with("2025-05-02,PM,"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "__SUMMARY__");
        assert_eq!(lines[5], "scheduled_shifts,2");
        assert_eq!(lines[6], "shifts_worked,1");
        assert_eq!(lines[7], "attendance_pct_shifts,50");
        assert!(lines[8].starts_with("scheduled_hours,"));
        assert!(lines[11].starts_with("tardy_count,"));
        assert_eq!(lines[12], "early_dismissal_count,0");
    }

    #[test]
    fn test_absent_day_renders_empty_actuals() {
        let csv = report_to_csv(&sample_report());
        let pm_row: Vec<&str> = csv.lines().nth(2).unwrap().split(',').collect();
        // actual_in..actual_in2 are empty for the unmatched PM shift.
        assert_eq!(&pm_row[4..8], ["", "", "", ""]);
        assert_eq!(pm_row[12], "false");
    }

    #[test]
    fn test_row_has_one_field_per_header() {
        let csv = report_to_csv(&sample_report());
        for line in csv.lines().take(3) {
            assert_eq!(line.split(',').count(), HEADERS.len());
        }
    }

    #[test]
    fn test_filename_underscores_and_truncates() {
        let report = sample_report();
        let name = csv_filename(&report, "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(name, "attendance_Jane_Doe_123e4567.csv");
    }

    #[test]
    fn test_filename_unknown_employee() {
        let mut report = sample_report();
        report.employee_name = None;
        assert_eq!(csv_filename(&report, "abcd1234ef"), "attendance_unknown_abcd1234.csv");
    }
}
