//! Attendance Reconciliation Engine
//!
//! This crate reconciles a punch-clock log against a shift schedule for a
//! single employee and derives attendance metrics: presence, tardiness,
//! early dismissal, and worked-vs-scheduled ratios. Spreadsheet ingestion
//! happens upstream; the engine consumes already-normalized tables.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reconcile;
