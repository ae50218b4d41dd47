//! # Domain Module
//!
//! Business rules of the attendance tracker, independent of HTTP and of the
//! record store behind the storage traits.
//!
//! ## Module Organization
//!
//! - **identity**: Worker ID syntax and master-data existence checks
//! - **attendance_service**: Sign-in/sign-out reconciliation against the ledger
//! - **report_service**: Read-only dashboards and filtered reports
//! - **employee_service**: Employee Master Data maintenance
//! - **write_queue**: Single-writer slot shared by every mutating service
//! - **clock**: Injectable source of "now"
//!
//! ## Record Lifecycle
//!
//! For each `(employee_id, date)` pair a ledger record goes
//! `NoRecord -> SignedIn -> SignedOut` and never back. A sign-in appends the
//! row; a sign-out fills its Out-Time and Attendance Status Out cells.

pub mod attendance_service;
pub mod clock;
pub mod commands;
pub mod employee_service;
pub mod errors;
pub mod identity;
pub mod models;
pub mod report_service;
pub mod write_queue;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use attendance_service::{AttendanceService, OpenRecordPolicy};
pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub(crate) use test_doubles::FixedClock;
pub use employee_service::EmployeeService;
pub use errors::{AttendanceError, AttendanceResult, ConflictError, ValidationError};
pub use identity::IdentityValidator;
pub use report_service::ReportService;
pub use write_queue::WriteQueue;
