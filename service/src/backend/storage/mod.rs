//! # Storage Module
//!
//! The record store behind the attendance tracker: a data directory holding
//! one CSV worksheet per table ("Employee Master Data", "Attendance Data").
//!
//! ## Layers
//!
//! - **Worksheet**: spreadsheet-shaped access (append a row, scan all rows,
//!   find the first match, patch cells by row coordinate)
//! - **Repositories**: typed `Employee` / `AttendanceRecord` mapping with
//!   row validation at the boundary
//! - **Traits**: what the domain layer depends on
//!
//! Malformed rows are reported, never skipped. Rows with a blank Employee ID
//! are treated as spreadsheet padding and skipped with a warning.

pub mod csv;
pub mod error;
pub mod traits;

pub use self::csv::{AttendanceRepository, CsvConnection, EmployeeRepository};
pub use error::{StoreError, StoreResult};
pub use traits::{AttendanceStorage, EmployeeStorage};
