//! CSV-backed record store.
//!
//! ```text
//! data/
//! ├── Employee Master Data.csv
//! ├── Attendance Data.csv
//! └── attendance_config.yaml   (optional, read at start-up)
//! ```

pub mod attendance_repository;
pub mod connection;
pub mod employee_repository;
pub mod worksheet;

#[cfg(test)]
pub mod test_utils;

pub use attendance_repository::AttendanceRepository;
pub use connection::CsvConnection;
pub use employee_repository::EmployeeRepository;
pub use worksheet::{RowCoordinate, TableSpec, Worksheet, ATTENDANCE_DATA, EMPLOYEE_MASTER};
