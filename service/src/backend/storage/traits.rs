//! # Storage Traits
//!
//! Typed views over the two tables of the record store. The domain layer only
//! talks to these traits, so tests can swap in doubles and the CSV worksheet
//! can be replaced by a real spreadsheet client without touching the services.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::backend::domain::models::attendance::{AttendanceRecord, RecordKey, StatusOut};
use crate::backend::domain::models::employee::Employee;
use chrono::NaiveTime;

/// Employee Master Data operations
#[async_trait]
pub trait EmployeeStorage: Send + Sync {
    /// Every employee in stored order
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    /// First employee with the given ID
    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>>;

    /// Append a new employee row
    async fn store_employee(&self, employee: &Employee) -> StoreResult<()>;

    /// Overwrite the first row with the employee's ID.
    /// Returns false when no such row exists.
    async fn update_employee(&self, employee: &Employee) -> StoreResult<bool>;

    /// Remove the first row with the given ID.
    /// Returns false when no such row exists.
    async fn delete_employee(&self, employee_id: &str) -> StoreResult<bool>;
}

/// Attendance Data ledger operations
#[async_trait]
pub trait AttendanceStorage: Send + Sync {
    /// Append a record as a single row
    async fn append_record(&self, record: &AttendanceRecord) -> StoreResult<()>;

    /// Every record in append order (oldest first)
    async fn list_records(&self) -> StoreResult<Vec<AttendanceRecord>>;

    /// Set Out-Time and Attendance Status Out on the most recently appended
    /// open record with this key. The row is located at write time.
    async fn close_record(
        &self,
        key: &RecordKey,
        out_time: NaiveTime,
        status_out: StatusOut,
    ) -> StoreResult<AttendanceRecord>;
}
