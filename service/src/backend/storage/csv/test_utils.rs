//! Test utilities for automatic cleanup and consistent test infrastructure
//!
//! `TestEnvironment` keeps a `TempDir` alive for the duration of a test, so
//! the CSV files are removed even if the test panics.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::attendance_repository::AttendanceRepository;
use super::connection::CsvConnection;
use super::employee_repository::EmployeeRepository;
use crate::backend::domain::models::attendance::{AttendanceRecord, StatusIn};
use crate::backend::domain::models::employee::Employee;
use crate::backend::storage::{AttendanceStorage, EmployeeStorage};

/// RAII test environment, the directory is deleted on drop
pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

/// Both repositories over one temporary data directory
pub struct RepositoryTestHelper {
    pub env: TestEnvironment,
    pub employee_repo: EmployeeRepository,
    pub attendance_repo: AttendanceRepository,
}

impl RepositoryTestHelper {
    pub async fn new() -> Result<Self> {
        let env = TestEnvironment::new().await?;
        let employee_repo = EmployeeRepository::new(env.connection.clone());
        let attendance_repo = AttendanceRepository::new(env.connection.clone());

        Ok(RepositoryTestHelper {
            env,
            employee_repo,
            attendance_repo,
        })
    }

    /// Store an employee with only ID, name and department set
    pub async fn create_test_employee(&self, employee_id: &str, name: &str, department: &str) -> Result<Employee> {
        let employee = Employee::new(employee_id, name, department);
        self.employee_repo.store_employee(&employee).await?;
        Ok(employee)
    }

    /// Append an open record signed in at `date` 09:00
    pub async fn create_open_record(&self, employee: &Employee, date: &str, status_in: StatusIn) -> Result<AttendanceRecord> {
        let record = AttendanceRecord::sign_in(
            &employee.employee_id,
            &employee.name,
            &employee.department,
            at(date, 9, 0),
            status_in,
        );
        self.attendance_repo.append_record(&record).await?;
        Ok(record)
    }
}

/// `date` (YYYY-MM-DD) at the given wall-clock time
pub fn at(date: &str, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("test date must be YYYY-MM-DD")
        .and_hms_opt(hour, minute, 0)
        .expect("test time must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new().await?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());

            std::fs::write(base_path.join("test_file.txt"), "test data")?;
        }

        assert!(!base_path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_repository_helper() -> Result<()> {
        let helper = RepositoryTestHelper::new().await?;

        let employee = helper.create_test_employee("sbx001", "Test Employee", "Sales").await?;
        let record = helper.create_open_record(&employee, "2024-01-01", StatusIn::Early).await?;

        assert_eq!(helper.employee_repo.list_employees().await?, vec![employee]);
        assert_eq!(helper.attendance_repo.list_records().await?, vec![record]);
        Ok(())
    }
}
