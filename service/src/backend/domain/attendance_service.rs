//! # Attendance Service
//!
//! Reconciles sign-in and sign-out events against the Attendance Data ledger.
//!
//! Per `(employee_id, date)` a record moves `NoRecord -> SignedIn -> SignedOut`:
//!
//! - **Sign-in** appends one full row. Refused when the ID is malformed,
//!   unknown, or already has a record dated today.
//! - **Sign-out** patches Out-Time and Attendance Status Out of one open
//!   record. Refused when the employee already signed out today or no open
//!   record can be found.
//!
//! Which open record a sign-out closes is decided by [`OpenRecordPolicy`].
//! The ledger can hold open records from earlier days that were never
//! closed, so the choice matters.
//!
//! Every check re-reads the ledger; nothing is cached between calls. All
//! mutations run inside the shared [`WriteQueue`].

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use chrono::NaiveDate;

use super::clock::Clock;
use super::commands::attendance::{SignInCommand, SignOutCommand, SignOutResult};
use super::errors::{AttendanceError, AttendanceResult, ConflictError};
use super::identity::IdentityValidator;
use super::models::attendance::AttendanceRecord;
use super::write_queue::WriteQueue;
use crate::backend::storage::{AttendanceStorage, EmployeeStorage, StoreError};

/// Rule for picking the record a sign-out closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenRecordPolicy {
    /// Most recently appended open record for the employee, whatever its date
    #[default]
    MostRecentOpen,
    /// Most recently appended open record for the employee dated today
    TodayOnly,
}

impl OpenRecordPolicy {
    /// Scan `records` (append order) from the end
    pub fn select<'a>(
        &self,
        records: &'a [AttendanceRecord],
        employee_id: &str,
        today: NaiveDate,
    ) -> Option<&'a AttendanceRecord> {
        records.iter().rev().find(|record| {
            record.employee_id == employee_id
                && record.is_open()
                && match self {
                    OpenRecordPolicy::MostRecentOpen => true,
                    OpenRecordPolicy::TodayOnly => record.date == today,
                }
        })
    }
}

#[derive(Clone)]
pub struct AttendanceService {
    identity: IdentityValidator,
    employees: Arc<dyn EmployeeStorage>,
    ledger: Arc<dyn AttendanceStorage>,
    clock: Arc<dyn Clock>,
    policy: OpenRecordPolicy,
    write_queue: WriteQueue,
}

impl AttendanceService {
    pub fn new(
        employees: Arc<dyn EmployeeStorage>,
        ledger: Arc<dyn AttendanceStorage>,
        clock: Arc<dyn Clock>,
        policy: OpenRecordPolicy,
        write_queue: WriteQueue,
    ) -> Self {
        Self {
            identity: IdentityValidator::new(employees.clone()),
            employees,
            ledger,
            clock,
            policy,
            write_queue,
        }
    }

    /// Register a sign-in for today
    pub async fn submit_sign_in(&self, command: SignInCommand) -> AttendanceResult<AttendanceRecord> {
        let employee_id = command.employee_id.trim();
        info!("Sign-in requested: employee={}, status={}", employee_id, command.status_in);

        IdentityValidator::check_format(employee_id)?;
        let _slot = self.write_queue.acquire().await;

        self.identity.require_registered(employee_id).await?;

        let now = self.clock.now();
        let today = now.date();
        let records = self.ledger.list_records().await?;

        if records
            .iter()
            .any(|r| r.employee_id == employee_id && r.date == today)
        {
            warn!("Duplicate sign-in refused: employee={}, date={}", employee_id, today);
            return Err(ConflictError::AlreadySignedIn {
                employee_id: employee_id.to_string(),
            }
            .into());
        }

        let employee = self
            .employees
            .find_employee(employee_id)
            .await?
            .ok_or_else(|| AttendanceError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;

        let record = AttendanceRecord::sign_in(
            &employee.employee_id,
            &employee.name,
            &employee.department,
            now,
            command.status_in,
        );
        self.ledger.append_record(&record).await?;

        info!("Sign-in recorded: {}", record.key());
        Ok(record)
    }

    /// Close the open record selected by the configured policy
    pub async fn submit_sign_out(&self, command: SignOutCommand) -> AttendanceResult<SignOutResult> {
        let employee_id = command.employee_id.trim();
        info!("Sign-out requested: employee={}, status={}", employee_id, command.status_out);

        IdentityValidator::check_format(employee_id)?;
        let _slot = self.write_queue.acquire().await;

        self.identity.require_registered(employee_id).await?;

        let now = self.clock.now();
        let today = now.date();
        let records = self.ledger.list_records().await?;

        if records
            .iter()
            .any(|r| r.employee_id == employee_id && r.date == today && !r.is_open())
        {
            warn!("Duplicate sign-out refused: employee={}, date={}", employee_id, today);
            return Err(ConflictError::AlreadySignedOut {
                employee_id: employee_id.to_string(),
            }
            .into());
        }

        let no_open_record = || ConflictError::NoOpenRecord {
            employee_id: employee_id.to_string(),
        };

        let key = self
            .policy
            .select(&records, employee_id, today)
            .map(AttendanceRecord::key)
            .ok_or_else(no_open_record)?;

        let record = match self
            .ledger
            .close_record(&key, now.time(), command.status_out)
            .await
        {
            Ok(record) => record,
            Err(StoreError::RecordNotFound { .. }) => {
                // Closed or removed by a writer outside this process
                warn!("Open record {} vanished before it could be closed", key);
                return Err(no_open_record().into());
            }
            Err(e) => return Err(e.into()),
        };

        let closed_prior_day = record.date != today;
        if closed_prior_day {
            warn!(
                "Sign-out for {} closed a record left open on {}",
                employee_id, record.date
            );
        }

        info!("Sign-out recorded: {}", record.key());
        Ok(SignOutResult {
            record,
            closed_prior_day,
        })
    }

    /// Every ledger record in append order
    pub async fn list_records(&self) -> AttendanceResult<Vec<AttendanceRecord>> {
        Ok(self.ledger.list_records().await?)
    }
}
