//! Store and clock doubles for tests.

use async_trait::async_trait;
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::clock::Clock;
use super::models::attendance::{AttendanceRecord, RecordKey, StatusOut};
use super::models::employee::Employee;
use crate::backend::storage::{AttendanceStorage, EmployeeStorage, StoreError, StoreResult};

/// Counts every call and fails it with an I/O error
#[derive(Default)]
pub struct UnreachableStore {
    calls: AtomicUsize,
}

impl UnreachableStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "record store unreachable",
        )))
    }
}

#[async_trait]
impl EmployeeStorage for UnreachableStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        self.fail()
    }

    async fn find_employee(&self, _employee_id: &str) -> StoreResult<Option<Employee>> {
        self.fail()
    }

    async fn store_employee(&self, _employee: &Employee) -> StoreResult<()> {
        self.fail()
    }

    async fn update_employee(&self, _employee: &Employee) -> StoreResult<bool> {
        self.fail()
    }

    async fn delete_employee(&self, _employee_id: &str) -> StoreResult<bool> {
        self.fail()
    }
}

#[async_trait]
impl AttendanceStorage for UnreachableStore {
    async fn append_record(&self, _record: &AttendanceRecord) -> StoreResult<()> {
        self.fail()
    }

    async fn list_records(&self) -> StoreResult<Vec<AttendanceRecord>> {
        self.fail()
    }

    async fn close_record(
        &self,
        _key: &RecordKey,
        _out_time: NaiveTime,
        _status_out: StatusOut,
    ) -> StoreResult<AttendanceRecord> {
        self.fail()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: NaiveDateTime) {
        match self.now.lock() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
