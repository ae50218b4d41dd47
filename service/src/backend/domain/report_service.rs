//! Read-only reporting over the employee master data and the attendance ledger.
//!
//! Every call re-scans the record store, so reports always reflect the
//! current sheet contents, including edits made outside this process.

use log::info;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;

use super::clock::Clock;
use super::commands::report::{Overview, ReportQuery};
use super::errors::AttendanceResult;
use super::models::attendance::{AttendanceRecord, StatusIn, StatusOut};
use crate::backend::storage::{AttendanceStorage, EmployeeStorage};

#[derive(Clone)]
pub struct ReportService {
    employees: Arc<dyn EmployeeStorage>,
    ledger: Arc<dyn AttendanceStorage>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(
        employees: Arc<dyn EmployeeStorage>,
        ledger: Arc<dyn AttendanceStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            ledger,
            clock,
        }
    }

    /// Headline numbers for today.
    ///
    /// Present counts distinct employees with a record dated today. Late and
    /// early arrivals count over the whole ledger.
    pub async fn overview(&self) -> AttendanceResult<Overview> {
        let today = self.clock.today();
        let total_employees = self.employees.list_employees().await?.len();
        let records = self.ledger.list_records().await?;

        let present_today = records
            .iter()
            .filter(|r| r.date == today)
            .map(|r| r.employee_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        let late_arrivals = records.iter().filter(|r| r.status_in == StatusIn::Tardy).count();
        let early_arrivals = records.iter().filter(|r| r.status_in == StatusIn::Early).count();

        Ok(Overview {
            date: today,
            total_employees,
            present_today,
            absent_today: total_employees.saturating_sub(present_today),
            late_arrivals,
            early_arrivals,
        })
    }

    /// Record count per date, oldest first
    pub async fn attendance_trend(&self) -> AttendanceResult<Vec<(NaiveDate, usize)>> {
        let records = self.ledger.list_records().await?;
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for record in &records {
            *per_day.entry(record.date).or_default() += 1;
        }
        Ok(per_day.into_iter().collect())
    }

    /// Record count per department, by department name
    pub async fn department_breakdown(&self) -> AttendanceResult<Vec<(String, usize)>> {
        let records = self.ledger.list_records().await?;
        let mut per_department: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *per_department.entry(record.department).or_default() += 1;
        }
        Ok(per_department.into_iter().collect())
    }

    /// Records matching every supplied filter, in ledger order
    pub async fn filter_records(&self, query: &ReportQuery) -> AttendanceResult<Vec<AttendanceRecord>> {
        let records = self.ledger.list_records().await?;
        let matched: Vec<AttendanceRecord> = records.into_iter().filter(|r| query.matches(r)).collect();
        info!("Report query matched {} record(s)", matched.len());
        Ok(matched)
    }

    /// Tardy sign-ins and early departures
    pub async fn late_early_report(&self, query: &ReportQuery) -> AttendanceResult<Vec<AttendanceRecord>> {
        let mut records = self.filter_records(query).await?;
        records.retain(|r| r.status_in == StatusIn::Tardy || r.status_out == Some(StatusOut::LeftEarly));
        Ok(records)
    }

    /// Days taken as leave
    pub async fn absenteeism_report(&self, query: &ReportQuery) -> AttendanceResult<Vec<AttendanceRecord>> {
        let mut records = self.filter_records(query).await?;
        // Absent means a Leave sign-in. Older sheet reports counted Site Work here.
        records.retain(|r| r.status_in == StatusIn::Leave);
        Ok(records)
    }

    /// Distinct departments that appear in the ledger
    pub async fn department_options(&self) -> AttendanceResult<Vec<String>> {
        let records = self.ledger.list_records().await?;
        let departments: BTreeSet<String> = records
            .into_iter()
            .map(|r| r.department)
            .filter(|d| !d.is_empty())
            .collect();
        Ok(departments.into_iter().collect())
    }
}
