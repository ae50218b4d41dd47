//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs defined in the
//! `shared` crate to these internal types.

pub mod attendance {
    use crate::backend::domain::models::attendance::{AttendanceRecord, StatusIn, StatusOut};

    /// Input for registering a sign-in.
    #[derive(Debug, Clone)]
    pub struct SignInCommand {
        pub employee_id: String,
        pub status_in: StatusIn,
    }

    /// Input for registering a sign-out.
    #[derive(Debug, Clone)]
    pub struct SignOutCommand {
        pub employee_id: String,
        pub status_out: StatusOut,
    }

    /// Result of a successful sign-out.
    #[derive(Debug, Clone)]
    pub struct SignOutResult {
        pub record: AttendanceRecord,
        /// The closed record was dated before today
        pub closed_prior_day: bool,
    }
}

pub mod employee {
    /// Input for adding an employee to master data.
    #[derive(Debug, Clone, Default)]
    pub struct CreateEmployeeCommand {
        pub employee_id: String,
        pub name: String,
        pub phone: String,
        pub email: String,
        pub department: String,
        pub job_title: String,
        pub joining_date: String,
        pub shift_days: String,
        pub supervisor: String,
        pub address: String,
    }

    /// Partial edit; `None` leaves the field as it is.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateEmployeeCommand {
        pub name: Option<String>,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub department: Option<String>,
        pub job_title: Option<String>,
        pub joining_date: Option<String>,
        pub shift_days: Option<String>,
        pub supervisor: Option<String>,
        pub address: Option<String>,
    }
}

pub mod report {
    use chrono::NaiveDate;

    use crate::backend::domain::models::attendance::{AttendanceRecord, StatusIn};

    /// Filters for the detailed report. All supplied dimensions must match.
    #[derive(Debug, Clone, Default)]
    pub struct ReportQuery {
        /// Inclusive lower bound
        pub start_date: Option<NaiveDate>,
        /// Inclusive upper bound
        pub end_date: Option<NaiveDate>,
        /// Empty means every department
        pub departments: Vec<String>,
        /// Empty means every sign-in status
        pub statuses: Vec<StatusIn>,
    }

    impl ReportQuery {
        pub fn matches(&self, record: &AttendanceRecord) -> bool {
            self.start_date.map_or(true, |start| record.date >= start)
                && self.end_date.map_or(true, |end| record.date <= end)
                && (self.departments.is_empty() || self.departments.contains(&record.department))
                && (self.statuses.is_empty() || self.statuses.contains(&record.status_in))
        }
    }

    /// Headline numbers for the dashboard overview.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Overview {
        pub date: NaiveDate,
        pub total_employees: usize,
        pub present_today: usize,
        pub absent_today: usize,
        pub late_arrivals: usize,
        pub early_arrivals: usize,
    }
}
