use serde::{Deserialize, Serialize};

/// One row of the Employee Master Data table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Worker ID in format "sbxNNN"
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

/// One row of the Attendance Data ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Weekday name, e.g. "Monday"
    pub day_of_week: String,
    /// Sign-in time (hh:mm AM/PM)
    pub in_time: String,
    pub status_in: String,
    pub break_start: String,
    pub break_end: String,
    /// Sign-out time, empty while the record is still open
    pub out_time: String,
    /// Sign-out status, empty while the record is still open
    pub status_out: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub employee_id: String,
    /// One of the sign-in status labels, e.g. "Early" or "Tardy(Late Arrival)"
    pub status_in: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub record: AttendanceRecord,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignOutRequest {
    pub employee_id: String,
    /// One of "On Time", "Left Early", "Early(On Official Duty)"
    pub status_out: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignOutResponse {
    pub record: AttendanceRecord,
    /// True when the closed record was left open on an earlier day
    pub closed_prior_day: bool,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub joining_date: String,
    #[serde(default)]
    pub shift_days: String,
    #[serde(default)]
    pub supervisor: String,
    #[serde(default)]
    pub address: String,
}

/// Partial update, only provided fields are overwritten
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee: Employee,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
}

/// Filters for the detailed attendance report.
///
/// Dates are inclusive (YYYY-MM-DD). An empty list leaves that dimension unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportQueryRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReportResponse {
    pub records: Vec<AttendanceRecord>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub date: String,
    pub total_employees: usize,
    pub present_today: usize,
    pub absent_today: usize,
    pub late_arrivals: usize,
    pub early_arrivals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub total_present: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub attendance_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBreakdownResponse {
    pub departments: Vec<DepartmentCount>,
}

/// Departments that appear in the ledger, for report filter pickers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentOptionsResponse {
    pub departments: Vec<String>,
}

/// Body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// "validation", "lookup", "conflict" or "store"
    pub kind: String,
    pub message: String,
}
