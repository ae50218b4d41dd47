//! Domain model for a row of the Attendance Data ledger.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used in the Date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format used in the In-Time, Out-Time and break columns
pub const TIME_FORMAT: &str = "%I:%M %p";
/// Weekday format used in the Day column
pub const WEEKDAY_FORMAT: &str = "%A";

/// Fixed lunch break written on every new record
pub fn break_start() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

pub fn break_end() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 40, 0).unwrap_or_default()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown attendance status: {0}")]
pub struct UnknownStatus(pub String);

/// Misspelt Work from Home label found in older ledgers
const LEGACY_WORK_FROM_HOME: &str = "Work from Hoome";

/// Status chosen by the employee when signing in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusIn {
    Early,
    Leave,
    Holiday,
    WorkFromHome,
    SiteWork,
    LateOnOfficialDuty,
    Tardy,
}

impl StatusIn {
    pub const ALL: [StatusIn; 7] = [
        StatusIn::Early,
        StatusIn::Leave,
        StatusIn::Holiday,
        StatusIn::WorkFromHome,
        StatusIn::SiteWork,
        StatusIn::LateOnOfficialDuty,
        StatusIn::Tardy,
    ];

    /// Label as stored in the Attendance Status In column
    pub fn label(&self) -> &'static str {
        match self {
            StatusIn::Early => "Early",
            StatusIn::Leave => "Leave",
            StatusIn::Holiday => "Holiday",
            StatusIn::WorkFromHome => "Work from Home",
            StatusIn::SiteWork => "Site Work",
            StatusIn::LateOnOfficialDuty => "Late(On Official Duty)",
            StatusIn::Tardy => "Tardy(Late Arrival)",
        }
    }
}

impl fmt::Display for StatusIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusIn {
    type Err = UnknownStatus;

    /// Accepts the legacy misspelling on read; [`StatusIn::label`] always writes the correct one
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == LEGACY_WORK_FROM_HOME {
            return Ok(StatusIn::WorkFromHome);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.label() == trimmed)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Status chosen by the employee when signing out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusOut {
    OnTime,
    LeftEarly,
    EarlyOnOfficialDuty,
}

impl StatusOut {
    pub const ALL: [StatusOut; 3] = [
        StatusOut::OnTime,
        StatusOut::LeftEarly,
        StatusOut::EarlyOnOfficialDuty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusOut::OnTime => "On Time",
            StatusOut::LeftEarly => "Left Early",
            StatusOut::EarlyOnOfficialDuty => "Early(On Official Duty)",
        }
    }
}

impl fmt::Display for StatusOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusOut {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.label() == trimmed)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Stable address of a ledger record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub employee_id: String,
    pub date: NaiveDate,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.employee_id, format_date(self.date))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub in_time: NaiveTime,
    pub status_in: StatusIn,
    pub break_start: NaiveTime,
    pub break_end: NaiveTime,
    pub out_time: Option<NaiveTime>,
    pub status_out: Option<StatusOut>,
}

impl AttendanceRecord {
    /// Build a freshly signed-in record stamped with `now`.
    ///
    /// The time is truncated to the minute, matching what the In-Time column can hold.
    pub fn sign_in(
        employee_id: &str,
        employee_name: &str,
        department: &str,
        now: NaiveDateTime,
        status_in: StatusIn,
    ) -> Self {
        let in_time = truncate_to_minute(now.time());
        Self {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            department: department.to_string(),
            date: now.date(),
            day_of_week: now.format(WEEKDAY_FORMAT).to_string(),
            in_time,
            status_in,
            break_start: break_start(),
            break_end: break_end(),
            out_time: None,
            status_out: None,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            employee_id: self.employee_id.clone(),
            date: self.date,
        }
    }

    /// Open records have no Out-Time yet
    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    pub fn close(&mut self, out_time: NaiveTime, status_out: StatusOut) {
        self.out_time = Some(truncate_to_minute(out_time));
        self.status_out = Some(status_out);
    }
}

pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    use chrono::Timelike;
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
