//! Conversions between the attendance DTOs in `shared` and the domain types.

use crate::backend::domain::commands::attendance::{SignInCommand, SignOutCommand, SignOutResult};
use crate::backend::domain::commands::report::{Overview, ReportQuery};
use crate::backend::domain::errors::ValidationError;
use crate::backend::domain::identity::IdentityValidator;
use crate::backend::domain::models::attendance::{
    format_date, format_time, parse_date, AttendanceRecord as DomainRecord, StatusIn, StatusOut,
};
use chrono::NaiveDate;
use shared::{
    AttendanceRecord as SharedRecord, AttendanceReportResponse, DepartmentBreakdownResponse,
    DepartmentCount, OverviewResponse, ReportQueryRequest, SignInRequest, SignInResponse,
    SignOutRequest, SignOutResponse, TrendPoint, TrendResponse,
};

pub struct AttendanceMapper;

impl AttendanceMapper {
    pub fn to_dto(domain: DomainRecord) -> SharedRecord {
        SharedRecord {
            employee_id: domain.employee_id,
            employee_name: domain.employee_name,
            department: domain.department,
            date: format_date(domain.date),
            day_of_week: domain.day_of_week,
            in_time: format_time(domain.in_time),
            status_in: domain.status_in.label().to_string(),
            break_start: format_time(domain.break_start),
            break_end: format_time(domain.break_end),
            out_time: domain.out_time.map(format_time).unwrap_or_default(),
            status_out: domain.status_out.map(|s| s.label().to_string()).unwrap_or_default(),
        }
    }

    /// The ID format is checked before the status label
    pub fn to_sign_in_command(dto: SignInRequest) -> Result<SignInCommand, ValidationError> {
        IdentityValidator::check_format(dto.employee_id.trim())?;
        Ok(SignInCommand {
            employee_id: dto.employee_id,
            status_in: parse_status_in(&dto.status_in)?,
        })
    }

    pub fn to_sign_out_command(dto: SignOutRequest) -> Result<SignOutCommand, ValidationError> {
        IdentityValidator::check_format(dto.employee_id.trim())?;
        let status_out = dto
            .status_out
            .parse::<StatusOut>()
            .map_err(|_| ValidationError::UnknownStatus { value: dto.status_out.clone() })?;
        Ok(SignOutCommand {
            employee_id: dto.employee_id,
            status_out,
        })
    }

    pub fn to_sign_in_response(domain: DomainRecord) -> SignInResponse {
        SignInResponse {
            record: Self::to_dto(domain),
            success_message: "Thank you for registering your presence.".to_string(),
        }
    }

    pub fn to_sign_out_response(result: SignOutResult) -> SignOutResponse {
        let success_message = if result.closed_prior_day {
            format!(
                "Signed out of the record left open on {}.",
                format_date(result.record.date)
            )
        } else {
            "Thank you for signing out.".to_string()
        };
        SignOutResponse {
            record: Self::to_dto(result.record),
            closed_prior_day: result.closed_prior_day,
            success_message,
        }
    }

    pub fn to_report_query(dto: ReportQueryRequest) -> Result<ReportQuery, ValidationError> {
        let statuses = dto
            .statuses
            .iter()
            .map(|s| parse_status_in(s))
            .collect::<Result<Vec<_>, _>>()?;
        let departments = dto
            .departments
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        Ok(ReportQuery {
            start_date: parse_optional_date(dto.start_date.as_deref())?,
            end_date: parse_optional_date(dto.end_date.as_deref())?,
            departments,
            statuses,
        })
    }

    pub fn to_report_response(records: Vec<DomainRecord>) -> AttendanceReportResponse {
        AttendanceReportResponse {
            total: records.len(),
            records: records.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_overview_dto(overview: Overview) -> OverviewResponse {
        OverviewResponse {
            date: format_date(overview.date),
            total_employees: overview.total_employees,
            present_today: overview.present_today,
            absent_today: overview.absent_today,
            late_arrivals: overview.late_arrivals,
            early_arrivals: overview.early_arrivals,
        }
    }

    pub fn to_trend_dto(points: Vec<(NaiveDate, usize)>) -> TrendResponse {
        TrendResponse {
            points: points
                .into_iter()
                .map(|(date, total_present)| TrendPoint {
                    date: format_date(date),
                    total_present,
                })
                .collect(),
        }
    }

    pub fn to_department_breakdown_dto(counts: Vec<(String, usize)>) -> DepartmentBreakdownResponse {
        DepartmentBreakdownResponse {
            departments: counts
                .into_iter()
                .map(|(department, attendance_count)| DepartmentCount {
                    department,
                    attendance_count,
                })
                .collect(),
        }
    }
}

fn parse_status_in(value: &str) -> Result<StatusIn, ValidationError> {
    value
        .parse::<StatusIn>()
        .map_err(|_| ValidationError::UnknownStatus { value: value.to_string() })
}

/// Blank strings count as "not supplied"
fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidDate { value: raw.to_string() }),
    }
}
