//! # REST API for Reports
//!
//! Dashboard numbers and filtered views of the attendance ledger.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::info;

use super::error_response::error_response;
use super::mappers::attendance_mapper::AttendanceMapper;
use crate::backend::domain::models::attendance::AttendanceRecord;
use crate::backend::domain::AttendanceResult;
use crate::backend::AppState;
use shared::{DepartmentOptionsResponse, ReportQueryRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/trend", get(get_trend))
        .route("/departments", get(get_department_breakdown))
        .route("/department-options", get(get_department_options))
        .route("/query", post(query_records))
        .route("/late-early", post(late_early_report))
        .route("/absenteeism", post(absenteeism_report))
}

pub async fn get_overview(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/overview");

    match state.report_service.overview().await {
        Ok(overview) => (StatusCode::OK, Json(AttendanceMapper::to_overview_dto(overview))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_trend(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/trend");

    match state.report_service.attendance_trend().await {
        Ok(points) => (StatusCode::OK, Json(AttendanceMapper::to_trend_dto(points))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_department_breakdown(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/departments");

    match state.report_service.department_breakdown().await {
        Ok(counts) => (
            StatusCode::OK,
            Json(AttendanceMapper::to_department_breakdown_dto(counts)),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_department_options(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/department-options");

    match state.report_service.department_options().await {
        Ok(departments) => (StatusCode::OK, Json(DepartmentOptionsResponse { departments })).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn query_records(
    State(state): State<AppState>,
    Json(request): Json<ReportQueryRequest>,
) -> impl IntoResponse {
    info!("POST /api/reports/query - request: {:?}", request);

    match AttendanceMapper::to_report_query(request) {
        Ok(query) => report_response(state.report_service.filter_records(&query).await),
        Err(e) => error_response(e.into()),
    }
}

pub async fn late_early_report(
    State(state): State<AppState>,
    Json(request): Json<ReportQueryRequest>,
) -> impl IntoResponse {
    info!("POST /api/reports/late-early - request: {:?}", request);

    match AttendanceMapper::to_report_query(request) {
        Ok(query) => report_response(state.report_service.late_early_report(&query).await),
        Err(e) => error_response(e.into()),
    }
}

pub async fn absenteeism_report(
    State(state): State<AppState>,
    Json(request): Json<ReportQueryRequest>,
) -> impl IntoResponse {
    info!("POST /api/reports/absenteeism - request: {:?}", request);

    match AttendanceMapper::to_report_query(request) {
        Ok(query) => report_response(state.report_service.absenteeism_report(&query).await),
        Err(e) => error_response(e.into()),
    }
}

fn report_response(result: AttendanceResult<Vec<AttendanceRecord>>) -> Response {
    match result {
        Ok(records) => (StatusCode::OK, Json(AttendanceMapper::to_report_response(records))).into_response(),
        Err(e) => error_response(e),
    }
}
