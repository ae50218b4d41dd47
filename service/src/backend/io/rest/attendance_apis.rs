//! # REST API for Attendance
//!
//! Sign-in and sign-out submissions plus a raw view of the ledger.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::info;

use super::error_response::error_response;
use super::mappers::attendance_mapper::AttendanceMapper;
use crate::backend::AppState;
use shared::{AttendanceListResponse, SignInRequest, SignOutRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
        .route("/records", get(list_records))
}

/// Register a sign-in for today
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> impl IntoResponse {
    info!("POST /api/attendance/sign-in - request: {:?}", request);

    let command = match AttendanceMapper::to_sign_in_command(request) {
        Ok(command) => command,
        Err(e) => return error_response(e.into()),
    };

    match state.attendance_service.submit_sign_in(command).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(AttendanceMapper::to_sign_in_response(record)),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Close the employee's open record
pub async fn sign_out(
    State(state): State<AppState>,
    Json(request): Json<SignOutRequest>,
) -> impl IntoResponse {
    info!("POST /api/attendance/sign-out - request: {:?}", request);

    let command = match AttendanceMapper::to_sign_out_command(request) {
        Ok(command) => command,
        Err(e) => return error_response(e.into()),
    };

    match state.attendance_service.submit_sign_out(command).await {
        Ok(result) => (
            StatusCode::OK,
            Json(AttendanceMapper::to_sign_out_response(result)),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn list_records(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/attendance/records");

    match state.attendance_service.list_records().await {
        Ok(records) => {
            let response = AttendanceListResponse {
                records: records.into_iter().map(AttendanceMapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
