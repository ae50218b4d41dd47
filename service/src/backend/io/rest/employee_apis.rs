//! # REST API for Employee Master Data
//!
//! Endpoints for searching, adding, editing and removing employees.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use log::info;
use serde::Deserialize;

use super::error_response::error_response;
use super::mappers::employee_mapper::EmployeeMapper;
use crate::backend::AppState;
use shared::{CreateEmployeeRequest, UpdateEmployeeRequest};

#[derive(Debug, Deserialize)]
pub struct EmployeeSearchParams {
    pub search: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:employee_id", put(update_employee).delete(delete_employee))
}

/// List employees, optionally filtered by a search string
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeeSearchParams>,
) -> impl IntoResponse {
    info!("GET /api/employees - search: {:?}", params.search);

    match state.employee_service.list_employees(params.search.as_deref()).await {
        Ok(employees) => (StatusCode::OK, Json(EmployeeMapper::to_list_dto(employees))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> impl IntoResponse {
    info!("POST /api/employees - request: {:?}", request);

    let command = EmployeeMapper::to_create_command(request);
    match state.employee_service.add_employee(command).await {
        Ok(employee) => (
            StatusCode::CREATED,
            Json(EmployeeMapper::to_employee_response(employee, "Employee added successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> impl IntoResponse {
    info!("PUT /api/employees/{} - request: {:?}", employee_id, request);

    let command = EmployeeMapper::to_update_command(request);
    match state.employee_service.update_employee(&employee_id, command).await {
        Ok(employee) => (
            StatusCode::OK,
            Json(EmployeeMapper::to_employee_response(employee, "Employee updated successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/employees/{}", employee_id);

    match state.employee_service.remove_employee(&employee_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
