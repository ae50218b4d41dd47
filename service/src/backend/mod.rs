//! # Backend Module
//!
//! Everything behind the HTTP port of the attendance tracker.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, DTO mappers)
//!     ↓
//! Domain Layer (identity, reconciliation, reports, employees)
//!     ↓
//! Storage Layer (CSV worksheets)
//! ```
//!
//! The record store is opened once in [`initialize_backend`] and handed to
//! the services explicitly; nothing reaches for a global connection.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, Router};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::config::AppConfig;
use crate::backend::domain::{
    AttendanceService, Clock, EmployeeService, OpenRecordPolicy, ReportService, SystemClock,
    WriteQueue,
};
use crate::backend::storage::{
    AttendanceRepository, AttendanceStorage, CsvConnection, EmployeeRepository, EmployeeStorage,
};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub attendance_service: AttendanceService,
    pub employee_service: EmployeeService,
    pub report_service: ReportService,
}

impl AppState {
    /// Wire the services over one store; all writers share one queue
    pub fn new(
        employees: Arc<dyn EmployeeStorage>,
        ledger: Arc<dyn AttendanceStorage>,
        clock: Arc<dyn Clock>,
        policy: OpenRecordPolicy,
    ) -> Self {
        let write_queue = WriteQueue::new();
        Self {
            attendance_service: AttendanceService::new(
                employees.clone(),
                ledger.clone(),
                clock.clone(),
                policy,
                write_queue.clone(),
            ),
            employee_service: EmployeeService::new(employees.clone(), write_queue),
            report_service: ReportService::new(employees, ledger, clock),
        }
    }
}

/// Open the record store named by `config` and build the services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    let connection = CsvConnection::new(&config.data_directory)?;
    info!("Record store at {}", connection.base_directory().display());

    let employees: Arc<dyn EmployeeStorage> = Arc::new(EmployeeRepository::new(connection.clone()));
    let ledger: Arc<dyn AttendanceStorage> = Arc::new(AttendanceRepository::new(connection));

    info!("Setting up domain services (policy: {:?})", config.open_record_policy);
    Ok(AppState::new(
        employees,
        ledger,
        Arc::new(SystemClock),
        config.open_record_policy,
    ))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/attendance", io::rest::attendance_apis::router())
        .nest("/employees", io::rest::employee_apis::router())
        .nest("/reports", io::rest::report_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
