//! # IO Module
//!
//! Interface layer between HTTP clients (the sign-in terminal and the
//! reporting dashboard) and the domain services.
//!
//! ## Supported Operations
//!
//! - **POST /api/attendance/sign-in**, **POST /api/attendance/sign-out**
//! - **GET /api/attendance/records**
//! - **/api/employees**: search, add, edit, remove
//! - **/api/reports/...**: overview, trend, department breakdown and
//!   filtered record reports

pub mod rest;
