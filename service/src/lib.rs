//! Attendance sign-in/sign-out ledger and reporting service.

pub mod backend;
