//! # REST API Interface Layer
//!
//! JSON endpoints over the domain services. Handlers only translate: DTOs
//! from `shared` are mapped to domain commands, and domain errors become
//! `{kind, message}` bodies with a matching status code.
//!
//! Each `*_apis` module exposes a `router()` that `create_router` nests
//! under `/api`.

pub mod attendance_apis;
pub mod employee_apis;
pub mod error_response;
pub mod mappers;
pub mod report_apis;

#[cfg(test)]
pub(crate) mod test_support;
