//! Error taxonomy for sign-in, sign-out and employee management.
//!
//! Every variant renders a distinct message that can be shown to the person
//! at the terminal as-is.

use thiserror::Error;

use crate::backend::storage::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a Worker ID.")]
    MissingId,
    #[error("ID format not supported. Please enter an ID in the format sbxXXX.")]
    InvalidFormat { employee_id: String },
    #[error("{field} is a required field.")]
    MissingField { field: &'static str },
    #[error("Unknown attendance status: {value}")]
    UnknownStatus { value: String },
    #[error("Invalid date '{value}', expected YYYY-MM-DD.")]
    InvalidDate { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("ID already registered for today.")]
    AlreadySignedIn { employee_id: String },
    #[error("You have already signed out today.")]
    AlreadySignedOut { employee_id: String },
    #[error("Sign-In record not found for today.")]
    NoOpenRecord { employee_id: String },
    #[error("Employee ID {employee_id} already exists in Employee Master Data.")]
    DuplicateEmployee { employee_id: String },
}

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Worker ID not found in Employee Master Data.")]
    EmployeeNotFound { employee_id: String },
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AttendanceError {
    /// Short machine-readable category used by the REST layer
    pub fn kind(&self) -> &'static str {
        match self {
            AttendanceError::Validation(_) => "validation",
            AttendanceError::EmployeeNotFound { .. } => "lookup",
            AttendanceError::Conflict(_) => "conflict",
            AttendanceError::Store(_) => "store",
        }
    }
}

pub type AttendanceResult<T> = std::result::Result<T, AttendanceError>;
