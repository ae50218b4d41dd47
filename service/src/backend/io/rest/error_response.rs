//! Translation of domain failures into HTTP responses.
//!
//! | kind       | status |
//! |------------|--------|
//! | validation | 400    |
//! | lookup     | 404    |
//! | conflict   | 409    |
//! | store      | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, warn};

use crate::backend::domain::errors::AttendanceError;
use shared::ErrorResponse;

pub fn status_for(err: &AttendanceError) -> StatusCode {
    match err {
        AttendanceError::Validation(_) => StatusCode::BAD_REQUEST,
        AttendanceError::EmployeeNotFound { .. } => StatusCode::NOT_FOUND,
        AttendanceError::Conflict(_) => StatusCode::CONFLICT,
        AttendanceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `{kind, message}` body with the matching status code
pub fn error_response(err: AttendanceError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected ({}): {}", err.kind(), err);
    }

    let body = ErrorResponse {
        kind: err.kind().to_string(),
        message: err.to_string(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::errors::{ConflictError, ValidationError};
    use crate::backend::storage::StoreError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&ValidationError::MissingId.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&AttendanceError::EmployeeNotFound { employee_id: "sbx404".into() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ConflictError::NoOpenRecord { employee_id: "sbx001".into() }.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&StoreError::RowOutOfRange { table: "Attendance Data", row: 9 }.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
