//! Worker ID syntax and existence checks.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use super::errors::{AttendanceError, AttendanceResult, ValidationError};
use crate::backend::storage::{EmployeeStorage, StoreResult};

static EMPLOYEE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sbx[0-9]{3}$").expect("employee id pattern is valid"));

#[derive(Clone)]
pub struct IdentityValidator {
    employees: Arc<dyn EmployeeStorage>,
}

impl IdentityValidator {
    pub fn new(employees: Arc<dyn EmployeeStorage>) -> Self {
        Self { employees }
    }

    /// True for IDs of the form "sbx" followed by exactly three digits
    pub fn validate_format(employee_id: &str) -> bool {
        EMPLOYEE_ID_PATTERN.is_match(employee_id)
    }

    /// Syntax-only check, never touches the store
    pub fn check_format(employee_id: &str) -> Result<(), ValidationError> {
        if employee_id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if !Self::validate_format(employee_id) {
            return Err(ValidationError::InvalidFormat {
                employee_id: employee_id.to_string(),
            });
        }
        Ok(())
    }

    /// Full scan of Employee Master Data
    pub async fn exists(&self, employee_id: &str) -> StoreResult<bool> {
        let employees = self.employees.list_employees().await?;
        Ok(employees.iter().any(|e| e.employee_id == employee_id))
    }

    /// Format first, then existence
    pub async fn require_registered(&self, employee_id: &str) -> AttendanceResult<()> {
        Self::check_format(employee_id)?;

        if !self.exists(employee_id).await? {
            warn!("Worker ID not found in master data: {}", employee_id);
            return Err(AttendanceError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_doubles::UnreachableStore;
    use crate::backend::storage::csv::test_utils::RepositoryTestHelper;

    #[test]
    fn test_validate_format() {
        assert!(IdentityValidator::validate_format("sbx001"));
        assert!(IdentityValidator::validate_format("sbx999"));

        for bad in ["sb123", "sbx12", "SBX001", "sbx0001", "sbx00a", " sbx001", "sbx001 ", "", "sbx١٢٣"] {
            assert!(!IdentityValidator::validate_format(bad), "accepted {bad:?}");
        }
    }

    #[tokio::test]
    async fn test_malformed_ids_fail_before_store_access() {
        let store = Arc::new(UnreachableStore::default());
        let validator = IdentityValidator::new(store.clone());

        let err = validator.require_registered("sbx12").await.unwrap_err();
        assert!(matches!(
            err,
            AttendanceError::Validation(ValidationError::InvalidFormat { .. })
        ));

        let err = validator.require_registered("").await.unwrap_err();
        assert!(matches!(err, AttendanceError::Validation(ValidationError::MissingId)));

        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_exists_scans_master_data() {
        let helper = RepositoryTestHelper::new().await.unwrap();
        helper.create_test_employee("sbx001", "Ada", "Sales").await.unwrap();
        let validator = IdentityValidator::new(Arc::new(helper.employee_repo.clone()));

        assert!(validator.exists("sbx001").await.unwrap());
        assert!(!validator.exists("sbx002").await.unwrap());

        let err = validator.require_registered("sbx002").await.unwrap_err();
        assert!(matches!(err, AttendanceError::EmployeeNotFound { .. }));
        assert_eq!(err.to_string(), "Worker ID not found in Employee Master Data.");
    }
}
