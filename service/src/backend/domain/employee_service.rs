//! Maintenance of the Employee Master Data table.
//!
//! Writes share the [`WriteQueue`] with the attendance service. Removing an
//! employee leaves their ledger rows in place.

use log::{info, warn};
use std::sync::Arc;

use super::commands::employee::{CreateEmployeeCommand, UpdateEmployeeCommand};
use super::errors::{AttendanceError, AttendanceResult, ConflictError, ValidationError};
use super::identity::IdentityValidator;
use super::models::employee::Employee;
use super::write_queue::WriteQueue;
use crate::backend::storage::EmployeeStorage;

#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStorage>,
    write_queue: WriteQueue,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeStorage>, write_queue: WriteQueue) -> Self {
        Self {
            employees,
            write_queue,
        }
    }

    /// All employees, or those with any field containing `search` (case-insensitive)
    pub async fn list_employees(&self, search: Option<&str>) -> AttendanceResult<Vec<Employee>> {
        let employees = self.employees.list_employees().await?;
        let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        if needle.is_empty() {
            return Ok(employees);
        }
        Ok(employees.into_iter().filter(|e| e.matches_search(&needle)).collect())
    }

    pub async fn get_employee(&self, employee_id: &str) -> AttendanceResult<Employee> {
        let employee_id = employee_id.trim();
        self.employees
            .find_employee(employee_id)
            .await?
            .ok_or_else(|| AttendanceError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    pub async fn add_employee(&self, command: CreateEmployeeCommand) -> AttendanceResult<Employee> {
        let employee_id = command.employee_id.trim().to_string();
        info!("Adding employee {}", employee_id);

        IdentityValidator::check_format(&employee_id)?;
        if command.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "Employee Name" }.into());
        }

        let _slot = self.write_queue.acquire().await;

        if self.employees.find_employee(&employee_id).await?.is_some() {
            warn!("Refusing duplicate employee {}", employee_id);
            return Err(ConflictError::DuplicateEmployee { employee_id }.into());
        }

        let employee = Employee {
            employee_id,
            name: command.name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            email: command.email.trim().to_string(),
            department: command.department.trim().to_string(),
            job_title: command.job_title.trim().to_string(),
            joining_date: command.joining_date.trim().to_string(),
            shift_days: command.shift_days.trim().to_string(),
            supervisor: command.supervisor.trim().to_string(),
            address: command.address.trim().to_string(),
        };
        self.employees.store_employee(&employee).await?;

        info!("Added employee {}", employee.employee_id);
        Ok(employee)
    }

    /// Overwrite the supplied fields; the ID itself cannot change
    pub async fn update_employee(
        &self,
        employee_id: &str,
        command: UpdateEmployeeCommand,
    ) -> AttendanceResult<Employee> {
        let employee_id = employee_id.trim();
        IdentityValidator::check_format(employee_id)?;
        if matches!(&command.name, Some(name) if name.trim().is_empty()) {
            return Err(ValidationError::MissingField { field: "Employee Name" }.into());
        }

        let _slot = self.write_queue.acquire().await;

        let mut employee = self.get_employee(employee_id).await?;
        let fields = [
            (&mut employee.name, command.name),
            (&mut employee.phone, command.phone),
            (&mut employee.email, command.email),
            (&mut employee.department, command.department),
            (&mut employee.job_title, command.job_title),
            (&mut employee.joining_date, command.joining_date),
            (&mut employee.shift_days, command.shift_days),
            (&mut employee.supervisor, command.supervisor),
            (&mut employee.address, command.address),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value.trim().to_string();
            }
        }

        if !self.employees.update_employee(&employee).await? {
            return Err(AttendanceError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            });
        }

        info!("Updated employee {}", employee_id);
        Ok(employee)
    }

    pub async fn remove_employee(&self, employee_id: &str) -> AttendanceResult<()> {
        let employee_id = employee_id.trim();
        IdentityValidator::check_format(employee_id)?;

        let _slot = self.write_queue.acquire().await;

        if !self.employees.delete_employee(employee_id).await? {
            return Err(AttendanceError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            });
        }

        info!("Removed employee {}", employee_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::attendance::StatusIn;
    use crate::backend::storage::csv::test_utils::RepositoryTestHelper;
    use crate::backend::storage::AttendanceStorage;

    async fn setup() -> (RepositoryTestHelper, EmployeeService) {
        let helper = RepositoryTestHelper::new().await.unwrap();
        let service = EmployeeService::new(Arc::new(helper.employee_repo.clone()), WriteQueue::new());
        (helper, service)
    }

    fn create(id: &str, name: &str) -> CreateEmployeeCommand {
        CreateEmployeeCommand {
            employee_id: id.to_string(),
            name: name.to_string(),
            department: "Sales".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_and_search_employees() {
        let (_helper, service) = setup().await;

        service.add_employee(create("sbx001", "Ada Lovelace")).await.unwrap();
        let mut grace = create(" sbx002 ", "Grace Hopper");
        grace.department = "Engineering".to_string();
        service.add_employee(grace).await.unwrap();

        assert_eq!(service.list_employees(None).await.unwrap().len(), 2);
        assert_eq!(service.list_employees(Some("  ")).await.unwrap().len(), 2);

        let hits = service.list_employees(Some("ENGINEER")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee_id, "sbx002");
    }

    #[tokio::test]
    async fn test_add_employee_validation() {
        let (_helper, service) = setup().await;

        let err = service.add_employee(create("", "Ada")).await.unwrap_err();
        assert!(matches!(err, AttendanceError::Validation(ValidationError::MissingId)));

        let err = service.add_employee(create("emp001", "Ada")).await.unwrap_err();
        assert!(matches!(
            err,
            AttendanceError::Validation(ValidationError::InvalidFormat { .. })
        ));

        let err = service.add_employee(create("sbx001", " ")).await.unwrap_err();
        assert!(matches!(
            err,
            AttendanceError::Validation(ValidationError::MissingField { field: "Employee Name" })
        ));

        service.add_employee(create("sbx001", "Ada")).await.unwrap();
        let err = service.add_employee(create("sbx001", "Other")).await.unwrap_err();
        assert!(matches!(
            err,
            AttendanceError::Conflict(ConflictError::DuplicateEmployee { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_employee_overwrites_supplied_fields() {
        let (_helper, service) = setup().await;
        let mut ada = create("sbx001", "Ada");
        ada.phone = "555-0100".to_string();
        service.add_employee(ada).await.unwrap();

        let updated = service
            .update_employee(
                "sbx001",
                UpdateEmployeeCommand {
                    department: Some("Engineering".to_string()),
                    supervisor: Some("Charles".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.department, "Engineering");
        assert_eq!(updated.supervisor, "Charles");
        assert_eq!(updated.phone, "555-0100");
        assert_eq!(service.get_employee("sbx001").await.unwrap(), updated);

        let err = service
            .update_employee("sbx404", UpdateEmployeeCommand::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceError::EmployeeNotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_employee_keeps_ledger_rows() {
        let (helper, service) = setup().await;
        let ada = service.add_employee(create("sbx001", "Ada")).await.unwrap();
        helper.create_open_record(&ada, "2024-01-01", StatusIn::Early).await.unwrap();

        service.remove_employee("sbx001").await.unwrap();

        assert!(service.list_employees(None).await.unwrap().is_empty());
        assert_eq!(helper.attendance_repo.list_records().await.unwrap().len(), 1);

        let err = service.remove_employee("sbx001").await.unwrap_err();
        assert_eq!(err.kind(), "lookup");
    }
}
