use async_trait::async_trait;
use log::{info, warn};

use super::connection::CsvConnection;
use super::worksheet::{Row, RowCoordinate, Worksheet, EMPLOYEE_MASTER};
use crate::backend::domain::models::employee::Employee;
use crate::backend::storage::error::StoreResult;
use crate::backend::storage::traits::EmployeeStorage;

const COL_EMPLOYEE_ID: usize = 0;

/// Employee Master Data repository
#[derive(Clone)]
pub struct EmployeeRepository {
    sheet: Worksheet,
}

impl EmployeeRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            sheet: Worksheet::new(connection, &EMPLOYEE_MASTER),
        }
    }

    fn to_row(employee: &Employee) -> Row {
        vec![
            employee.employee_id.clone(),
            employee.name.clone(),
            employee.phone.clone(),
            employee.email.clone(),
            employee.department.clone(),
            employee.job_title.clone(),
            employee.joining_date.clone(),
            employee.shift_days.clone(),
            employee.supervisor.clone(),
            employee.address.clone(),
        ]
    }

    fn from_row(row: &Row) -> Employee {
        let cell = |i: usize| row.get(i).map(|c| c.trim().to_string()).unwrap_or_default();

        Employee {
            employee_id: cell(COL_EMPLOYEE_ID),
            name: cell(1),
            phone: cell(2),
            email: cell(3),
            department: cell(4),
            job_title: cell(5),
            joining_date: cell(6),
            shift_days: cell(7),
            supervisor: cell(8),
            address: cell(9),
        }
    }

    fn id_matches(row: &Row, employee_id: &str) -> bool {
        !employee_id.is_empty()
            && row
                .get(COL_EMPLOYEE_ID)
                .map(|cell| cell.trim() == employee_id)
                .unwrap_or(false)
    }
}

#[async_trait]
impl EmployeeStorage for EmployeeRepository {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let rows = self.sheet.scan_all().await?;
        let mut employees = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if Worksheet::is_blank(row, COL_EMPLOYEE_ID) {
                warn!(
                    "Skipping row {} of '{}': no Employee ID",
                    RowCoordinate::from_index(index).0,
                    EMPLOYEE_MASTER.name
                );
                continue;
            }
            employees.push(Self::from_row(row));
        }
        Ok(employees)
    }

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>> {
        let found = self.sheet.find_first(|row| Self::id_matches(row, employee_id)).await?;
        Ok(found.map(|(_, row)| Self::from_row(&row)))
    }

    async fn store_employee(&self, employee: &Employee) -> StoreResult<()> {
        self.sheet.append_row(&Self::to_row(employee)).await?;
        info!("Stored employee {}", employee.employee_id);
        Ok(())
    }

    async fn update_employee(&self, employee: &Employee) -> StoreResult<bool> {
        let cells: Vec<(usize, String)> = Self::to_row(employee).into_iter().enumerate().collect();
        let id = employee.employee_id.as_str();

        let patched = self
            .sheet
            .patch_first_match(
                |rows| rows.iter().position(|row| Self::id_matches(row, id)),
                &cells,
            )
            .await?;

        match patched {
            Some((coordinate, _)) => {
                info!("Updated employee {} at row {}", id, coordinate.0);
                Ok(true)
            }
            None => {
                warn!("Employee not found for update: {}", id);
                Ok(false)
            }
        }
    }

    async fn delete_employee(&self, employee_id: &str) -> StoreResult<bool> {
        let Some((coordinate, _)) = self
            .sheet
            .find_first(|row| Self::id_matches(row, employee_id))
            .await?
        else {
            warn!("Employee not found for deletion: {}", employee_id);
            return Ok(false);
        };

        self.sheet.delete_row(coordinate).await?;
        info!("Deleted employee {} from row {}", employee_id, coordinate.0);
        Ok(true)
    }
}
