use crate::backend::domain::commands::employee::{CreateEmployeeCommand, UpdateEmployeeCommand};
use crate::backend::domain::models::employee::Employee as DomainEmployee;
use shared::{
    CreateEmployeeRequest, Employee as SharedEmployee, EmployeeListResponse, EmployeeResponse,
    UpdateEmployeeRequest,
};

/// Mapper between the shared employee DTOs and the domain model.
pub struct EmployeeMapper;

impl EmployeeMapper {
    pub fn to_dto(domain: DomainEmployee) -> SharedEmployee {
        SharedEmployee {
            employee_id: domain.employee_id,
            name: domain.name,
            phone: domain.phone,
            email: domain.email,
            department: domain.department,
            job_title: domain.job_title,
            joining_date: domain.joining_date,
            shift_days: domain.shift_days,
            supervisor: domain.supervisor,
            address: domain.address,
        }
    }

    pub fn to_create_command(dto: CreateEmployeeRequest) -> CreateEmployeeCommand {
        CreateEmployeeCommand {
            employee_id: dto.employee_id,
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            department: dto.department,
            job_title: dto.job_title,
            joining_date: dto.joining_date,
            shift_days: dto.shift_days,
            supervisor: dto.supervisor,
            address: dto.address,
        }
    }

    pub fn to_update_command(dto: UpdateEmployeeRequest) -> UpdateEmployeeCommand {
        UpdateEmployeeCommand {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            department: dto.department,
            job_title: dto.job_title,
            joining_date: dto.joining_date,
            shift_days: dto.shift_days,
            supervisor: dto.supervisor,
            address: dto.address,
        }
    }

    pub fn to_employee_response(domain: DomainEmployee, message: &str) -> EmployeeResponse {
        EmployeeResponse {
            employee: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_list_dto(employees: Vec<DomainEmployee>) -> EmployeeListResponse {
        EmployeeListResponse {
            employees: employees.into_iter().map(Self::to_dto).collect(),
        }
    }
}
