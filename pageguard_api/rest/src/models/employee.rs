use chrono::{DateTime, Utc};
use pageguard_core_employee_contracts::EmployeeListResult;
use pageguard_models::employee::{Employee, EmployeeId, EmployeeName, JobTitle};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiEmployeeList {
    pub total: u64,
    pub employees: Vec<ApiEmployee>,
}

impl From<EmployeeListResult> for ApiEmployeeList {
    fn from(value: EmployeeListResult) -> Self {
        Self {
            total: value.total,
            employees: value.employees.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiEmployee {
    pub id: EmployeeId,
    pub name: EmployeeName,
    pub title: JobTitle,
    pub hired_at: DateTime<Utc>,
}

impl From<Employee> for ApiEmployee {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id,
            name: value.name,
            title: value.title,
            hired_at: value.hired_at,
        }
    }
}
