use std::sync::Arc;

use pageguard_core_employee_contracts::{EmployeeFeatureService, EmployeeListResult};
use pageguard_models::{employee::Employee, pagination::PaginationSelection};

#[derive(Debug, Clone, Default)]
pub struct EmployeeFeatureServiceImpl {
    pub directory: Arc<Vec<Employee>>,
}

impl EmployeeFeatureService for EmployeeFeatureServiceImpl {
    fn list_employees(&self, pagination: PaginationSelection) -> EmployeeListResult {
        let offset = (*pagination.page).saturating_mul(*pagination.size) as usize;
        let employees = self
            .directory
            .iter()
            .skip(offset)
            .take(*pagination.size as usize)
            .cloned()
            .collect();

        EmployeeListResult {
            total: self.directory.len() as u64,
            employees,
        }
    }
}
