use pageguard_models::{employee::Employee, pagination::PaginationSelection};

/// Serves the sample employee directory in bounded pages.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmployeeFeatureService: Send + Sync + 'static {
    /// Return the requested window of the directory.
    ///
    /// The pagination inputs have already been validated by the guard.
    fn list_employees(&self, pagination: PaginationSelection) -> EmployeeListResult;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeListResult {
    pub total: u64,
    pub employees: Vec<Employee>,
}

#[cfg(feature = "mock")]
impl MockEmployeeFeatureService {
    pub fn with_list_employees(
        mut self,
        pagination: PaginationSelection,
        result: EmployeeListResult,
    ) -> Self {
        self.expect_list_employees()
            .once()
            .with(mockall::predicate::eq(pagination))
            .return_once(|_| result);
        self
    }
}
