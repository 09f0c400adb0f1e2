use pageguard_models::{
    guard::GuardError, pagination::PaginationSelection, signature::InterceptedCall,
};

pub mod resolve;

/// Gates execution of a pageable handler on valid pagination inputs.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait GuardFeatureService: Send + Sync + 'static {
    /// Validate the pagination inputs of the given call.
    ///
    /// Succeeds with the validated selection, in which case the dispatch
    /// layer forwards the call to the handler unchanged. Configuration
    /// defects are reported through telemetry before being returned; bound
    /// violations are the caller's fault and are not specially logged.
    fn validate_call(&self, call: &InterceptedCall) -> Result<PaginationSelection, GuardError>;
}

#[cfg(feature = "mock")]
impl MockGuardFeatureService {
    pub fn with_validate_call(
        mut self,
        call: InterceptedCall,
        result: Result<PaginationSelection, GuardError>,
    ) -> Self {
        self.expect_validate_call()
            .once()
            .with(mockall::predicate::eq(call))
            .return_once(|_| result);
        self
    }
}
