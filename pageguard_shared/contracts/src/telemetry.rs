use pageguard_models::{guard::GuardConfigurationError, signature::HandlerName};

/// Emits operator-facing events for wiring defects detected while guarding
/// a pageable call.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait GuardTelemetryService: Send + Sync + 'static {
    /// Record a configuration defect at error severity.
    fn configuration_defect(&self, handler: &HandlerName, defect: &GuardConfigurationError);
}

#[cfg(feature = "mock")]
impl MockGuardTelemetryService {
    pub fn with_configuration_defect(
        mut self,
        handler: HandlerName,
        defect: GuardConfigurationError,
    ) -> Self {
        self.expect_configuration_defect()
            .once()
            .with(
                mockall::predicate::eq(handler),
                mockall::predicate::eq(defect),
            )
            .return_const(());
        self
    }
}
