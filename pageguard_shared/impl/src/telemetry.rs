use pageguard_models::{guard::GuardConfigurationError, signature::HandlerName};
use pageguard_shared_contracts::telemetry::GuardTelemetryService;
use tracing::error;

#[derive(Debug, Clone, Copy, Default)]
pub struct GuardTelemetryServiceImpl;

impl GuardTelemetryService for GuardTelemetryServiceImpl {
    fn configuration_defect(&self, handler: &HandlerName, defect: &GuardConfigurationError) {
        error!(%handler, "pageable endpoint wiring defect: {defect}");
    }
}
