use std::sync::Arc;

use pageguard_api_rest::RestServer;
use pageguard_config::Config;
use pageguard_core_employee_impl::EmployeeFeatureServiceImpl;
use pageguard_core_guard_impl::{GuardFeatureServiceImpl, SignatureResolveServiceImpl};
use pageguard_demo::employee::ALL_EMPLOYEES;
use pageguard_shared_impl::telemetry::GuardTelemetryServiceImpl;
use tracing::info;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let server = RestServer {
        guard: GuardFeatureServiceImpl {
            resolve: SignatureResolveServiceImpl::default(),
            telemetry: GuardTelemetryServiceImpl,
        },
        employee: EmployeeFeatureServiceImpl {
            directory: Arc::new(ALL_EMPLOYEES.iter().copied().cloned().collect()),
        },
    };

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
