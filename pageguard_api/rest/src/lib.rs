use std::net::IpAddr;

use axum::Router;
use pageguard_core_employee_contracts::EmployeeFeatureService;
use pageguard_core_guard_contracts::GuardFeatureService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

mod errors;
mod models;
mod pageable;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Guard, Employee> {
    pub guard: Guard,
    pub employee: Employee,
}

impl<Guard, Employee> RestServer<Guard, Employee>
where
    Guard: GuardFeatureService,
    Employee: EmployeeFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        Router::new()
            .merge(routes::health::router())
            .merge(routes::employee::router(
                self.guard.into(),
                self.employee.into(),
            ))
            .layer(TraceLayer::new_for_http())
    }
}
