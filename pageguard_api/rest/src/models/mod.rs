use serde::Deserialize;

pub mod employee;

/// Pagination inputs as supplied by the client, before the upstream
/// defaults are applied.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApiPaginationQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
