use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
}

async fn health() -> Response {
    (StatusCode::OK, Json(HealthResponse { http: true })).into_response()
}
