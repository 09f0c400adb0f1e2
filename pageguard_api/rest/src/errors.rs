use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pageguard_models::guard::GuardError;
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";

#[derive(Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}

pub fn error(code: StatusCode, detail: impl Serialize) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_SERVER_ERROR_DETAIL,
    )
}

/// Translate a guard rejection into the protocol-level response.
///
/// Client input defects name the offending field and constraint; wiring
/// defects must not leak endpoint internals to the caller.
pub fn guard_error(err: GuardError) -> Response {
    match err {
        GuardError::Configuration(err) => internal_server_error(err),
        GuardError::InvalidInput(err) => error(StatusCode::BAD_REQUEST, err.to_string()),
    }
}
