use thiserror::Error;

use crate::{
    pagination::{PageNumber, PageSize},
    signature::{HandlerName, PAGE_PARAM, SIZE_PARAM},
};

/// Outcome taxonomy of the pagination guard, split by whose fault the
/// failure is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error(transparent)]
    Configuration(#[from] GuardConfigurationError),
    #[error(transparent)]
    InvalidInput(#[from] PaginationBoundsError),
}

/// A mismatch between how an endpoint is declared and what its signature
/// or wiring actually exposes. A deployment-time bug, never the caller's
/// fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardConfigurationError {
    #[error("Pageable handler {handler} has no authoritative contract")]
    MissingContract { handler: HandlerName },
    #[error("Pageable handler {handler} has {count} candidate contracts, expected exactly one")]
    AmbiguousContract { handler: HandlerName, count: usize },
    #[error("Handler {handler} is pageable but is missing {}/{} params", PAGE_PARAM, SIZE_PARAM)]
    MissingParams { handler: HandlerName },
    #[error("Handler {handler} is pageable but is missing default {}/{} values", SIZE_PARAM, PAGE_PARAM)]
    MissingValues { handler: HandlerName },
    #[error("Handler {handler} has a non-integer value at pagination parameter position {position}")]
    NonIntegerValue { handler: HandlerName, position: usize },
}

/// A present pagination value outside the policy bounds. The caller's
/// fault; the message names the field and the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationBoundsError {
    #[error("{} must be >= {}", PAGE_PARAM, PageNumber::MIN)]
    PageTooSmall { value: i64 },
    #[error("{} must be between {} and {} (inclusive)", SIZE_PARAM, PageSize::MIN, PageSize::MAX)]
    SizeOutOfBounds { value: i64 },
}
