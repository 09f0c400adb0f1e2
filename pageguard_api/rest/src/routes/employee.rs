use std::sync::{Arc, LazyLock};

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use pageguard_core_employee_contracts::EmployeeFeatureService;
use pageguard_core_guard_contracts::GuardFeatureService;
use pageguard_models::signature::{
    ContractSignature, HandlerMetadata, ParamDeclaration, QueryParamBinding, PAGE_PARAM, SIZE_PARAM,
};

use crate::{
    errors::guard_error,
    models::{employee::ApiEmployeeList, ApiPaginationQuery},
    pageable,
};

/// Declared signature of the employee list endpoint. The contract carries
/// the canonical parameter declarations and their defaults; registering it
/// here is what marks the endpoint as pageable.
static LIST_EMPLOYEES: LazyLock<HandlerMetadata> = LazyLock::new(|| HandlerMetadata {
    name: "employee.list".try_into().unwrap(),
    contracts: vec![ContractSignature {
        name: "EmployeeFeatureService".try_into().unwrap(),
        params: vec![
            ParamDeclaration {
                query: Some(QueryParamBinding {
                    name: PAGE_PARAM.try_into().unwrap(),
                    default: Some(0),
                }),
            },
            ParamDeclaration {
                query: Some(QueryParamBinding {
                    name: SIZE_PARAM.try_into().unwrap(),
                    default: Some(20),
                }),
            },
        ],
    }],
});

pub fn router(
    guard: Arc<impl GuardFeatureService>,
    employee: Arc<impl EmployeeFeatureService>,
) -> Router<()> {
    Router::new()
        .route("/employees", routing::get(list))
        .with_state((guard, employee))
}

async fn list(
    State((guard, employee)): State<(
        Arc<impl GuardFeatureService>,
        Arc<impl EmployeeFeatureService>,
    )>,
    Query(query): Query<ApiPaginationQuery>,
) -> Response {
    let call = pageable::intercepted_call(
        &LIST_EMPLOYEES,
        &[(PAGE_PARAM, query.page), (SIZE_PARAM, query.size)],
    );

    let pagination = match guard.validate_call(&call) {
        Ok(pagination) => pagination,
        Err(err) => return guard_error(err),
    };

    Json(ApiEmployeeList::from(employee.list_employees(pagination))).into_response()
}
