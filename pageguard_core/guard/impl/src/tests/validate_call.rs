use pageguard_core_guard_contracts::{resolve::MockSignatureResolveService, GuardFeatureService};
use pageguard_models::{
    guard::{GuardConfigurationError, GuardError, PaginationBoundsError},
    pagination::PaginationSelection,
    signature::{
        ArgValue, ContractSignature, HandlerMetadata, InterceptedCall, PageParamPositions,
        ParamDeclaration, QueryParamBinding, PAGE_PARAM, SIZE_PARAM,
    },
};
use pageguard_shared_contracts::telemetry::MockGuardTelemetryService;
use pretty_assertions::assert_eq;

use crate::tests::Sut;

const POSITIONS: PageParamPositions = PageParamPositions { page: 0, size: 1 };

#[test]
fn ok() {
    // Arrange
    let call = call(Some(0), Some(20));

    let resolve = MockSignatureResolveService::new().with_invoke(call.handler.clone(), Ok(POSITIONS));
    let telemetry = MockGuardTelemetryService::new();

    let sut = Sut { resolve, telemetry };

    // Act
    let result = sut.validate_call(&call);

    // Assert
    assert_eq!(result, Ok(selection(0, 20)));
}

#[test]
fn ok_at_the_inclusive_bounds() {
    for (page, size) in [(0, 1), (0, 100), (7, 42)] {
        // Arrange
        let call = call(Some(page), Some(size));

        let resolve =
            MockSignatureResolveService::new().with_invoke(call.handler.clone(), Ok(POSITIONS));
        let telemetry = MockGuardTelemetryService::new();

        let sut = Sut { resolve, telemetry };

        // Act
        let result = sut.validate_call(&call);

        // Assert
        assert_eq!(result, Ok(selection(page, size)));
    }
}

#[test]
fn page_below_minimum() {
    // Arrange
    let call = call(Some(-1), Some(20));

    let resolve = MockSignatureResolveService::new().with_invoke(call.handler.clone(), Ok(POSITIONS));
    let telemetry = MockGuardTelemetryService::new();

    let sut = Sut { resolve, telemetry };

    // Act
    let result = sut.validate_call(&call);

    // Assert
    let err = PaginationBoundsError::PageTooSmall { value: -1 };
    assert_eq!(err.to_string(), "page must be >= 0");
    assert_eq!(result, Err(GuardError::InvalidInput(err)));
}

#[test]
fn size_out_of_bounds() {
    for size in [0, 101, 150] {
        // Arrange
        let call = call(Some(0), Some(size));

        let resolve =
            MockSignatureResolveService::new().with_invoke(call.handler.clone(), Ok(POSITIONS));
        let telemetry = MockGuardTelemetryService::new();

        let sut = Sut { resolve, telemetry };

        // Act
        let result = sut.validate_call(&call);

        // Assert
        let err = PaginationBoundsError::SizeOutOfBounds { value: size };
        assert_eq!(err.to_string(), "size must be between 1 and 100 (inclusive)");
        assert_eq!(result, Err(GuardError::InvalidInput(err)));
    }
}

#[test]
fn absent_value_is_a_wiring_defect() {
    // Arrange
    let call = call(None, Some(20));
    let defect = GuardConfigurationError::MissingValues {
        handler: call.handler.name.clone(),
    };

    let resolve = MockSignatureResolveService::new().with_invoke(call.handler.clone(), Ok(POSITIONS));
    let telemetry = MockGuardTelemetryService::new()
        .with_configuration_defect(call.handler.name.clone(), defect.clone());

    let sut = Sut { resolve, telemetry };

    // Act
    let result = sut.validate_call(&call);

    // Assert
    assert_eq!(result, Err(GuardError::Configuration(defect)));
}

#[test]
fn non_integer_value_is_a_wiring_defect() {
    // Arrange
    let mut call = call(None, Some(20));
    call.args[0] = Some(ArgValue::Text("first".into()));
    let defect = GuardConfigurationError::NonIntegerValue {
        handler: call.handler.name.clone(),
        position: 0,
    };

    let resolve = MockSignatureResolveService::new().with_invoke(call.handler.clone(), Ok(POSITIONS));
    let telemetry = MockGuardTelemetryService::new()
        .with_configuration_defect(call.handler.name.clone(), defect.clone());

    let sut = Sut { resolve, telemetry };

    // Act
    let result = sut.validate_call(&call);

    // Assert
    assert_eq!(result, Err(GuardError::Configuration(defect)));
}

#[test]
fn unresolvable_signature_is_reported_before_extraction() {
    // Arrange
    let call = call(Some(0), Some(20));
    let defect = GuardConfigurationError::MissingParams {
        handler: call.handler.name.clone(),
    };

    let resolve = MockSignatureResolveService::new()
        .with_invoke(call.handler.clone(), Err(defect.clone()));
    let telemetry = MockGuardTelemetryService::new()
        .with_configuration_defect(call.handler.name.clone(), defect.clone());

    let sut = Sut { resolve, telemetry };

    // Act
    let result = sut.validate_call(&call);

    // Assert
    assert_eq!(result, Err(GuardError::Configuration(defect)));
}

#[test]
fn identical_calls_yield_identical_outcomes() {
    // Arrange
    let call = call(Some(3), Some(25));

    let mut resolve = MockSignatureResolveService::new();
    resolve
        .expect_invoke()
        .times(2)
        .returning(|_| Ok(POSITIONS));
    let telemetry = MockGuardTelemetryService::new();

    let sut = Sut { resolve, telemetry };

    // Act
    let first = sut.validate_call(&call);
    let second = sut.validate_call(&call);

    // Assert
    assert_eq!(first, Ok(selection(3, 25)));
    assert_eq!(second, first);
}

fn call(page: Option<i64>, size: Option<i64>) -> InterceptedCall {
    let contract = ContractSignature {
        name: "EmployeeFeatureService".try_into().unwrap(),
        params: [PAGE_PARAM, SIZE_PARAM]
            .into_iter()
            .map(|name| ParamDeclaration {
                query: Some(QueryParamBinding {
                    name: name.try_into().unwrap(),
                    default: None,
                }),
            })
            .collect(),
    };

    InterceptedCall {
        handler: HandlerMetadata {
            name: "employee.list".try_into().unwrap(),
            contracts: vec![contract],
        },
        args: vec![page.map(ArgValue::Integer), size.map(ArgValue::Integer)],
    }
}

fn selection(page: i64, size: i64) -> PaginationSelection {
    PaginationSelection {
        page: page.try_into().unwrap(),
        size: size.try_into().unwrap(),
    }
}
