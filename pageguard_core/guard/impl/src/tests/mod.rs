use pageguard_core_guard_contracts::resolve::MockSignatureResolveService;
use pageguard_shared_contracts::telemetry::MockGuardTelemetryService;

use crate::GuardFeatureServiceImpl;

mod validate_call;

type Sut = GuardFeatureServiceImpl<MockSignatureResolveService, MockGuardTelemetryService>;
