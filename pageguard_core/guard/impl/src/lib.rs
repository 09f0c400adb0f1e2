use pageguard_core_guard_contracts::{resolve::SignatureResolveService, GuardFeatureService};
use pageguard_models::{
    guard::{GuardConfigurationError, GuardError, PaginationBoundsError},
    pagination::{PageNumber, PageSize, PaginationSelection},
    signature::{ArgValue, HandlerName, InterceptedCall},
};
use pageguard_shared_contracts::telemetry::GuardTelemetryService;

mod resolve;

pub use resolve::SignatureResolveServiceImpl;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct GuardFeatureServiceImpl<Resolve, Telemetry> {
    pub resolve: Resolve,
    pub telemetry: Telemetry,
}

impl<Resolve, Telemetry> GuardFeatureService for GuardFeatureServiceImpl<Resolve, Telemetry>
where
    Resolve: SignatureResolveService,
    Telemetry: GuardTelemetryService,
{
    fn validate_call(&self, call: &InterceptedCall) -> Result<PaginationSelection, GuardError> {
        let positions = self
            .resolve
            .invoke(&call.handler)
            .map_err(|defect| self.reject(&call.handler.name, defect))?;

        let page = self.integer_arg(call, positions.page)?;
        let size = self.integer_arg(call, positions.size)?;

        // A pageable endpoint has upstream-applied defaults, so an absent
        // value means the default-application mechanism failed to run.
        let (Some(page), Some(size)) = (page, size) else {
            return Err(self.reject(
                &call.handler.name,
                GuardConfigurationError::MissingValues {
                    handler: call.handler.name.clone(),
                },
            ));
        };

        let page = PageNumber::try_new(page)
            .map_err(|_| PaginationBoundsError::PageTooSmall { value: page })?;
        let size = PageSize::try_new(size)
            .map_err(|_| PaginationBoundsError::SizeOutOfBounds { value: size })?;

        Ok(PaginationSelection { page, size })
    }
}

impl<Resolve, Telemetry> GuardFeatureServiceImpl<Resolve, Telemetry>
where
    Resolve: SignatureResolveService,
    Telemetry: GuardTelemetryService,
{
    /// Report a wiring defect and turn it into the terminal error for this
    /// call.
    fn reject(&self, handler: &HandlerName, defect: GuardConfigurationError) -> GuardError {
        self.telemetry.configuration_defect(handler, &defect);
        defect.into()
    }

    /// Read the integer argument at `position`, where absence is a distinct
    /// state from an invalid value.
    fn integer_arg(
        &self,
        call: &InterceptedCall,
        position: usize,
    ) -> Result<Option<i64>, GuardError> {
        match call.args.get(position) {
            Some(Some(ArgValue::Integer(value))) => Ok(Some(*value)),
            Some(Some(_)) => Err(self.reject(
                &call.handler.name,
                GuardConfigurationError::NonIntegerValue {
                    handler: call.handler.name.clone(),
                    position,
                },
            )),
            Some(None) | None => Ok(None),
        }
    }
}
