use pageguard_models::{
    guard::GuardConfigurationError,
    signature::{HandlerMetadata, PageParamPositions},
};

/// Resolves the positions of the pagination parameters within the
/// authoritative signature of a pageable handler.
///
/// The handler implementation may satisfy several candidate contracts; only
/// a handler with exactly one is resolvable. Results may be cached per
/// handler, as a declared signature never changes at runtime.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SignatureResolveService: Send + Sync + 'static {
    fn invoke(
        &self,
        handler: &HandlerMetadata,
    ) -> Result<PageParamPositions, GuardConfigurationError>;
}

#[cfg(feature = "mock")]
impl MockSignatureResolveService {
    pub fn with_invoke(
        mut self,
        handler: HandlerMetadata,
        result: Result<PageParamPositions, GuardConfigurationError>,
    ) -> Self {
        self.expect_invoke()
            .once()
            .with(mockall::predicate::eq(handler))
            .return_once(|_| result);
        self
    }
}
