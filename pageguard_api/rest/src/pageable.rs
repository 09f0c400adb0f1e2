use pageguard_models::signature::{ArgValue, HandlerMetadata, InterceptedCall};

/// Build the intercepted call for a pageable request: marshal the
/// client-supplied query values into the positional argument list of the
/// declared signature, applying the contract-declared defaults for omitted
/// inputs.
///
/// This is the dispatch-layer defaults mechanism the guard relies on; a
/// parameter that ends up without a value here surfaces as a wiring defect
/// during validation, never as a client error.
pub(crate) fn intercepted_call(
    handler: &HandlerMetadata,
    client: &[(&str, Option<i64>)],
) -> InterceptedCall {
    // Positional marshalling needs a declared signature. With anything but
    // exactly one contract the guard rejects during resolution, before it
    // reads any argument.
    let args = match handler.contracts.as_slice() {
        [contract] => contract
            .params
            .iter()
            .map(|param| {
                param.query.as_ref().and_then(|binding| {
                    client
                        .iter()
                        .find(|(name, _)| *binding.name == *name)
                        .and_then(|(_, value)| *value)
                        .or(binding.default)
                        .map(ArgValue::Integer)
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    InterceptedCall {
        handler: handler.clone(),
        args,
    }
}
