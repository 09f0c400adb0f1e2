use crate::macros::nutype_string;

/// Logical name of the page-index input of a pageable endpoint.
pub const PAGE_PARAM: &str = "page";

/// Logical name of the page-size input of a pageable endpoint.
pub const SIZE_PARAM: &str = "size";

nutype_string!(HandlerName(validate(len_char_min = 1, len_char_max = 128)));
nutype_string!(ContractName(validate(len_char_min = 1, len_char_max = 128)));
nutype_string!(QueryParamName(validate(len_char_min = 1, len_char_max = 64)));

/// Registration-time description of a pageable handler: its identity and
/// the candidate contracts its implementation satisfies.
///
/// Exactly one contract must be present for the handler to be resolvable;
/// the contract carries the canonical parameter declarations, not the
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMetadata {
    pub name: HandlerName,
    pub contracts: Vec<ContractSignature>,
}

/// The declared parameter interface of a handler contract, in positional
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSignature {
    pub name: ContractName,
    pub params: Vec<ParamDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDeclaration {
    /// Query-style input this parameter is bound to, if any.
    pub query: Option<QueryParamBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParamBinding {
    pub name: QueryParamName,
    /// Value applied upstream when the client omits the input.
    pub default: Option<i64>,
}

/// Positions of the `page` and `size` parameters within a handler's
/// authoritative signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParamPositions {
    pub page: usize,
    pub size: usize,
}

/// A single invocation of a pageable handler, as seen by the guard.
///
/// `args` corresponds positionally to the declared parameters of the
/// handler's authoritative contract. Defaults for omitted inputs have
/// already been applied by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptedCall {
    pub handler: HandlerMetadata,
    pub args: Vec<Option<ArgValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Integer(i64),
    Text(String),
}
