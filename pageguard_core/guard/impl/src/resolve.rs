use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use pageguard_core_guard_contracts::resolve::SignatureResolveService;
use pageguard_models::{
    guard::GuardConfigurationError,
    signature::{
        ContractSignature, HandlerMetadata, HandlerName, PageParamPositions, PAGE_PARAM, SIZE_PARAM,
    },
};

/// Resolves against the single authoritative contract of the handler and
/// caches the computed parameter positions per handler name.
///
/// Declared signatures never change at runtime, so a cached descriptor
/// stays valid for the lifetime of the process. On a racing insert the
/// first writer wins; duplicate recomputation is deterministic and
/// harmless.
#[derive(Debug, Clone, Default)]
pub struct SignatureResolveServiceImpl {
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<HashMap<HandlerName, PageParamPositions>>,
}

impl SignatureResolveService for SignatureResolveServiceImpl {
    fn invoke(
        &self,
        handler: &HandlerMetadata,
    ) -> Result<PageParamPositions, GuardConfigurationError> {
        if let Some(positions) = self
            .state
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&handler.name)
        {
            return Ok(*positions);
        }

        let contract = match handler.contracts.as_slice() {
            [contract] => contract,
            [] => {
                return Err(GuardConfigurationError::MissingContract {
                    handler: handler.name.clone(),
                })
            }
            contracts => {
                return Err(GuardConfigurationError::AmbiguousContract {
                    handler: handler.name.clone(),
                    count: contracts.len(),
                })
            }
        };

        let page = query_param_position(contract, PAGE_PARAM);
        let size = query_param_position(contract, SIZE_PARAM);
        let (Some(page), Some(size)) = (page, size) else {
            return Err(GuardConfigurationError::MissingParams {
                handler: handler.name.clone(),
            });
        };

        let positions = PageParamPositions { page, size };
        Ok(*self
            .state
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(handler.name.clone())
            .or_insert(positions))
    }
}

/// Position of the first declared parameter bound to the given query input.
fn query_param_position(contract: &ContractSignature, name: &str) -> Option<usize> {
    contract.params.iter().position(|param| {
        param
            .query
            .as_ref()
            .is_some_and(|binding| *binding.name == name)
    })
}

#[cfg(test)]
mod tests {
    use pageguard_models::signature::{ParamDeclaration, QueryParamBinding};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_positions_from_the_single_contract() {
        // Arrange
        let handler = handler(vec![contract(&[None, Some(PAGE_PARAM), Some(SIZE_PARAM)])]);

        let sut = SignatureResolveServiceImpl::default();

        // Act
        let result = sut.invoke(&handler);

        // Assert
        assert_eq!(result, Ok(PageParamPositions { page: 1, size: 2 }));
    }

    #[test]
    fn no_contract() {
        // Arrange
        let handler = handler(vec![]);

        let sut = SignatureResolveServiceImpl::default();

        // Act
        let result = sut.invoke(&handler);

        // Assert
        assert_eq!(
            result,
            Err(GuardConfigurationError::MissingContract {
                handler: handler.name.clone()
            })
        );
    }

    #[test]
    fn more_than_one_contract() {
        // Arrange
        let signature = contract(&[Some(PAGE_PARAM), Some(SIZE_PARAM)]);
        let handler = handler(vec![signature.clone(), signature]);

        let sut = SignatureResolveServiceImpl::default();

        // Act
        let result = sut.invoke(&handler);

        // Assert
        assert_eq!(
            result,
            Err(GuardConfigurationError::AmbiguousContract {
                handler: handler.name.clone(),
                count: 2
            })
        );
    }

    #[test]
    fn missing_pagination_params() {
        // Arrange
        let handler = handler(vec![contract(&[Some(PAGE_PARAM), Some("filter")])]);

        let sut = SignatureResolveServiceImpl::default();

        // Act
        let result = sut.invoke(&handler);

        // Assert
        assert_eq!(
            result,
            Err(GuardConfigurationError::MissingParams {
                handler: handler.name.clone()
            })
        );
    }

    #[test]
    fn first_matching_declaration_wins() {
        // Arrange
        let handler = handler(vec![contract(&[
            Some(SIZE_PARAM),
            Some(PAGE_PARAM),
            Some(PAGE_PARAM),
        ])]);

        let sut = SignatureResolveServiceImpl::default();

        // Act
        let result = sut.invoke(&handler);

        // Assert
        assert_eq!(result, Ok(PageParamPositions { page: 1, size: 0 }));
    }

    #[test]
    fn cached_descriptor_is_reused_per_handler() {
        // Arrange
        let first = handler(vec![contract(&[Some(PAGE_PARAM), Some(SIZE_PARAM)])]);
        let second = handler(vec![contract(&[Some(SIZE_PARAM), Some(PAGE_PARAM)])]);

        let sut = SignatureResolveServiceImpl::default();

        // Act
        let before = sut.invoke(&first);
        let after = sut.invoke(&second);

        // Assert
        assert_eq!(before, Ok(PageParamPositions { page: 0, size: 1 }));
        assert_eq!(after, before);
    }

    fn handler(contracts: Vec<ContractSignature>) -> HandlerMetadata {
        HandlerMetadata {
            name: "employee.list".try_into().unwrap(),
            contracts,
        }
    }

    fn contract(queries: &[Option<&str>]) -> ContractSignature {
        ContractSignature {
            name: "EmployeeFeatureService".try_into().unwrap(),
            params: queries
                .iter()
                .map(|query| ParamDeclaration {
                    query: query.map(|name| QueryParamBinding {
                        name: name.try_into().unwrap(),
                        default: None,
                    }),
                })
                .collect(),
        }
    }
}
