//! Test-only domains with controllable operator behavior.

use crate::{
    domain::{
        ComparisonOperator, DisplayContext, DomainRef, EqualOperator, HashOperator,
        OperatorError, OperatorKind, OrderedDomain, ScalarDomain,
    },
    error::InternalError,
    value::{Value, hash_value},
};
use rangepoint_primitives::ScalarKind;
use std::sync::Arc;

/// Shared integer domain used by most point tests.
pub(crate) fn int_domain() -> DomainRef {
    ScalarDomain::shared(ScalarKind::Int)
}

///
/// Fault
///
/// Which operator of a [`FaultyDomain`] misbehaves.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Fault {
    /// Comparison raises an evaluation fault.
    Compare,
    /// Equality raises an error that is already an engine error.
    EqualEngine,
    /// Hashing raises an evaluation fault.
    Hash,
}

///
/// FaultyDomain
///
/// Integer-valued domain whose selected operator always fails.
///

#[derive(Debug)]
pub(crate) struct FaultyDomain {
    fault: Fault,
}

impl FaultyDomain {
    pub(crate) fn shared(fault: Fault) -> DomainRef {
        Arc::new(Self { fault })
    }
}

impl OrderedDomain for FaultyDomain {
    fn signature(&self) -> &str {
        "faulty_int"
    }

    fn is_orderable(&self) -> bool {
        true
    }

    fn comparison_operator(&self) -> Result<ComparisonOperator, InternalError> {
        let fault = self.fault;

        Ok(Arc::new(move |left: &Value, right: &Value| {
            if fault == Fault::Compare {
                return Err(OperatorError::evaluation(
                    OperatorKind::Comparison,
                    "comparator exploded",
                ));
            }
            Value::strict_order_cmp(left, right).ok_or_else(|| {
                OperatorError::evaluation(OperatorKind::Comparison, "mismatched values")
            })
        }))
    }

    fn equal_operator(&self) -> Result<EqualOperator, InternalError> {
        let fault = self.fault;

        Ok(Arc::new(move |left: &Value, right: &Value| {
            if fault == Fault::EqualEngine {
                return Err(OperatorError::Engine(InternalError::domain_internal(
                    "equality backend unavailable",
                )));
            }
            Ok(Value::strict_eq(left, right) == Some(true))
        }))
    }

    fn hash_operator(&self) -> Result<HashOperator, InternalError> {
        let fault = self.fault;

        Ok(Arc::new(move |value: &Value| {
            if fault == Fault::Hash {
                return Err(OperatorError::evaluation(OperatorKind::Hash, "hash exploded"));
            }
            Ok(hash_value(value))
        }))
    }

    fn is_nan(&self, _value: &Value) -> bool {
        false
    }

    fn display_value(&self, value: &Value, _ctx: &DisplayContext) -> Result<String, OperatorError> {
        Ok(format!("{value:?}"))
    }
}

///
/// UnresolvableDomain
///
/// Orderable domain that cannot supply a comparison operator.
///

#[derive(Debug)]
pub(crate) struct UnresolvableDomain;

impl UnresolvableDomain {
    pub(crate) fn shared() -> DomainRef {
        Arc::new(Self)
    }
}

impl OrderedDomain for UnresolvableDomain {
    fn signature(&self) -> &str {
        "unresolvable"
    }

    fn is_orderable(&self) -> bool {
        true
    }

    fn comparison_operator(&self) -> Result<ComparisonOperator, InternalError> {
        Err(InternalError::domain_unsupported(
            "no comparison operator registered",
        ))
    }

    fn equal_operator(&self) -> Result<EqualOperator, InternalError> {
        Ok(Arc::new(|left: &Value, right: &Value| Ok(left == right)))
    }

    fn hash_operator(&self) -> Result<HashOperator, InternalError> {
        Ok(Arc::new(|value: &Value| Ok(hash_value(value))))
    }

    fn is_nan(&self, _value: &Value) -> bool {
        false
    }

    fn display_value(&self, value: &Value, _ctx: &DisplayContext) -> Result<String, OperatorError> {
        Ok(format!("{value:?}"))
    }
}
