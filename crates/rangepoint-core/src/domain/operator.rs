use crate::{domain::OrderedDomain, error::InternalError, value::Value};
use derive_more::Display;
use std::{cmp::Ordering, fmt, sync::Arc};
use thiserror::Error as ThisError;

/// Total order between two values of one domain.
pub type ComparisonOperator =
    Arc<dyn Fn(&Value, &Value) -> Result<Ordering, OperatorError> + Send + Sync>;

/// Domain equality between two values.
pub type EqualOperator = Arc<dyn Fn(&Value, &Value) -> Result<bool, OperatorError> + Send + Sync>;

/// Value hash consistent with the domain's equality.
pub type HashOperator = Arc<dyn Fn(&Value) -> Result<u64, OperatorError> + Send + Sync>;

///
/// OperatorKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum OperatorKind {
    #[display("comparison")]
    Comparison,
    #[display("equal")]
    Equal,
    #[display("hash")]
    Hash,
    #[display("display")]
    Display,
}

///
/// OperatorFault
///
/// Failure raised while a domain operator evaluated its inputs.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{operator} operator failed: {message}")]
pub struct OperatorFault {
    pub operator: OperatorKind,
    pub message: String,
}

///
/// OperatorError
///
/// Error surface of domain operators.
/// `Evaluation` is wrapped into a generic internal error by the caller;
/// `Engine` is already an engine error and propagates unchanged.
///

#[derive(Debug, ThisError)]
pub enum OperatorError {
    #[error(transparent)]
    Evaluation(OperatorFault),

    #[error(transparent)]
    Engine(#[from] InternalError),
}

impl OperatorError {
    pub fn evaluation(operator: OperatorKind, message: impl Into<String>) -> Self {
        Self::Evaluation(OperatorFault {
            operator,
            message: message.into(),
        })
    }
}

///
/// DomainOperators
///
/// Operators resolved once from a domain and cached on each point.
///

#[derive(Clone)]
pub(crate) struct DomainOperators {
    compare: ComparisonOperator,
    equal: EqualOperator,
    hash: HashOperator,
}

impl DomainOperators {
    /// Resolve every operator a boundary point needs.
    pub(crate) fn resolve(
        domain: &dyn OrderedDomain,
    ) -> Result<Self, (OperatorKind, InternalError)> {
        let compare = domain
            .comparison_operator()
            .map_err(|err| (OperatorKind::Comparison, err))?;
        let equal = domain
            .equal_operator()
            .map_err(|err| (OperatorKind::Equal, err))?;
        let hash = domain
            .hash_operator()
            .map_err(|err| (OperatorKind::Hash, err))?;

        Ok(Self {
            compare,
            equal,
            hash,
        })
    }

    pub(crate) fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, InternalError> {
        (self.compare)(left, right).map_err(InternalError::from_operator_error)
    }

    pub(crate) fn equal(&self, left: &Value, right: &Value) -> Result<bool, InternalError> {
        (self.equal)(left, right).map_err(InternalError::from_operator_error)
    }

    pub(crate) fn hash(&self, value: &Value) -> Result<u64, InternalError> {
        (self.hash)(value).map_err(InternalError::from_operator_error)
    }
}

impl fmt::Debug for DomainOperators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DomainOperators { .. }")
    }
}
