use crate::{domain::OperatorKind, error::InternalError};
use thiserror::Error as ThisError;

///
/// PointError
///
/// Every failure a boundary point can report.
/// Validation is caller-fixable input, IllegalState is misuse of a valid
/// point, Internal carries faults raised by domain operators.
///

#[derive(Debug, ThisError)]
pub enum PointError {
    #[error("{0}")]
    Validation(#[from] PointValidationError),

    #[error("{0}")]
    IllegalState(#[from] PointStateError),

    #[error("{0}")]
    Internal(#[from] InternalError),
}

impl PointError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }

    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

///
/// PointValidationError
///

#[derive(Debug, ThisError)]
pub enum PointValidationError {
    #[error("domain '{domain}' must be orderable")]
    NotOrderable { domain: String },

    #[error("cannot be equal to unbounded")]
    ExactlyUnbounded,

    #[error("value block should only have one position, found {positions}")]
    PositionCount { positions: usize },

    #[error("cannot use NaN as range bound")]
    NaN,

    #[error("value of kind {kind} does not belong to domain '{domain}'")]
    ValueDomainMismatch { domain: String, kind: &'static str },

    #[error("mismatched boundary point domains: {left} vs {right}")]
    DomainMismatch { left: String, right: String },

    #[error("domain '{domain}' cannot resolve its {operator} operator: {source}")]
    OperatorResolution {
        domain: String,
        operator: OperatorKind,
        source: InternalError,
    },
}

///
/// PointStateError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum PointStateError {
    #[error("no value to get")]
    NoValue,

    #[error("no point adjacent to unbounded")]
    AdjacentToUnbounded,

    #[error("no greater point adjacent to an ABOVE bound")]
    NoGreaterAdjacent,

    #[error("no lesser point adjacent to a BELOW bound")]
    NoLesserAdjacent,
}
