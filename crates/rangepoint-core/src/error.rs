use crate::domain::{OperatorError, OperatorFault};
use log::debug;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Not a stable API; intended for internal use and may change without notice.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a domain-origin unsupported error.
    pub fn domain_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Domain, message.into())
    }

    /// Construct a domain-origin internal error.
    pub fn domain_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Domain, message.into())
    }

    /// Construct a point-origin invariant violation.
    pub(crate) fn point_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Point,
            message.into(),
        )
    }

    /// Map a failure raised by a domain operator into the engine taxonomy.
    ///
    /// Evaluation faults become a generic internal error that keeps the
    /// original fault as detail. Errors that are already engine errors pass
    /// through unchanged.
    pub fn from_operator_error(err: OperatorError) -> Self {
        match err {
            OperatorError::Engine(inner) => inner,
            OperatorError::Evaluation(fault) => {
                debug!("wrapping domain operator fault: {fault}");

                Self {
                    class: ErrorClass::Internal,
                    origin: ErrorOrigin::Operator,
                    message: format!("generic internal error: {fault}"),
                    detail: Some(ErrorDetail::Operator(fault)),
                }
            }
        }
    }

    /// Original operator fault, when this error wraps one.
    #[must_use]
    pub const fn operator_fault(&self) -> Option<&OperatorFault> {
        match &self.detail {
            Some(ErrorDetail::Operator(fault)) => Some(fault),
            None => None,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
/// This enum is intentionally extensible.
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Operator(OperatorFault),
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Internal,
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Internal => "internal",
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Domain,
    Operator,
    Point,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Domain => "domain",
            Self::Operator => "operator",
            Self::Point => "point",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
