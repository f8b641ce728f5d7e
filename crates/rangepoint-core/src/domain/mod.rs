//! Module: domain
//! Responsibility: the ordered-domain capability consumed by boundary points.
//! Does not own: orderability policy; each domain reports its own.
//! Boundary: points resolve operators here once, at construction.

mod context;
mod operator;
mod scalar;


use crate::{error::InternalError, value::Value};
use std::{fmt, sync::Arc};

// re-exports
pub use context::DisplayContext;
pub use operator::{
    ComparisonOperator, EqualOperator, HashOperator, OperatorError, OperatorFault, OperatorKind,
};
pub use scalar::ScalarDomain;

pub(crate) use operator::DomainOperators;

///
/// DomainRef
///
/// Shared, read-only handle to an ordered domain.
///

pub type DomainRef = Arc<dyn OrderedDomain>;

///
/// OrderedDomain
///
/// Capability a value domain supplies to boundary points: identity,
/// orderability, the comparison/equality/hash operators, NaN testing and
/// display. Implementations must be pure; one instance may back any number
/// of points across threads.
///

pub trait OrderedDomain: fmt::Debug + Send + Sync {
    /// Identity used for same-domain checks and diagnostics.
    fn signature(&self) -> &str;

    fn is_orderable(&self) -> bool;

    /// Whether `value` is an encoding this domain understands.
    fn accepts(&self, value: &Value) -> bool {
        let _ = value;
        true
    }

    fn comparison_operator(&self) -> Result<ComparisonOperator, InternalError>;

    fn equal_operator(&self) -> Result<EqualOperator, InternalError>;

    fn hash_operator(&self) -> Result<HashOperator, InternalError>;

    fn is_nan(&self, value: &Value) -> bool;

    /// Human-readable form of `value` under a session-like context.
    fn display_value(&self, value: &Value, ctx: &DisplayContext) -> Result<String, OperatorError>;
}

/// Two handles name the same domain when their signatures match.
#[must_use]
pub fn same_domain(left: &dyn OrderedDomain, right: &dyn OrderedDomain) -> bool {
    left.signature() == right.signature()
}
