//! Module: point
//! Responsibility: the boundary point value type and its ordering algebra.
//! Does not own: range arithmetic or collections of points.
//! Boundary: range layers build points here and compare them pairwise.

mod error;
mod side;


use crate::{
    POINT_HASH_MULTIPLIER,
    block::ValueBlock,
    domain::{DisplayContext, DomainOperators, DomainRef, OrderedDomain, same_domain},
    error::InternalError,
    value::{VALUE_HASH_SEED, Value},
};
use log::debug;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Bound,
};
use xxhash_rust::xxh3::Xxh3;

// re-exports
pub use error::{PointError, PointStateError, PointValidationError};
pub use side::{RangeEnd, Side};

///
/// BoundaryPoint
///
/// A point on the continuous space of an ordered domain. The point sits just
/// below, exactly at, or just above its value according to its side.
///
/// Unbounded extremes carry no value:
/// - upper unbounded is `(None, Below)`
/// - lower unbounded is `(None, Above)`
///
/// `(None, Exactly)` can't be constructed.
///

#[derive(Clone)]
pub struct BoundaryPoint {
    domain: DomainRef,
    value: Option<ValueBlock>,
    side: Side,
    operators: DomainOperators,
}

impl BoundaryPoint {
    ///
    /// CONSTRUCTION
    ///

    /// Validate and build a point, resolving the domain's operators once.
    pub fn new(
        domain: DomainRef,
        value: Option<ValueBlock>,
        side: Side,
    ) -> Result<Self, PointError> {
        if let Err(err) = validate(&*domain, value.as_ref(), side) {
            debug!(
                "rejected boundary point in domain '{}': {err}",
                domain.signature()
            );
            return Err(err.into());
        }

        let operators = DomainOperators::resolve(&*domain).map_err(|(operator, source)| {
            debug!(
                "domain '{}' failed to resolve {operator} operator: {source}",
                domain.signature()
            );
            PointValidationError::OperatorResolution {
                domain: domain.signature().to_string(),
                operator,
                source,
            }
        })?;

        Ok(Self {
            domain,
            value,
            side,
            operators,
        })
    }

    fn from_native(domain: DomainRef, value: Value, side: Side) -> Result<Self, PointError> {
        Self::new(domain, Some(ValueBlock::single(value)), side)
    }

    pub fn upper_unbounded(domain: DomainRef) -> Result<Self, PointError> {
        Self::new(domain, None, Side::Below)
    }

    pub fn lower_unbounded(domain: DomainRef) -> Result<Self, PointError> {
        Self::new(domain, None, Side::Above)
    }

    pub fn above(domain: DomainRef, value: impl Into<Value>) -> Result<Self, PointError> {
        Self::from_native(domain, value.into(), Side::Above)
    }

    pub fn exactly(domain: DomainRef, value: impl Into<Value>) -> Result<Self, PointError> {
        Self::from_native(domain, value.into(), Side::Exactly)
    }

    pub fn below(domain: DomainRef, value: impl Into<Value>) -> Result<Self, PointError> {
        Self::from_native(domain, value.into(), Side::Below)
    }

    /// Lower one end of a standard-library range into a point.
    pub fn from_bound(
        domain: DomainRef,
        bound: Bound<Value>,
        end: RangeEnd,
    ) -> Result<Self, PointError> {
        match (bound, end) {
            (Bound::Included(value), _) => Self::exactly(domain, value),
            (Bound::Excluded(value), RangeEnd::Lower) => Self::above(domain, value),
            (Bound::Excluded(value), RangeEnd::Upper) => Self::below(domain, value),
            (Bound::Unbounded, RangeEnd::Lower) => Self::lower_unbounded(domain),
            (Bound::Unbounded, RangeEnd::Upper) => Self::upper_unbounded(domain),
        }
    }

    // Same domain and value, new side. Invariants hold because the value is present.
    fn with_side(&self, side: Side) -> Self {
        Self {
            domain: self.domain.clone(),
            value: self.value.clone(),
            side,
            operators: self.operators.clone(),
        }
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub fn domain(&self) -> &DomainRef {
        &self.domain
    }

    #[must_use]
    pub const fn value_block(&self) -> Option<&ValueBlock> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Decoded native value; unbounded points have none.
    pub fn value(&self) -> Result<&Value, PointError> {
        let block = self.value.as_ref().ok_or(PointStateError::NoValue)?;

        native(block)
    }

    /// Domain display form of the value under `ctx`.
    pub fn printable_value(&self, ctx: &DisplayContext) -> Result<String, PointError> {
        let value = self.value()?;

        self.domain
            .display_value(value, ctx)
            .map_err(|err| InternalError::from_operator_error(err).into())
    }

    #[must_use]
    pub const fn is_upper_unbounded(&self) -> bool {
        self.value.is_none() && matches!(self.side, Side::Below)
    }

    #[must_use]
    pub const fn is_lower_unbounded(&self) -> bool {
        self.value.is_none() && matches!(self.side, Side::Above)
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.value.is_none()
    }

    fn check_domain_compatibility(&self, other: &Self) -> Result<(), PointValidationError> {
        if same_domain(&*self.domain, &*other.domain) {
            return Ok(());
        }

        Err(PointValidationError::DomainMismatch {
            left: self.domain.signature().to_string(),
            right: other.domain.signature().to_string(),
        })
    }

    // Both values, once the caller has ruled out unbounded operands.
    fn bounded_values<'a>(
        &'a self,
        other: &'a Self,
    ) -> Result<(&'a ValueBlock, &'a ValueBlock), PointError> {
        match (&self.value, &other.value) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(
                InternalError::point_invariant("bounded comparison reached an unbounded point")
                    .into(),
            ),
        }
    }

    ///
    /// ADJACENCY
    ///

    /// Two points are adjacent when they share a value and exactly one of
    /// them sits exactly on it. Unbounded points are never adjacent.
    pub fn is_adjacent(&self, other: &Self) -> Result<bool, PointError> {
        self.check_domain_compatibility(other)?;
        if self.is_unbounded() || other.is_unbounded() {
            return Ok(false);
        }

        let (left, right) = self.bounded_values(other)?;
        if self.compare_values(left, right)? != Ordering::Equal {
            return Ok(false);
        }

        Ok((self.side == Side::Exactly) != (other.side == Side::Exactly))
    }

    pub fn greater_adjacent(&self) -> Result<Self, PointError> {
        if self.is_unbounded() {
            return Err(PointStateError::AdjacentToUnbounded.into());
        }

        let side = self
            .side
            .greater_adjacent()
            .ok_or(PointStateError::NoGreaterAdjacent)?;

        Ok(self.with_side(side))
    }

    pub fn lesser_adjacent(&self) -> Result<Self, PointError> {
        if self.is_unbounded() {
            return Err(PointStateError::AdjacentToUnbounded.into());
        }

        let side = self
            .side
            .lesser_adjacent()
            .ok_or(PointStateError::NoLesserAdjacent)?;

        Ok(self.with_side(side))
    }

    ///
    /// ORDERING
    ///

    /// Total order over points of one domain.
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, PointError> {
        self.check_domain_compatibility(other)?;

        if self.is_upper_unbounded() {
            return Ok(if other.is_upper_unbounded() {
                Ordering::Equal
            } else {
                Ordering::Greater
            });
        }
        if self.is_lower_unbounded() {
            return Ok(if other.is_lower_unbounded() {
                Ordering::Equal
            } else {
                Ordering::Less
            });
        }
        if other.is_upper_unbounded() {
            return Ok(Ordering::Less);
        }
        if other.is_lower_unbounded() {
            return Ok(Ordering::Greater);
        }

        let (left, right) = self.bounded_values(other)?;
        let ordering = self.compare_values(left, right)?;

        Ok(ordering.then(self.side.cmp(&other.side)))
    }

    /// Compare two single-position blocks with this point's comparison operator.
    pub fn compare_values(
        &self,
        left: &ValueBlock,
        right: &ValueBlock,
    ) -> Result<Ordering, PointError> {
        let ordering = self.operators.compare(native(left)?, native(right)?)?;

        Ok(ordering)
    }

    pub fn min<'a>(left: &'a Self, right: &'a Self) -> Result<&'a Self, PointError> {
        Ok(if left.compare_to(right)?.is_le() {
            left
        } else {
            right
        })
    }

    pub fn max<'a>(left: &'a Self, right: &'a Self) -> Result<&'a Self, PointError> {
        Ok(if left.compare_to(right)?.is_ge() {
            left
        } else {
            right
        })
    }

    ///
    /// EQUALITY & HASHING
    ///

    /// Domain-aware equality; values are compared with the equality operator.
    pub fn try_eq(&self, other: &Self) -> Result<bool, PointError> {
        if !same_domain(&*self.domain, &*other.domain) || self.side != other.side {
            return Ok(false);
        }

        match (&self.value, &other.value) {
            (None, None) => Ok(true),
            (Some(left), Some(right)) => {
                let equal = self.operators.equal(native(left)?, native(right)?)?;
                Ok(equal)
            }
            _ => Ok(false),
        }
    }

    /// Hash consistent with [`try_eq`](Self::try_eq).
    pub fn try_hash(&self) -> Result<u64, PointError> {
        let hash = self.shape_hash();
        let Some(block) = &self.value else {
            return Ok(hash);
        };

        let value_hash = self.operators.hash(native(block)?)?;

        Ok(hash
            .wrapping_mul(POINT_HASH_MULTIPLIER)
            .wrapping_add(value_hash))
    }

    // Hash of (domain, side); shared by every point that can be equal to this one.
    fn shape_hash(&self) -> u64 {
        let mut h = Xxh3::with_seed(VALUE_HASH_SEED);
        h.update(self.domain.signature().as_bytes());
        h.update(&[0xFF, self.side.tag()]);

        h.digest()
    }

    ///
    /// DISPLAY
    ///

    /// Session-aware rendering; unbounded values print as `<min>` / `<max>`.
    pub fn to_display_string(&self, ctx: &DisplayContext) -> Result<String, PointError> {
        let value = if self.is_lower_unbounded() {
            "<min>".to_string()
        } else if self.is_upper_unbounded() {
            "<max>".to_string()
        } else {
            self.printable_value(ctx)?
        };

        Ok(format!(
            "{{domain={}, value={value}, side={}}}",
            self.domain.signature(),
            self.side
        ))
    }
}

// Decode a block already validated at construction.
fn native(block: &ValueBlock) -> Result<&Value, PointError> {
    block
        .to_native()
        .map_err(|err| InternalError::point_invariant(err.to_string()).into())
}

fn validate(
    domain: &dyn OrderedDomain,
    value: Option<&ValueBlock>,
    side: Side,
) -> Result<(), PointValidationError> {
    if !domain.is_orderable() {
        return Err(PointValidationError::NotOrderable {
            domain: domain.signature().to_string(),
        });
    }

    let Some(block) = value else {
        return match side {
            Side::Exactly => Err(PointValidationError::ExactlyUnbounded),
            Side::Below | Side::Above => Ok(()),
        };
    };

    let value = block
        .to_native()
        .map_err(|_| PointValidationError::PositionCount {
            positions: block.position_count(),
        })?;
    if !domain.accepts(value) {
        return Err(PointValidationError::ValueDomainMismatch {
            domain: domain.signature().to_string(),
            kind: value.canonical_tag().label(),
        });
    }
    if domain.is_nan(value) {
        return Err(PointValidationError::NaN);
    }

    Ok(())
}

///
/// Trait impls
///
/// The std traits delegate to the fallible forms. An operator fault makes
/// `eq` false and `hash` fall back to the (domain, side) shape hash.
///

impl PartialEq for BoundaryPoint {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

/// Equality is total for domains whose equality operator never faults and
/// whose values exclude NaN. A faulting equality operator makes a point
/// unequal to itself, so such points must not be used as map keys.
impl Eq for BoundaryPoint {}

impl PartialOrd for BoundaryPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl Hash for BoundaryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.try_hash().unwrap_or_else(|_| self.shape_hash()));
    }
}

impl fmt::Display for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoundaryPoint[")?;
        if self.is_lower_unbounded() {
            f.write_str("lower unbounded, ")?;
        } else if self.is_upper_unbounded() {
            f.write_str("upper unbounded, ")?;
        }
        write!(f, "side={}", self.side)?;
        if self.value.is_some() {
            f.write_str(", value=...")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryPoint")
            .field("domain", &self.domain.signature())
            .field("value", &self.value)
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}
