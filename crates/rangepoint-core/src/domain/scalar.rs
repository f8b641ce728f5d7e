use crate::{
    domain::{
        ComparisonOperator, DisplayContext, DomainRef, EqualOperator, HashOperator,
        OperatorError, OperatorKind, OrderedDomain,
    },
    error::InternalError,
    value::{Value, hash_value},
};
use rangepoint_primitives::ScalarKind;
use std::sync::Arc;
use time::{Date, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

/// Julian day number of 1970-01-01.
const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;

const NANOS_PER_MICRO: i128 = 1_000;

///
/// ScalarDomain
///
/// Ordered domain over one registered scalar kind.
/// Capabilities come from the scalar registry.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarDomain {
    kind: ScalarKind,
}

impl ScalarDomain {
    #[must_use]
    pub const fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }

    /// Shared handle for boundary point construction.
    #[must_use]
    pub fn shared(kind: ScalarKind) -> DomainRef {
        Arc::new(Self::new(kind))
    }

    #[must_use]
    pub const fn kind(self) -> ScalarKind {
        self.kind
    }

    fn unsupported(self, operator: OperatorKind) -> InternalError {
        InternalError::domain_unsupported(format!(
            "domain '{}' has no {operator} operator",
            self.kind.signature()
        ))
    }
}

fn mismatch(operator: OperatorKind, left: &Value, right: &Value) -> OperatorError {
    OperatorError::evaluation(
        operator,
        format!(
            "cannot apply to {} and {}",
            left.canonical_tag().label(),
            right.canonical_tag().label()
        ),
    )
}

impl OrderedDomain for ScalarDomain {
    fn signature(&self) -> &str {
        self.kind.signature()
    }

    fn is_orderable(&self) -> bool {
        self.kind.supports_ordering()
    }

    fn accepts(&self, value: &Value) -> bool {
        value.kind() == self.kind
    }

    fn comparison_operator(&self) -> Result<ComparisonOperator, InternalError> {
        if !self.kind.supports_ordering() {
            return Err(self.unsupported(OperatorKind::Comparison));
        }

        Ok(Arc::new(|left: &Value, right: &Value| {
            Value::strict_order_cmp(left, right)
                .ok_or_else(|| mismatch(OperatorKind::Comparison, left, right))
        }))
    }

    fn equal_operator(&self) -> Result<EqualOperator, InternalError> {
        if !self.kind.supports_equality() {
            return Err(self.unsupported(OperatorKind::Equal));
        }

        Ok(Arc::new(|left: &Value, right: &Value| {
            Value::strict_eq(left, right).ok_or_else(|| mismatch(OperatorKind::Equal, left, right))
        }))
    }

    fn hash_operator(&self) -> Result<HashOperator, InternalError> {
        if !self.kind.supports_equality() {
            return Err(self.unsupported(OperatorKind::Hash));
        }

        Ok(Arc::new(|value: &Value| Ok(hash_value(value))))
    }

    fn is_nan(&self, value: &Value) -> bool {
        self.kind.has_nan() && value.is_nan()
    }

    fn display_value(&self, value: &Value, ctx: &DisplayContext) -> Result<String, OperatorError> {
        match value {
            Value::Blob(bytes) => {
                let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
                Ok(format!("X'{hex}'"))
            }
            Value::Bool(b) => Ok(b.to_string()),
            Value::Date(days) => display_date(*days),
            Value::Float32(f) => Ok(f.to_string()),
            Value::Float64(f) => Ok(f.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Int128(i) => Ok(i.to_string()),
            Value::Text(s) => Ok(s.clone()),
            Value::Timestamp(micros) => display_timestamp(*micros, *ctx),
            Value::Uint(u) => Ok(u.to_string()),
            Value::Uint128(u) => Ok(u.to_string()),
            Value::Unit => Ok("()".to_string()),
        }
    }
}

fn display_fault(message: impl Into<String>) -> OperatorError {
    OperatorError::evaluation(OperatorKind::Display, message)
}

fn display_date(days: i32) -> Result<String, OperatorError> {
    let julian = days
        .checked_add(UNIX_EPOCH_JULIAN_DAY)
        .ok_or_else(|| display_fault(format!("date {days} out of range")))?;
    let date = Date::from_julian_day(julian).map_err(|err| display_fault(err.to_string()))?;

    Ok(date.to_string())
}

fn display_timestamp(micros: i64, ctx: DisplayContext) -> Result<String, OperatorError> {
    let offset = UtcOffset::from_whole_seconds(ctx.utc_offset_seconds())
        .map_err(|err| display_fault(err.to_string()))?;
    let instant = OffsetDateTime::from_unix_timestamp_nanos(i128::from(micros) * NANOS_PER_MICRO)
        .map_err(|err| display_fault(err.to_string()))?;
    let local = instant
        .checked_to_offset(offset)
        .ok_or_else(|| display_fault(format!("timestamp {micros} out of range at offset")))?;

    local
        .format(&Rfc3339)
        .map_err(|err| display_fault(err.to_string()))
}
