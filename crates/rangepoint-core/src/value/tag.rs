use crate::value::Value;

///
/// ValueTag
///
/// Stable canonical value-variant tag used by hashing and diagnostics.
///
/// IMPORTANT:
/// Tag values feed value hashes and must remain fixed.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Blob = 1,
    Bool = 2,
    Date = 3,
    Float32 = 4,
    Float64 = 5,
    Int = 6,
    Int128 = 7,
    Text = 8,
    Timestamp = 9,
    Uint = 10,
    Uint128 = 11,
    Unit = 12,
}

impl ValueTag {
    /// Stable hash byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::Int128 => "Int128",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
            Self::Uint => "Uint",
            Self::Uint128 => "Uint128",
            Self::Unit => "Unit",
        }
    }
}

/// Stable canonical variant tag used by hash encodings.
#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Blob(_) => ValueTag::Blob,
        Value::Bool(_) => ValueTag::Bool,
        Value::Date(_) => ValueTag::Date,
        Value::Float32(_) => ValueTag::Float32,
        Value::Float64(_) => ValueTag::Float64,
        Value::Int(_) => ValueTag::Int,
        Value::Int128(_) => ValueTag::Int128,
        Value::Text(_) => ValueTag::Text,
        Value::Timestamp(_) => ValueTag::Timestamp,
        Value::Uint(_) => ValueTag::Uint,
        Value::Uint128(_) => ValueTag::Uint128,
        Value::Unit => ValueTag::Unit,
    }
}
