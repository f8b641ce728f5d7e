mod compare;
mod hash;
mod tag;


use rangepoint_primitives::ScalarKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-exports
pub use hash::{VALUE_HASH_SEED, VALUE_HASH_VERSION, hash_value};
pub use tag::ValueTag;

///
/// Value
///
/// Native scalar carried by a boundary point.
///
/// Date      → days since the unix epoch.
/// Timestamp → microseconds since the unix epoch.
/// Unit      → placeholder scalar; equality-only, never orderable.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Date(i32),
    Float32(f32),
    Float64(f64),
    Int(i64),
    Int128(i128),
    Text(String),
    Timestamp(i64),
    Uint(u64),
    Uint128(u128),
    Unit,
}

impl Value {
    /// Scalar kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Blob(_) => ScalarKind::Blob,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Date(_) => ScalarKind::Date,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Int(_) => ScalarKind::Int,
            Self::Int128(_) => ScalarKind::Int128,
            Self::Text(_) => ScalarKind::Text,
            Self::Timestamp(_) => ScalarKind::Timestamp,
            Self::Uint(_) => ScalarKind::Uint,
            Self::Uint128(_) => ScalarKind::Uint128,
            Self::Unit => ScalarKind::Unit,
        }
    }

    /// Stable canonical variant tag used by hashing and diagnostics.
    #[must_use]
    pub const fn canonical_tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    /// Returns true for a float carrying NaN.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        match self {
            Self::Float32(f) => f.is_nan(),
            Self::Float64(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Strict comparator for identical orderable variants.
    ///
    /// Returns `None` for mismatched or non-orderable variants, and for NaN.
    #[must_use]
    pub fn strict_order_cmp(left: &Self, right: &Self) -> Option<Ordering> {
        compare::strict_order_cmp(left, right)
    }

    /// Strict equality for identical variants.
    ///
    /// Floats use IEEE equality, so `-0.0 == 0.0`.
    /// Returns `None` for mismatched variants.
    #[must_use]
    pub fn strict_eq(left: &Self, right: &Self) -> Option<bool> {
        compare::strict_eq(left, right)
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool    => Bool,
    f32     => Float32,
    f64     => Float64,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    i128    => Int128,
    &str    => Text,
    String  => Text,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
    u128    => Uint128,
    Vec<u8> => Blob,
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}
