#[macro_use]
mod macros;

///
/// ScalarKind
///
/// Canonical scalar kind used for shared capability metadata.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Blob,
    Bool,
    Date,
    Float32,
    Float64,
    Int,
    Int128,
    Text,
    Timestamp,
    Uint,
    Uint128,
    Unit,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    /// Return whether this scalar supports equality (and therefore hashing).
    #[must_use]
    pub const fn supports_equality(self) -> bool {
        self.metadata().supports_equality
    }

    /// Return whether this scalar supports ordering.
    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        self.metadata().supports_ordering
    }

    /// Return whether this scalar has a not-a-number representation.
    #[must_use]
    pub const fn has_nan(self) -> bool {
        self.metadata().has_nan
    }

    /// Stable lowercase type signature used to identify domains.
    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Int => "int",
            Self::Int128 => "int128",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uint => "uint",
            Self::Uint128 => "uint128",
            Self::Unit => "unit",
        }
    }
}

///
/// ScalarMetadata
///
/// Capability metadata shared across the core.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub supports_equality: bool,
    pub supports_ordering: bool,
    pub has_nan: bool,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 12] = scalar_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
