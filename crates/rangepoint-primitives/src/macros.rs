///
/// Scalar Kind Registry
///
/// Single source of truth for scalar capability metadata.
///

// NOTE: Only floats carry a NaN representation. Blob and Unit support
// equality but are never orderable, so they can't back a boundary point.
#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Blob,
                supports_equality = true,
                supports_ordering = false,
                has_nan = false
            ),
            (
                Bool,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Date,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Float32,
                supports_equality = true,
                supports_ordering = true,
                has_nan = true
            ),
            (
                Float64,
                supports_equality = true,
                supports_ordering = true,
                has_nan = true
            ),
            (
                Int,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Int128,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Text,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Timestamp,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Uint,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Uint128,
                supports_equality = true,
                supports_ordering = true,
                has_nan = false
            ),
            (
                Unit,
                supports_equality = true,
                supports_ordering = false,
                has_nan = false
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, supports_equality = $supports_equality:expr, supports_ordering = $supports_ordering:expr, has_nan = $has_nan:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    supports_equality: $supports_equality,
                    supports_ordering: $supports_ordering,
                    has_nan: $has_nan,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, supports_equality = $supports_equality:expr, supports_ordering = $supports_ordering:expr, has_nan = $has_nan:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
