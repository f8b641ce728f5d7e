use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Side
///
/// Infinitesimal offset of a boundary point relative to its value.
/// Declaration order is the tie-break order for equal values.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Side {
    /// Lower than the value, but infinitesimally close to it.
    #[display("BELOW")]
    Below,
    /// Exactly the value.
    #[display("EXACTLY")]
    Exactly,
    /// Higher than the value, but infinitesimally close to it.
    #[display("ABOVE")]
    Above,
}

impl Side {
    /// Next side up at the same value, if any.
    #[must_use]
    pub const fn greater_adjacent(self) -> Option<Self> {
        match self {
            Self::Below => Some(Self::Exactly),
            Self::Exactly => Some(Self::Above),
            Self::Above => None,
        }
    }

    /// Next side down at the same value, if any.
    #[must_use]
    pub const fn lesser_adjacent(self) -> Option<Self> {
        match self {
            Self::Below => None,
            Self::Exactly => Some(Self::Below),
            Self::Above => Some(Self::Exactly),
        }
    }

    /// Stable byte tag used by point hashing.
    #[must_use]
    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Below => 0,
            Self::Exactly => 1,
            Self::Above => 2,
        }
    }
}

///
/// RangeEnd
///
/// Which end of a range a standard-library bound describes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeEnd {
    Lower,
    Upper,
}
