//! Core runtime for rangepoint: boundary points on ordered value domains,
//! the domain capability they consume, and the scalar values they carry.
#![warn(unreachable_pub)]

pub mod block;
pub mod domain;
pub mod error;
pub mod point;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Multiplier used to fold a value hash into a point's shape hash.
pub const POINT_HASH_MULTIPLIER: u64 = 31;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        block::ValueBlock,
        domain::{DisplayContext, DomainRef, OrderedDomain, ScalarDomain},
        point::{BoundaryPoint, RangeEnd, Side},
        value::Value,
    };
    pub use rangepoint_primitives::ScalarKind;
}
