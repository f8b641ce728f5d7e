//! Single-value container used to hold a boundary point's value.
//!
//! A block is a positional holder of scalar values. Boundary points only
//! accept blocks with exactly one position; the container itself allows any
//! count so callers can detect the misuse at point construction.

use crate::value::Value;
use std::sync::Arc;
use thiserror::Error as ThisError;

///
/// BlockError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum BlockError {
    #[error("position {position} out of range for block with {count} positions")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("expected exactly one position, found {count}")]
    NotSingleValue { count: usize },
}

///
/// ValueBlock
///
/// Immutable, cheaply cloneable sequence of positions.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ValueBlock {
    positions: Arc<[Value]>,
}

impl ValueBlock {
    /// Build a block holding one value.
    pub fn single(value: impl Into<Value>) -> Self {
        Self::from_values(vec![value.into()])
    }

    /// Build a block from owned positions.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            positions: values.into(),
        }
    }

    /// Build a block with no positions.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_values(Vec::new())
    }

    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn value_at(&self, position: usize) -> Result<&Value, BlockError> {
        self.positions
            .get(position)
            .ok_or(BlockError::PositionOutOfRange {
                position,
                count: self.positions.len(),
            })
    }

    /// Decode the sole position into its native value.
    pub fn to_native(&self) -> Result<&Value, BlockError> {
        let count = self.positions.len();
        if count != 1 {
            return Err(BlockError::NotSingleValue { count });
        }

        self.value_at(0)
    }
}

impl From<Value> for ValueBlock {
    fn from(value: Value) -> Self {
        Self::single(value)
    }
}

///
/// TESTS
///
