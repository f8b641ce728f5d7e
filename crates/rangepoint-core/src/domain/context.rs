///
/// DisplayContext
///
/// Session-like settings passed through to domain display.
/// Boundary points never inspect it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DisplayContext {
    utc_offset_seconds: i32,
}

impl DisplayContext {
    #[must_use]
    pub const fn utc() -> Self {
        Self {
            utc_offset_seconds: 0,
        }
    }

    /// Context rendering temporal values at a fixed UTC offset.
    #[must_use]
    pub const fn with_utc_offset_seconds(utc_offset_seconds: i32) -> Self {
        Self { utc_offset_seconds }
    }

    #[must_use]
    pub const fn utc_offset_seconds(self) -> i32 {
        self.utc_offset_seconds
    }
}
