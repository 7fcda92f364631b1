//! Error types for the shape box
//!
//! Provides the typed error surface for:
//! - Capacity violations on insert and index access
//! - Vacant interior slots
//! - Bulk removals that matched nothing
//!
//! A lookup that lands beyond occupancy but within capacity is not an
//! error; it surfaces as `Ok(None)`.

/// Main box error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    /// Index or insert would exceed the fixed capacity
    #[error("index {index} out of range for capacity {capacity}")]
    OutOfRange {
        /// Requested index (occupancy for inserts)
        index: usize,
        /// Box capacity
        capacity: usize,
    },

    /// Slot is within occupancy but holds no shape
    #[error("no shape at index {index}")]
    NotFound {
        /// Index of the vacant slot
        index: usize,
    },

    /// Bulk filter matched no shapes
    #[error("nothing removed")]
    NothingRemoved,

    /// Configuration asked for a zero capacity to be rejected
    #[error("capacity must be positive")]
    ZeroCapacity,
}

impl BoxError {
    /// Create out of range error
    #[inline]
    #[must_use]
    pub fn out_of_range(index: usize, capacity: usize) -> Self {
        Self::OutOfRange { index, capacity }
    }

    /// Check if error only reports that nothing happened
    ///
    /// `NothingRemoved` leaves the box intact and consistent.
    #[inline]
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::NothingRemoved)
    }

    /// Check if error was caused by a bad index or a full box
    #[inline]
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Result type alias for box operations
pub type BoxResult<T> = Result<T, BoxError>;
