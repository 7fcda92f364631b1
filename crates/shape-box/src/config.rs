//! Box configuration

use serde::{Deserialize, Serialize};

/// Default capacity used by [`BoxConfig::default`]
pub const DEFAULT_CAPACITY: usize = 16;

/// Construction parameters for a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Maximum number of slots
    pub capacity: usize,
    /// Fail construction on a zero capacity instead of storing it
    pub reject_zero_capacity: bool,
}

impl BoxConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With capacity
    #[inline]
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// With zero-capacity rejection
    #[inline]
    #[must_use]
    pub fn with_reject_zero_capacity(mut self, reject: bool) -> Self {
        self.reject_zero_capacity = reject;
        self
    }
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            reject_zero_capacity: false,
        }
    }
}
