// SPDX-License-Identifier: MPL-2.0
//! Capture newtypes.
//!
//! This module provides type-safe wrappers for capture timing values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Settle Delay Bounds
// =============================================================================

/// Settle delay bounds (800 ms to 5000 ms).
pub mod settle_delay_bounds {
    /// Minimum settle delay in milliseconds.
    pub const MIN_MS: u64 = 800;
    /// Maximum settle delay in milliseconds.
    pub const MAX_MS: u64 = 5000;
    /// Default settle delay in milliseconds.
    pub const DEFAULT_MS: u64 = 1500;
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Wait between switching the lens to the front camera and capturing with it.
///
/// A lens switch is not synchronously ready on consumer camera hardware, so the
/// sequencer never captures the front photo before this delay elapses. Values
/// below the minimum are clamped up rather than rejected.
///
/// # Example
///
/// ```
/// use goalsy_checkin::domain::capture::SettleDelay;
///
/// let delay = SettleDelay::new(200);
/// assert_eq!(delay.millis(), 800); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDelay(u64);

impl SettleDelay {
    /// Creates a new settle delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(settle_delay_bounds::MIN_MS, settle_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(settle_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// PartialCapturePolicy
// =============================================================================

/// What happens to an already captured back photo when the front capture fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialCapturePolicy {
    /// Drop both photos; the next attempt starts from scratch.
    #[default]
    DiscardAll,
    /// Keep the back photo in the session until the next attempt replaces it.
    KeepBack,
}
