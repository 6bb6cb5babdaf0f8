// SPDX-License-Identifier: MPL-2.0
//! Interaction newtypes.
//!
//! This module provides type-safe wrappers for photo review values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Pinch zoom scale bounds (1x to 3x).
pub mod zoom_bounds {
    /// Neutral scale, also the minimum.
    pub const MIN_SCALE: f32 = 1.0;
    /// Maximum scale.
    pub const MAX_SCALE: f32 = 3.0;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale of the primary photo, guaranteed to be within 1x–3x.
///
/// Out-of-range pinch values are clipped, never rejected. A NaN scale
/// (reported by some touch stacks on degenerate pinches) maps to neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Neutral zoom.
    pub const NEUTRAL: Self = Self(zoom_bounds::MIN_SCALE);

    /// Creates a new zoom scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::NEUTRAL;
        }
        Self(scale.clamp(zoom_bounds::MIN_SCALE, zoom_bounds::MAX_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the photo is magnified beyond neutral.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > zoom_bounds::MIN_SCALE
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// =============================================================================
// PanOffset
// =============================================================================

/// Translation of the zoomed primary photo, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    /// No translation.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates an offset. Non-finite components map to 0.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    /// Returns true if the offset is exactly neutral.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Scales both axes by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

// =============================================================================
// Gesture Timing Bounds
// =============================================================================

/// Gesture timing bounds in milliseconds.
pub mod gesture_bounds {
    /// Minimum long-press hold.
    pub const MIN_LONG_PRESS_MS: u64 = 100;
    /// Maximum long-press hold.
    pub const MAX_LONG_PRESS_MS: u64 = 2000;
    /// Default long-press hold.
    pub const DEFAULT_LONG_PRESS_MS: u64 = 500;
    /// Minimum return-to-rest animation duration.
    pub const MIN_REST_MS: u64 = 50;
    /// Maximum return-to-rest animation duration.
    pub const MAX_REST_MS: u64 = 2000;
    /// Default return-to-rest animation duration.
    pub const DEFAULT_REST_MS: u64 = 300;
}

// =============================================================================
// LongPressDuration
// =============================================================================

/// Minimum hold before a press on the primary photo becomes a long-press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressDuration(u64);

impl LongPressDuration {
    /// Creates a new hold duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            gesture_bounds::MIN_LONG_PRESS_MS,
            gesture_bounds::MAX_LONG_PRESS_MS,
        ))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for LongPressDuration {
    fn default() -> Self {
        Self(gesture_bounds::DEFAULT_LONG_PRESS_MS)
    }
}

// =============================================================================
// RestDuration
// =============================================================================

/// Duration of the animated return to neutral zoom and offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestDuration(u64);

impl RestDuration {
    /// Creates a new animation duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(gesture_bounds::MIN_REST_MS, gesture_bounds::MAX_REST_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RestDuration {
    fn default() -> Self {
        Self(gesture_bounds::DEFAULT_REST_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
