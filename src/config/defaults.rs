// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the check-in core. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capture**: Lens-switch settle delay bounds
//! - **Zoom**: Pinch zoom scale bounds
//! - **Gestures**: Long-press hold and return-to-rest animation timings
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Capture Defaults
// ==========================================================================

/// Default wait between switching to the front lens and capturing (in ms).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1500;

/// Shortest settle delay accepted. Consumer hardware is not ready sooner.
pub const MIN_SETTLE_DELAY_MS: u64 = 800;

/// Longest settle delay accepted (in ms).
pub const MAX_SETTLE_DELAY_MS: u64 = 5000;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Neutral zoom scale (photo fills its frame).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum pinch zoom scale.
pub const MAX_ZOOM_SCALE: f32 = 3.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum hold before a press on the primary photo counts as a long-press.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Minimum configurable long-press hold (in ms).
pub const MIN_LONG_PRESS_MS: u64 = 100;

/// Maximum configurable long-press hold (in ms).
pub const MAX_LONG_PRESS_MS: u64 = 2000;

/// Default duration of the return-to-rest animation after a pinch or pan.
pub const DEFAULT_REST_ANIMATION_MS: u64 = 300;

/// Minimum return-to-rest animation duration (in ms).
pub const MIN_REST_ANIMATION_MS: u64 = 50;

/// Maximum return-to-rest animation duration (in ms).
pub const MAX_REST_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Settle delay validation
    assert!(MIN_SETTLE_DELAY_MS >= 800);
    assert!(MAX_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);

    // Zoom validation
    assert!(MIN_ZOOM_SCALE == 1.0);
    assert!(MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);

    // Gesture validation
    assert!(MIN_LONG_PRESS_MS > 0);
    assert!(DEFAULT_LONG_PRESS_MS >= MIN_LONG_PRESS_MS);
    assert!(DEFAULT_LONG_PRESS_MS <= MAX_LONG_PRESS_MS);
    assert!(MIN_REST_ANIMATION_MS > 0);
    assert!(DEFAULT_REST_ANIMATION_MS >= MIN_REST_ANIMATION_MS);
    assert!(DEFAULT_REST_ANIMATION_MS <= MAX_REST_ANIMATION_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
