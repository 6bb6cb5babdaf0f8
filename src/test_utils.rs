// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons on zoom and pan values.
//!
//! Animated values are computed with floats, so tests compare them with the
//! `approx` macros instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::interaction::PanOffset;

/// Tolerance for values that should be exactly neutral after an animation.
pub const F32_EPSILON: f32 = 1e-6;

/// Asserts that two pan offsets are equal within `epsilon` on both axes.
#[track_caller]
pub fn assert_offset_near(actual: PanOffset, expected: PanOffset, epsilon: f32) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}
