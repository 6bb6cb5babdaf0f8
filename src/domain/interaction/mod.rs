// SPDX-License-Identifier: MPL-2.0
//! Photo review interaction types.
//!
//! This module contains value objects for the review screen that are
//! independent of any input or rendering framework.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{
    gesture_bounds, zoom_bounds, LongPressDuration, PanOffset, RestDuration, ZoomScale,
};
