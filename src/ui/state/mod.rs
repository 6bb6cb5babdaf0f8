// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Per-gesture state for the photo review surface, kept apart from the
//! screen controller so each recognizer's bookkeeping stays independent.

pub mod animation;
pub mod drag;
pub mod press;
pub mod zoom;

// Re-export commonly used types for convenience
pub use animation::RestAnimation;
pub use drag::PanState;
pub use press::LongPressState;
pub use zoom::PinchState;
