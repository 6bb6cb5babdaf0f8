// SPDX-License-Identifier: MPL-2.0
//! Dual-camera check-in screen.
//!
//! The screen captures a back and a front photo in one guided sequence, then
//! lets the user swap, zoom and pan the pair before confirming.

pub mod capture;
pub mod component;
pub mod gestures;
pub mod interaction;
pub mod view;

pub use capture::{CaptureSequencer, SequenceOutcome};
pub use component::{CheckIn, CloseReason, Effect, Message, Phase};
pub use gestures::{GestureEvent, GestureSet};
pub use interaction::InteractionState;
pub use view::ViewModel;
