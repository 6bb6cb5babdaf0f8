// SPDX-License-Identifier: MPL-2.0
//! Capture domain types.
//!
//! Value objects describing a dual-camera check-in capture: lens facing,
//! captured image handles and the transient capture session.

pub mod newtypes;
pub mod session;

pub use newtypes::{settle_delay_bounds, PartialCapturePolicy, SettleDelay};
pub use session::{CaptureSession, CapturedPair, Facing, ImageHandle};
