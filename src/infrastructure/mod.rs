// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated_camera`]: scripted camera (implements [`CaptureDevice`])
//! - [`memory_profiles`]: in-memory profile store (implements [`ProfileDirectory`])
//!
//! [`CaptureDevice`]: crate::application::port::CaptureDevice
//! [`ProfileDirectory`]: crate::application::port::ProfileDirectory

pub mod memory_profiles;
pub mod simulated_camera;

pub use memory_profiles::InMemoryProfileDirectory;
pub use simulated_camera::{CameraCall, ScriptedCamera};
