// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that platform adapters implement.
//! These traits use only domain types, ensuring the check-in core remains
//! independent of concrete camera stacks and backends.
//!
//! # Available Ports
//!
//! - [`camera`]: Still capture with a selectable lens facing
//! - [`profile`]: User profile lookup and maintenance
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Asynchronous operations return `impl Future`; the core runs them on a
//!   single-threaded event loop, so no `Send` bound is required
//! - Methods return `Result` with port-level error types

pub mod camera;
pub mod profile;

// Re-export main types for convenience
pub use camera::{CaptureDevice, DeviceError, PermissionStatus};
pub use profile::{ProfileDirectory, ProfileError};
