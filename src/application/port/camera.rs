// SPDX-License-Identifier: MPL-2.0
//! Camera port definition.
//!
//! This module defines the [`CaptureDevice`] trait wrapping a physical camera
//! able to produce a still image for a requested lens facing.

use crate::domain::capture::{Facing, ImageHandle};
use std::fmt;
use std::future::Future;

// =============================================================================
// DeviceError
// =============================================================================

/// Errors reported by a camera while capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Camera permission was revoked while the screen was open.
    PermissionRevoked,

    /// The camera is in use by another capture or another app.
    Busy,

    /// The capture did not complete in time.
    Timeout,

    /// Any other hardware or driver failure.
    Hardware(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::PermissionRevoked => write!(f, "Camera permission revoked"),
            DeviceError::Busy => write!(f, "Camera is busy"),
            DeviceError::Timeout => write!(f, "Capture timed out"),
            DeviceError::Hardware(msg) => write!(f, "Camera hardware error: {msg}"),
        }
    }
}

impl std::error::Error for DeviceError {}

// =============================================================================
// PermissionStatus
// =============================================================================

/// Camera permission as currently known by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// The user has not been asked yet.
    #[default]
    Undetermined,
    /// The user refused access.
    Denied,
    Granted,
}

impl PermissionStatus {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

// =============================================================================
// CaptureDevice Trait
// =============================================================================

/// Port for a still camera with a switchable lens.
///
/// Implementations are driven from a single event loop. The camera is an
/// exclusive resource: only the capture sequencer calls [`set_facing`] and
/// [`capture`] while a sequence is running.
///
/// [`set_facing`]: CaptureDevice::set_facing
/// [`capture`]: CaptureDevice::capture
///
/// # Example
///
/// ```ignore
/// use goalsy_checkin::application::port::CaptureDevice;
/// use goalsy_checkin::domain::capture::Facing;
///
/// async fn selfie(camera: &impl CaptureDevice) {
///     camera.set_facing(Facing::Front);
///     // wait for the lens to settle before capturing...
///     match camera.capture().await {
///         Ok(image) => println!("captured {image}"),
///         Err(e) => eprintln!("capture failed: {e}"),
///     }
/// }
/// ```
pub trait CaptureDevice {
    /// Returns the permission status without prompting the user.
    fn permission(&self) -> PermissionStatus;

    /// Prompts the user for camera access. Resolves to `true` when granted.
    fn request_permission(&self) -> impl Future<Output = bool>;

    /// Issues a lens switch. The hardware may not be ready when this returns.
    fn set_facing(&self, facing: Facing);

    /// Captures a still image with the currently configured lens.
    fn capture(&self) -> impl Future<Output = Result<ImageHandle, DeviceError>>;
}
