// SPDX-License-Identifier: MPL-2.0
//! Scripted adapter implementing the [`CaptureDevice`] port trait.
//!
//! [`ScriptedCamera`] replays a queue of capture outcomes and records every
//! call it receives, so the capture sequence can be driven without hardware.
//! Once the script is exhausted it keeps producing `sim://` images.
//!
//! # Example
//!
//! ```ignore
//! use goalsy_checkin::application::port::DeviceError;
//! use goalsy_checkin::infrastructure::ScriptedCamera;
//!
//! let camera = ScriptedCamera::new()
//!     .then_ok("file://back.jpg")
//!     .then_fail(DeviceError::Timeout);
//! ```
//!
//! [`CaptureDevice`]: crate::application::port::CaptureDevice

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use crate::application::port::{CaptureDevice, DeviceError, PermissionStatus};
use crate::domain::capture::{Facing, ImageHandle};

/// A call received by the camera, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraCall {
    RequestPermission,
    SetFacing(Facing),
    /// Capture issued while `facing` was configured.
    Capture {
        facing: Facing,
        at: tokio::time::Instant,
    },
}

/// Camera double driven by a script of outcomes.
#[derive(Debug)]
pub struct ScriptedCamera {
    permission: Cell<PermissionStatus>,
    grant_on_request: Cell<bool>,
    facing: Cell<Facing>,
    latency: Duration,
    script: RefCell<VecDeque<Result<ImageHandle, DeviceError>>>,
    generated: Cell<u32>,
    calls: RefCell<Vec<CameraCall>>,
}

impl Default for ScriptedCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedCamera {
    /// Creates a camera with permission granted and an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self {
            permission: Cell::new(PermissionStatus::Granted),
            grant_on_request: Cell::new(true),
            facing: Cell::new(Facing::Back),
            latency: Duration::ZERO,
            script: RefCell::new(VecDeque::new()),
            generated: Cell::new(0),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Sets the initial permission and whether a request grants it.
    #[must_use]
    pub fn with_permission(self, status: PermissionStatus, grant_on_request: bool) -> Self {
        self.permission.set(status);
        self.grant_on_request.set(grant_on_request);
        self
    }

    /// Delays every capture by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Appends a successful capture returning `uri`.
    #[must_use]
    pub fn then_ok(self, uri: &str) -> Self {
        self.push(Ok(ImageHandle::new(uri)));
        self
    }

    /// Appends a failing capture.
    #[must_use]
    pub fn then_fail(self, error: DeviceError) -> Self {
        self.push(Err(error));
        self
    }

    /// Appends an outcome to a camera already shared with a screen.
    pub fn push(&self, outcome: Result<ImageHandle, DeviceError>) {
        self.script.borrow_mut().push_back(outcome);
    }

    /// Simulates the user revoking access in system settings.
    pub fn revoke_permission(&self) {
        self.permission.set(PermissionStatus::Denied);
    }

    /// Currently configured lens.
    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing.get()
    }

    /// All calls received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<CameraCall> {
        self.calls.borrow().clone()
    }

    /// Only the capture calls, as `(facing, issued_at)`.
    #[must_use]
    pub fn captures(&self) -> Vec<(Facing, tokio::time::Instant)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                CameraCall::Capture { facing, at } => Some((*facing, *at)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: CameraCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next_outcome(&self, facing: Facing) -> Result<ImageHandle, DeviceError> {
        if !self.permission.get().is_granted() {
            return Err(DeviceError::PermissionRevoked);
        }
        if let Some(outcome) = self.script.borrow_mut().pop_front() {
            return outcome;
        }
        let n = self.generated.get() + 1;
        self.generated.set(n);
        Ok(ImageHandle::new(format!("sim://{facing}/{n}.jpg")))
    }
}

impl CaptureDevice for ScriptedCamera {
    fn permission(&self) -> PermissionStatus {
        self.permission.get()
    }

    async fn request_permission(&self) -> bool {
        self.record(CameraCall::RequestPermission);
        if self.grant_on_request.get() {
            self.permission.set(PermissionStatus::Granted);
        } else {
            self.permission.set(PermissionStatus::Denied);
        }
        self.permission.get().is_granted()
    }

    fn set_facing(&self, facing: Facing) {
        self.record(CameraCall::SetFacing(facing));
        self.facing.set(facing);
    }

    async fn capture(&self) -> Result<ImageHandle, DeviceError> {
        let facing = self.facing.get();
        self.record(CameraCall::Capture {
            facing,
            at: tokio::time::Instant::now(),
        });
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.next_outcome(facing)
    }
}
