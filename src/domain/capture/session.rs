// SPDX-License-Identifier: MPL-2.0
//! Capture session types.

use std::fmt;
use std::sync::Arc;

/// Which physical lens the camera is configured to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Back,
    Front,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Back => write!(f, "back"),
            Facing::Front => write!(f, "front"),
        }
    }
}

/// Opaque reference to a captured still image.
///
/// Immutable once created; clones share the same underlying URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    /// Creates a handle from the URI reported by the camera.
    #[must_use]
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the image URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A matched back/front pair from one capture sequence.
///
/// Both fields are required, so review mode carrying a pair can never
/// exist with a missing photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPair {
    pub back: ImageHandle,
    pub front: ImageHandle,
}

/// Transient state of one check-in's capture attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSession {
    pub back: Option<ImageHandle>,
    pub front: Option<ImageHandle>,
    /// Completed sequences, successful or not. Skipped triggers do not count.
    pub attempt_count: u32,
    /// True only while a capture sequence is in flight.
    pub busy: bool,
}

impl CaptureSession {
    /// Returns the pair when both photos are present.
    #[must_use]
    pub fn pair(&self) -> Option<CapturedPair> {
        match (&self.back, &self.front) {
            (Some(back), Some(front)) => Some(CapturedPair {
                back: back.clone(),
                front: front.clone(),
            }),
            _ => None,
        }
    }

    /// Returns true when no photo is held and no attempt was made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.back.is_none() && self.front.is_none() && self.attempt_count == 0 && !self.busy
    }

    /// Drops both photos, keeping the attempt counter.
    pub fn discard_images(&mut self) {
        self.back = None;
        self.front = None;
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
