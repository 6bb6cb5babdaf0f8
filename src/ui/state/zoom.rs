// SPDX-License-Identifier: MPL-2.0
//! Pinch zoom state management
//!
//! Maps the pinch gesture's scale onto the primary photo, clamped to
//! 1x–3x, and returns to neutral with an animation when the pinch ends.

use super::animation::RestAnimation;
use crate::domain::interaction::ZoomScale;
use std::time::{Duration, Instant};

/// Manages the zoom applied by the pinch gesture.
#[derive(Debug, Clone, Default)]
pub struct PinchState {
    scale: ZoomScale,
    /// Return-to-rest animation and the scale it started from
    release: Option<(RestAnimation, ZoomScale)>,
}

impl PinchState {
    /// Applies the pinch gesture's current scale. Cancels a running release.
    pub fn update(&mut self, raw_scale: f32) {
        self.release = None;
        self.scale = ZoomScale::new(raw_scale);
    }

    /// Ends the pinch and starts animating back to neutral.
    pub fn end(&mut self, now: Instant, duration: Duration) {
        if self.scale.is_zoomed() {
            self.release = Some((RestAnimation::start(now, duration), self.scale));
        }
    }

    /// Advances the release animation. Returns true if the scale changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some((animation, from)) = self.release else {
            return false;
        };
        if animation.is_settled(now) {
            self.scale = ZoomScale::NEUTRAL;
            self.release = None;
        } else {
            let excess = from.value() - ZoomScale::NEUTRAL.value();
            self.scale = ZoomScale::new(ZoomScale::NEUTRAL.value() + excess * animation.remaining(now));
        }
        true
    }

    /// Snaps back to neutral without animation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.release.is_some()
    }
}
