// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Handles drag interaction for moving around a zoomed primary photo.

use super::animation::RestAnimation;
use crate::domain::interaction::PanOffset;
use std::time::{Duration, Instant};

/// Manages the pan offset of the primary photo
#[derive(Debug, Clone, Default)]
pub struct PanState {
    offset: PanOffset,
    /// Return-to-rest animation and the offset it started from
    release: Option<(RestAnimation, PanOffset)>,
}

impl PanState {
    /// Applies the drag translation. Ignored unless the photo is zoomed.
    ///
    /// Returns true if the offset changed.
    pub fn update(&mut self, translation: PanOffset, zoomed: bool) -> bool {
        if !zoomed {
            return false;
        }
        self.release = None;
        // Fields are public, so re-validate literals built by the host.
        self.offset = PanOffset::new(translation.x, translation.y);
        true
    }

    /// Ends the drag and starts animating back to the origin.
    pub fn end(&mut self, now: Instant, duration: Duration) {
        if !self.offset.is_zero() {
            self.release = Some((RestAnimation::start(now, duration), self.offset));
        }
    }

    /// Advances the release animation. Returns true if the offset changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some((animation, from)) = self.release else {
            return false;
        };
        if animation.is_settled(now) {
            self.offset = PanOffset::ZERO;
            self.release = None;
        } else {
            self.offset = from.scaled(animation.remaining(now));
        }
        true
    }

    /// Snaps back to the origin without animation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn offset(&self) -> PanOffset {
        self.offset
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.release.is_some()
    }
}
