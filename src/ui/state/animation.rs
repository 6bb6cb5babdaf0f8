// SPDX-License-Identifier: MPL-2.0
//! Return-to-rest animation timing.
//!
//! Gesture ends hand the zoom and pan values back to neutral over a short
//! ease-out curve. The animation is fire-and-forget: it is advanced by
//! `Tick(Instant)` messages and a new gesture simply drops it.

use std::time::{Duration, Instant};

/// Ease-out progress of a return to a neutral value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestAnimation {
    started_at: Instant,
    duration: Duration,
}

impl RestAnimation {
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Share of the initial distance still left to travel.
    ///
    /// Starts at 1.0 and reaches exactly 0.0 once `duration` has elapsed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            0.0
        } else {
            // Cubic ease-out
            let inv = 1.0 - t;
            inv * inv * inv
        }
    }

    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
