// SPDX-License-Identifier: MPL-2.0
//! Long-press state management
//!
//! Tracks a press on the primary photo through its whole lifecycle. The
//! long-press is momentary: it is active from the moment the minimum hold
//! elapses until the finger lifts.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LongPressState {
    min_hold: Duration,
    pressed_at: Option<Instant>,
    active: bool,
}

impl LongPressState {
    #[must_use]
    pub fn new(min_hold: Duration) -> Self {
        Self {
            min_hold,
            pressed_at: None,
            active: false,
        }
    }

    /// A finger went down on the surface.
    pub fn press(&mut self, at: Instant) {
        if self.pressed_at.is_none() {
            self.pressed_at = Some(at);
            self.active = false;
        }
    }

    /// Promotes a held press once the minimum hold elapsed.
    ///
    /// Returns true exactly once per press, when the long-press begins.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pressed_at {
            Some(pressed_at)
                if !self.active && now.saturating_duration_since(pressed_at) >= self.min_hold =>
            {
                self.active = true;
                true
            }
            _ => false,
        }
    }

    /// The finger lifted or the press was cancelled.
    ///
    /// Returns true if an active long-press ended.
    pub fn release(&mut self) -> bool {
        let was_active = self.active;
        self.pressed_at = None;
        self.active = false;
        was_active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(500);

    #[test]
    fn short_press_never_activates() {
        let start = Instant::now();
        let mut state = LongPressState::new(HOLD);
        state.press(start);
        assert!(!state.poll(start + Duration::from_millis(499)));
        assert!(!state.release());
        assert!(!state.is_pressed());
    }

    #[test]
    fn held_press_activates_once_and_ends_on_release() {
        let start = Instant::now();
        let mut state = LongPressState::new(HOLD);
        state.press(start);

        assert!(state.poll(start + HOLD));
        assert!(state.is_active());
        assert!(!state.poll(start + HOLD * 2));

        assert!(state.release());
        assert!(!state.is_active());
    }

    #[test]
    fn second_finger_does_not_restart_hold() {
        let start = Instant::now();
        let mut state = LongPressState::new(HOLD);
        state.press(start);
        state.press(start + Duration::from_millis(300));
        assert!(state.poll(start + HOLD));
    }

    #[test]
    fn poll_without_press_does_nothing() {
        let mut state = LongPressState::new(HOLD);
        assert!(!state.poll(Instant::now()));
    }
}
