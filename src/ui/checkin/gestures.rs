// SPDX-License-Identifier: MPL-2.0
//! Gesture recognizer set for the photo review surfaces.
//!
//! Four recognizers run independently. Long-press, pinch and pan share the
//! primary photo and are recognized simultaneously: none of them cancels the
//! others, so a user can pinch while a long-press is held. Tap lives on the
//! secondary thumbnail, a disjoint surface, and never competes with them.

use super::interaction::InteractionState;
use crate::domain::interaction::{LongPressDuration, PanOffset, RestDuration};
use crate::ui::state::{LongPressState, PanState, PinchState};
use std::time::{Duration, Instant};

/// Recognizer callbacks and raw pointer events from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Finger down on the secondary thumbnail.
    SecondaryDown,
    /// Finger up on the secondary thumbnail.
    SecondaryUp,
    /// Touch on the secondary thumbnail was stolen or left the surface.
    SecondaryCancel,
    /// Finger down on the primary photo.
    PrimaryDown(Instant),
    /// Last finger up on the primary photo, or the touch was cancelled.
    PrimaryUp,
    /// Pinch scale relative to the start of the pinch.
    PinchChanged(f32),
    PinchEnded(Instant),
    /// Drag translation relative to the start of the pan.
    PanChanged(PanOffset),
    PanEnded(Instant),
    /// Frame tick driving long-press promotion and return-to-rest animations.
    Tick(Instant),
}

/// Effects produced by gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// Zoom, pan or secondary visibility changed.
    InteractionChanged,
    /// Primary and secondary photos were swapped.
    Swapped,
}

/// Tap on the secondary thumbnail.
#[derive(Debug, Clone, Default)]
struct TapRecognizer {
    pressed: bool,
}

impl TapRecognizer {
    fn down(&mut self) {
        self.pressed = true;
    }

    /// Returns true if a tap completed.
    fn up(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }

    fn cancel(&mut self) {
        self.pressed = false;
    }
}

/// All recognizers attached to the review screen.
#[derive(Debug, Clone)]
pub struct GestureSet {
    tap: TapRecognizer,
    long_press: LongPressState,
    pinch: PinchState,
    pan: PanState,
    rest: Duration,
}

impl GestureSet {
    #[must_use]
    pub fn new(long_press: LongPressDuration, rest: RestDuration) -> Self {
        Self {
            tap: TapRecognizer::default(),
            long_press: LongPressState::new(long_press.as_duration()),
            pinch: PinchState::default(),
            pan: PanState::default(),
            rest: rest.as_duration(),
        }
    }

    /// Feeds one event to the recognizers and applies the result to `interaction`.
    pub fn handle(&mut self, event: GestureEvent, interaction: &mut InteractionState) -> Effect {
        let effect = match event {
            GestureEvent::SecondaryDown => {
                self.tap.down();
                Effect::None
            }
            GestureEvent::SecondaryUp => {
                if self.tap.up() && interaction.secondary_visible() {
                    interaction.toggle_swap();
                    Effect::Swapped
                } else {
                    Effect::None
                }
            }
            GestureEvent::SecondaryCancel => {
                self.tap.cancel();
                Effect::None
            }
            GestureEvent::PrimaryDown(at) => {
                self.long_press.press(at);
                Effect::None
            }
            GestureEvent::PrimaryUp => {
                if self.long_press.release() {
                    interaction.set_long_press(false);
                    Effect::InteractionChanged
                } else {
                    Effect::None
                }
            }
            GestureEvent::PinchChanged(scale) => {
                self.pinch.update(scale);
                interaction.set_zoom(self.pinch.scale());
                Effect::InteractionChanged
            }
            GestureEvent::PinchEnded(now) => {
                self.pinch.end(now, self.rest);
                Effect::None
            }
            GestureEvent::PanChanged(translation) => {
                if self.pan.update(translation, interaction.zoom().is_zoomed()) {
                    interaction.set_pan(self.pan.offset());
                    Effect::InteractionChanged
                } else {
                    Effect::None
                }
            }
            GestureEvent::PanEnded(now) => {
                self.pan.end(now, self.rest);
                Effect::None
            }
            GestureEvent::Tick(now) => self.tick(now, interaction),
        };
        self.sync_pan(interaction);
        // A hidden thumbnail can not be tapped.
        if !interaction.secondary_visible() {
            self.tap.cancel();
        }
        effect
    }

    fn tick(&mut self, now: Instant, interaction: &mut InteractionState) -> Effect {
        let mut changed = false;
        if self.long_press.poll(now) {
            interaction.set_long_press(true);
            changed = true;
        }
        if self.pinch.tick(now) {
            interaction.set_zoom(self.pinch.scale());
            changed = true;
        }
        if self.pan.tick(now) {
            interaction.set_pan(self.pan.offset());
            changed = true;
        }
        if changed {
            Effect::InteractionChanged
        } else {
            Effect::None
        }
    }

    // Pan has no meaning at neutral zoom; drop any stale offset or animation.
    fn sync_pan(&mut self, interaction: &InteractionState) {
        if !interaction.zoom().is_zoomed() && (self.pan.is_animating() || !self.pan.offset().is_zero()) {
            self.pan.reset();
        }
    }

    /// Returns true while a held press or a return-to-rest animation needs ticks.
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        (self.long_press.is_pressed() && !self.long_press.is_active())
            || self.pinch.is_animating()
            || self.pan.is_animating()
    }

    pub fn reset(&mut self) {
        self.tap.cancel();
        self.long_press.release();
        self.pinch.reset();
        self.pan.reset();
    }
}

impl Default for GestureSet {
    fn default() -> Self {
        Self::new(LongPressDuration::default(), RestDuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interaction::ZoomScale;
    use crate::test_utils::assert_abs_diff_eq;

    fn setup() -> (GestureSet, InteractionState) {
        (GestureSet::default(), InteractionState::default())
    }

    #[test]
    fn tap_on_secondary_toggles_swap() {
        let (mut gestures, mut state) = setup();
        gestures.handle(GestureEvent::SecondaryDown, &mut state);
        let effect = gestures.handle(GestureEvent::SecondaryUp, &mut state);
        assert_eq!(effect, Effect::Swapped);
        assert!(state.swapped());

        gestures.handle(GestureEvent::SecondaryDown, &mut state);
        gestures.handle(GestureEvent::SecondaryUp, &mut state);
        assert!(!state.swapped());
    }

    #[test]
    fn cancelled_tap_does_not_swap() {
        let (mut gestures, mut state) = setup();
        gestures.handle(GestureEvent::SecondaryDown, &mut state);
        gestures.handle(GestureEvent::SecondaryCancel, &mut state);
        assert_eq!(
            gestures.handle(GestureEvent::SecondaryUp, &mut state),
            Effect::None
        );
        assert!(!state.swapped());
    }

    #[test]
    fn tap_pending_while_thumbnail_hides_does_not_swap() {
        let (mut gestures, mut state) = setup();
        gestures.handle(GestureEvent::SecondaryDown, &mut state);
        gestures.handle(GestureEvent::PinchChanged(2.5), &mut state);
        assert!(!state.secondary_visible());

        let effect = gestures.handle(GestureEvent::SecondaryUp, &mut state);
        assert_eq!(effect, Effect::None);
        assert!(!state.swapped());
        assert_abs_diff_eq!(state.zoom().value(), 2.5);
    }

    #[test]
    fn tap_does_not_survive_long_press_round_trip() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::SecondaryDown, &mut state);
        gestures.handle(GestureEvent::PrimaryDown(start), &mut state);
        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(500)), &mut state);
        gestures.handle(GestureEvent::PrimaryUp, &mut state);
        assert!(state.secondary_visible());

        assert_eq!(
            gestures.handle(GestureEvent::SecondaryUp, &mut state),
            Effect::None
        );
        assert!(!state.swapped());
    }

    #[test]
    fn long_press_hides_secondary_only_while_held() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::PrimaryDown(start), &mut state);
        assert!(gestures.wants_ticks());

        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(200)), &mut state);
        assert!(state.secondary_visible());

        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(500)), &mut state);
        assert!(!state.secondary_visible());
        assert!(state.long_press_held());

        gestures.handle(GestureEvent::PrimaryUp, &mut state);
        assert!(state.secondary_visible());
        assert!(!gestures.wants_ticks());
    }

    #[test]
    fn pinch_clamps_and_hides_secondary() {
        let (mut gestures, mut state) = setup();
        for raw in [-1.0, 0.0, 0.5, 1.0, 2.2, 3.0, 9.0, f32::NAN] {
            gestures.handle(GestureEvent::PinchChanged(raw), &mut state);
            let scale = state.zoom().value();
            assert!((1.0..=3.0).contains(&scale), "raw={raw} scale={scale}");
        }
        gestures.handle(GestureEvent::PinchChanged(2.0), &mut state);
        assert!(!state.secondary_visible());
    }

    #[test]
    fn pinch_end_returns_to_rest_then_shows_secondary() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::PinchChanged(2.8), &mut state);
        gestures.handle(GestureEvent::PinchEnded(start), &mut state);
        assert!(gestures.wants_ticks());

        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(100)), &mut state);
        assert!(state.zoom().is_zoomed());
        assert!(!state.secondary_visible());

        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(300)), &mut state);
        assert_eq!(state.zoom(), ZoomScale::NEUTRAL);
        assert!(state.secondary_visible());
        assert!(!gestures.wants_ticks());
    }

    #[test]
    fn pan_only_moves_zoomed_photo() {
        let (mut gestures, mut state) = setup();
        let effect = gestures.handle(GestureEvent::PanChanged(PanOffset::new(30.0, 0.0)), &mut state);
        assert_eq!(effect, Effect::None);
        assert!(state.pan().is_zero());

        gestures.handle(GestureEvent::PinchChanged(2.0), &mut state);
        gestures.handle(GestureEvent::PanChanged(PanOffset::new(30.0, -12.0)), &mut state);
        assert_eq!(state.pan(), PanOffset::new(30.0, -12.0));
    }

    #[test]
    fn pan_end_animates_back_to_origin() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::PinchChanged(2.0), &mut state);
        gestures.handle(GestureEvent::PanChanged(PanOffset::new(40.0, 20.0)), &mut state);
        gestures.handle(GestureEvent::PanEnded(start), &mut state);

        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(300)), &mut state);
        assert!(state.pan().is_zero());
        assert_abs_diff_eq!(state.zoom().value(), 2.0);
    }

    #[test]
    fn simultaneous_pinch_and_long_press_do_not_cancel_each_other() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::PrimaryDown(start), &mut state);
        gestures.handle(GestureEvent::PinchChanged(1.5), &mut state);
        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(600)), &mut state);

        assert!(state.long_press_held());
        assert!(state.zoom().is_zoomed());

        // Ending the pinch keeps the long-press; the secondary stays hidden
        gestures.handle(GestureEvent::PinchEnded(start + Duration::from_millis(700)), &mut state);
        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(1100)), &mut state);
        assert_eq!(state.zoom(), ZoomScale::NEUTRAL);
        assert!(!state.secondary_visible());

        gestures.handle(GestureEvent::PrimaryUp, &mut state);
        assert!(state.secondary_visible());
    }

    #[test]
    fn zoom_settling_drops_pan_animation() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::PinchChanged(3.0), &mut state);
        gestures.handle(GestureEvent::PanChanged(PanOffset::new(50.0, 50.0)), &mut state);
        gestures.handle(GestureEvent::PinchEnded(start), &mut state);
        gestures.handle(GestureEvent::Tick(start + Duration::from_millis(300)), &mut state);

        assert!(state.pan().is_zero());
        assert!(!gestures.wants_ticks());
    }

    #[test]
    fn reset_clears_all_recognizers() {
        let (mut gestures, mut state) = setup();
        let start = Instant::now();
        gestures.handle(GestureEvent::PrimaryDown(start), &mut state);
        gestures.handle(GestureEvent::PinchChanged(2.0), &mut state);
        gestures.handle(GestureEvent::PinchEnded(start), &mut state);
        gestures.reset();
        assert!(!gestures.wants_ticks());
    }
}
