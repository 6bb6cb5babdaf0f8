// SPDX-License-Identifier: MPL-2.0
//! Check-in screen controller.
//!
//! Binds the capture sequencer, the gesture set and the interaction state
//! into one phase machine:
//!
//! ```text
//! PermissionRequired --grant--> Capturing --pair--> Reviewing --retake--> Capturing
//!                                   any --cancel--> Closed <--confirm-- Reviewing
//! ```
//!
//! All methods take `&self` so a capture sequence can be in flight while
//! gestures and taps keep flowing through [`CheckIn::update`]. Interior
//! borrows never span an await.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use super::capture::{CaptureSequencer, SequenceOutcome};
use super::gestures::{self, GestureEvent, GestureSet};
use super::interaction::InteractionState;
use super::view::ViewModel;
use crate::application::port::{CaptureDevice, PermissionStatus};
use crate::config::CheckInSettings;
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::domain::capture::{CaptureSession, CapturedPair};

/// Current mode of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Camera permission is missing; no capture logic runs.
    PermissionRequired(PermissionStatus),
    Capturing,
    /// Only reachable with both photos, so confirm can never lack one.
    Reviewing(CapturedPair),
    /// Terminal. Control was handed back to the caller.
    Closed,
}

impl Phase {
    /// Short name used in logs and diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::PermissionRequired(_) => "permission_required",
            Phase::Capturing => "capturing",
            Phase::Reviewing(_) => "reviewing",
            Phase::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Gesture(GestureEvent),
    /// Frame tick while [`CheckIn::wants_ticks`] is true.
    Tick(Instant),
    Retake,
    Confirm,
    Cancel,
}

/// Whether the host needs to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Changed,
}

/// Why the screen closed, passed to the close callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    Confirmed(CapturedPair),
    Cancelled,
}

#[derive(Debug)]
struct State {
    phase: Phase,
    interaction: InteractionState,
    gestures: GestureSet,
}

pub struct CheckIn<D> {
    device: Rc<D>,
    sequencer: CaptureSequencer<D>,
    state: RefCell<State>,
    on_close: Box<dyn Fn(CloseReason)>,
    diagnostics: DiagnosticsHandle,
}

impl<D: CaptureDevice> CheckIn<D> {
    /// Creates the screen. The permission is checked immediately, as if mounted.
    pub fn new(
        device: Rc<D>,
        settings: &CheckInSettings,
        diagnostics: DiagnosticsHandle,
        on_close: impl Fn(CloseReason) + 'static,
    ) -> Self {
        let sequencer = CaptureSequencer::new(
            Rc::clone(&device),
            settings.settle_delay,
            settings.partial_capture,
            diagnostics.clone(),
        );
        let phase = Self::phase_for(device.permission());
        Self {
            device,
            sequencer,
            state: RefCell::new(State {
                phase,
                interaction: InteractionState::default(),
                gestures: GestureSet::new(settings.long_press, settings.rest_animation),
            }),
            on_close: Box::new(on_close),
            diagnostics,
        }
    }

    fn phase_for(status: PermissionStatus) -> Phase {
        if status.is_granted() {
            Phase::Capturing
        } else {
            Phase::PermissionRequired(status)
        }
    }

    /// Re-checks the camera permission when the screen becomes visible again.
    ///
    /// Losing the permission blocks capture mode. Review mode no longer needs
    /// the camera and is left alone.
    pub fn mount(&self) -> Effect {
        let status = self.device.permission();
        let next = match self.state.borrow().phase {
            Phase::PermissionRequired(_) | Phase::Capturing => Self::phase_for(status),
            Phase::Reviewing(_) | Phase::Closed => return Effect::None,
        };
        self.transition(next)
    }

    /// Asks the platform for camera access. Returns whether it was granted.
    pub async fn grant_permission(&self) -> bool {
        if !matches!(self.state.borrow().phase, Phase::PermissionRequired(_)) {
            return self.device.permission().is_granted();
        }
        self.diagnostics.log_action(UserAction::GrantPermission);
        let granted = self.device.request_permission().await;
        log::info!("camera permission request answered: granted={granted}");

        // The user may have cancelled while the system prompt was up.
        if matches!(self.state.borrow().phase, Phase::PermissionRequired(_)) {
            self.transition(Self::phase_for(self.device.permission()));
        }
        granted
    }

    /// Handles a shutter press.
    ///
    /// Presses outside capture mode, or while a sequence is running, are
    /// ignored. The screen switches to review only if the phase is still
    /// `Capturing` once both photos are in.
    pub async fn capture(&self) -> SequenceOutcome {
        if self.state.borrow().phase != Phase::Capturing {
            log::debug!("shutter pressed outside capture mode");
            return SequenceOutcome::Skipped;
        }
        self.diagnostics.log_action(UserAction::CapturePressed);

        let outcome = self.sequencer.run_sequence().await;

        if let SequenceOutcome::Completed(pair) = &outcome {
            if self.state.borrow().phase == Phase::Capturing {
                self.transition(Phase::Reviewing(pair.clone()));
            }
        }
        outcome
    }

    pub fn update(&self, message: Message) -> Effect {
        match message {
            Message::Gesture(event) => self.handle_gesture(event),
            Message::Tick(now) => self.handle_gesture(GestureEvent::Tick(now)),
            Message::Retake => self.retake(),
            Message::Confirm => self.confirm(),
            Message::Cancel => self.cancel(),
        }
    }

    fn handle_gesture(&self, event: GestureEvent) -> Effect {
        let mut state = self.state.borrow_mut();
        if !matches!(state.phase, Phase::Reviewing(_)) {
            return Effect::None;
        }
        let State {
            interaction,
            gestures: recognizers,
            ..
        } = &mut *state;
        match recognizers.handle(event, interaction) {
            gestures::Effect::None => Effect::None,
            gestures::Effect::InteractionChanged => Effect::Changed,
            gestures::Effect::Swapped => {
                self.diagnostics.log_action(UserAction::SwapPhotos);
                Effect::Changed
            }
        }
    }

    fn retake(&self) -> Effect {
        {
            let mut state = self.state.borrow_mut();
            if !matches!(state.phase, Phase::Reviewing(_)) {
                return Effect::None;
            }
            state.interaction.reset();
            state.gestures.reset();
        }
        self.diagnostics.log_action(UserAction::Retake);
        self.sequencer.reset();
        self.transition(Phase::Capturing)
    }

    fn confirm(&self) -> Effect {
        let pair = match &self.state.borrow().phase {
            Phase::Reviewing(pair) => pair.clone(),
            _ => return Effect::None,
        };
        self.diagnostics.log_action(UserAction::Confirm);
        self.close(CloseReason::Confirmed(pair))
    }

    fn cancel(&self) -> Effect {
        if self.state.borrow().phase == Phase::Closed {
            return Effect::None;
        }
        self.diagnostics.log_action(UserAction::Cancel);
        self.close(CloseReason::Cancelled)
    }

    fn close(&self, reason: CloseReason) -> Effect {
        self.transition(Phase::Closed);
        // Called without any borrow held; the callback may read the screen.
        (self.on_close)(reason);
        Effect::Changed
    }

    fn transition(&self, next: Phase) -> Effect {
        let from = {
            let mut state = self.state.borrow_mut();
            if state.phase == next {
                return Effect::None;
            }
            std::mem::replace(&mut state.phase, next.clone()).name()
        };
        log::debug!("check-in phase {from} -> {}", next.name());
        self.diagnostics.log_state(from, next.name());
        Effect::Changed
    }

    /// True while animations or a held press need [`Message::Tick`].
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        let state = self.state.borrow();
        matches!(state.phase, Phase::Reviewing(_)) && state.gestures.wants_ticks()
    }

    #[must_use]
    pub fn view(&self) -> ViewModel {
        let state = self.state.borrow();
        ViewModel::project(
            &state.phase,
            &self.sequencer.session_ref(),
            self.sequencer.facing(),
            &state.interaction,
        )
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.borrow().phase.clone()
    }

    #[must_use]
    pub fn session(&self) -> CaptureSession {
        self.sequencer.session()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.state.borrow().interaction.clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.sequencer.is_busy()
    }
}
