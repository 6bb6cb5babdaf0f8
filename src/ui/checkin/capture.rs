// SPDX-License-Identifier: MPL-2.0
//! Capture sequencer producing a back/front photo pair from one shutter press.
//!
//! A sequence captures the back lens, switches to the front lens, waits for
//! the hardware to settle, then captures the front lens. At most one
//! sequence runs at a time; further triggers are skipped while `busy`.
//!
//! Cleanup lives in the `Drop` of `BusyGuard`, so it also runs when a caller
//! drops the sequence future mid-flight.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::application::port::{CaptureDevice, DeviceError};
use crate::diagnostics::{CaptureEvent, CaptureStage, DiagnosticsHandle};
use crate::domain::capture::{
    CaptureSession, CapturedPair, Facing, ImageHandle, PartialCapturePolicy, SettleDelay,
};

/// Result of one call to [`CaptureSequencer::run_sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// Another sequence was in flight; nothing happened.
    Skipped,
    /// Both photos were captured.
    Completed(CapturedPair),
    /// The camera failed at `stage`; the session was cleaned up per policy.
    Failed {
        stage: CaptureStage,
        error: DeviceError,
    },
    /// The session was reset while the sequence was suspended, so the
    /// captured photos were dropped.
    Discarded,
}

impl SequenceOutcome {
    #[must_use]
    pub fn pair(&self) -> Option<&CapturedPair> {
        match self {
            SequenceOutcome::Completed(pair) => Some(pair),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct SequencerState {
    session: CaptureSession,
    facing: Facing,
}

/// Drives the two-shot capture protocol against a [`CaptureDevice`].
///
/// Cloning yields another handle to the same session.
pub struct CaptureSequencer<D> {
    device: Rc<D>,
    state: Rc<RefCell<SequencerState>>,
    settle_delay: SettleDelay,
    policy: PartialCapturePolicy,
    diagnostics: DiagnosticsHandle,
}

impl<D> Clone for CaptureSequencer<D> {
    fn clone(&self) -> Self {
        Self {
            device: Rc::clone(&self.device),
            state: Rc::clone(&self.state),
            settle_delay: self.settle_delay,
            policy: self.policy,
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<D: CaptureDevice> CaptureSequencer<D> {
    #[must_use]
    pub fn new(
        device: Rc<D>,
        settle_delay: SettleDelay,
        policy: PartialCapturePolicy,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            device,
            state: Rc::new(RefCell::new(SequencerState::default())),
            settle_delay,
            policy,
            diagnostics,
        }
    }

    /// Runs one capture sequence.
    ///
    /// Suspends at the back capture, the settle delay and the front capture.
    /// Device errors end the sequence and are returned as
    /// [`SequenceOutcome::Failed`]; they never propagate as a fault.
    pub async fn run_sequence(&self) -> SequenceOutcome {
        let Some(_guard) = BusyGuard::acquire(self) else {
            log::debug!("capture trigger ignored, sequence already running");
            self.diagnostics.log_capture(CaptureEvent::SequenceSkipped);
            return SequenceOutcome::Skipped;
        };
        self.diagnostics.log_capture(CaptureEvent::SequenceStarted);

        let kept_back = self.prepare_session();
        if kept_back.is_none() {
            log::debug!("capturing back photo");
            match self.device.capture().await {
                Ok(image) => self.state.borrow_mut().session.back = Some(image),
                Err(error) => return self.fail(CaptureStage::Back, error),
            }
        } else {
            log::debug!("reusing back photo from previous attempt");
        }

        self.switch_facing(Facing::Front);
        tokio::time::sleep(self.settle_delay.as_duration()).await;

        log::debug!("capturing front photo");
        let front = match self.device.capture().await {
            Ok(image) => image,
            Err(error) => return self.fail(CaptureStage::Front, error),
        };

        let pair = {
            let mut state = self.state.borrow_mut();
            if state.session.back.is_some() {
                state.session.front = Some(front);
            }
            state.session.pair()
        };
        match pair {
            Some(pair) => {
                let attempt = self.attempt_count() + 1;
                log::info!("capture sequence {attempt} completed");
                self.diagnostics
                    .log_capture(CaptureEvent::SequenceCompleted { attempt });
                SequenceOutcome::Completed(pair)
            }
            // Back photo vanished: the session was reset while suspended.
            None => {
                log::debug!("capture session reset during sequence, dropping result");
                self.diagnostics.log_capture(CaptureEvent::SequenceDiscarded);
                SequenceOutcome::Discarded
            }
        }
    }

    /// Clears stale photos before a new sequence and returns the back photo
    /// carried over under [`PartialCapturePolicy::KeepBack`].
    fn prepare_session(&self) -> Option<ImageHandle> {
        let mut state = self.state.borrow_mut();
        let session = &mut state.session;
        session.front = None;
        match self.policy {
            PartialCapturePolicy::KeepBack => session.back.clone(),
            PartialCapturePolicy::DiscardAll => {
                session.back = None;
                None
            }
        }
    }

    fn switch_facing(&self, facing: Facing) {
        self.state.borrow_mut().facing = facing;
        self.device.set_facing(facing);
    }

    fn fail(&self, stage: CaptureStage, error: DeviceError) -> SequenceOutcome {
        let attempt = self.attempt_count() + 1;
        log::warn!("capture sequence {attempt} failed at {stage:?}: {error}");
        {
            let mut state = self.state.borrow_mut();
            match self.policy {
                PartialCapturePolicy::DiscardAll => state.session.discard_images(),
                PartialCapturePolicy::KeepBack => state.session.front = None,
            }
        }
        self.diagnostics.log_capture(CaptureEvent::SequenceFailed {
            attempt,
            stage,
            message: error.to_string(),
        });
        SequenceOutcome::Failed { stage, error }
    }

    /// Snapshot of the capture session.
    #[must_use]
    pub fn session(&self) -> CaptureSession {
        self.state.borrow().session.clone()
    }

    /// Borrow of the capture session. Must not be held across an await.
    pub fn session_ref(&self) -> Ref<'_, CaptureSession> {
        Ref::map(self.state.borrow(), |state| &state.session)
    }

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.state.borrow().facing
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.borrow().session.busy
    }

    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.state.borrow().session.attempt_count
    }

    #[must_use]
    pub fn policy(&self) -> PartialCapturePolicy {
        self.policy
    }

    /// Clears the session for a retake.
    ///
    /// An in-flight sequence keeps its busy flag; its result is dropped.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        let busy = state.session.busy;
        state.session.reset();
        state.session.busy = busy;
    }
}

/// Holds the busy flag for the lifetime of one sequence.
struct BusyGuard<'a, D: CaptureDevice> {
    sequencer: &'a CaptureSequencer<D>,
}

impl<'a, D: CaptureDevice> BusyGuard<'a, D> {
    fn acquire(sequencer: &'a CaptureSequencer<D>) -> Option<Self> {
        let mut state = sequencer.state.borrow_mut();
        if state.session.busy {
            return None;
        }
        state.session.busy = true;
        let restore_back = state.facing != Facing::Back;
        state.facing = Facing::Back;
        drop(state);
        if restore_back {
            sequencer.device.set_facing(Facing::Back);
        }
        Some(Self { sequencer })
    }
}

impl<D: CaptureDevice> Drop for BusyGuard<'_, D> {
    fn drop(&mut self) {
        let restore_back = {
            let mut state = self.sequencer.state.borrow_mut();
            state.session.attempt_count = state.session.attempt_count.saturating_add(1);
            state.session.busy = false;
            state.facing != Facing::Back
        };
        if restore_back {
            self.sequencer.switch_facing(Facing::Back);
        }
    }
}
