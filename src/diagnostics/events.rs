// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for check-in activity tracking.

use std::time::Instant;

/// User-initiated actions on the check-in screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Tapped the permission prompt's grant button.
    GrantPermission,
    /// Pressed the shutter.
    CapturePressed,
    /// Tapped the secondary photo to swap primary and secondary.
    SwapPhotos,
    Retake,
    Confirm,
    Cancel,
}

/// Step of the capture sequence an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStage {
    Back,
    Front,
}

/// Capture sequence lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    SequenceStarted,
    /// A trigger arrived while another sequence was running.
    SequenceSkipped,
    SequenceCompleted {
        attempt: u32,
    },
    SequenceFailed {
        attempt: u32,
        stage: CaptureStage,
        message: String,
    },
    /// The screen reset mid-sequence and the photos were dropped.
    SequenceDiscarded,
}

/// The different kinds of diagnostic events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Capture { event: CaptureEvent },
    /// Screen phase transition, e.g. `capturing -> reviewing`.
    StateChange { from: &'static str, to: &'static str },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Returns true for failed capture sequences.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticEventKind::Capture {
                event: CaptureEvent::SequenceFailed { .. }
            }
        )
    }
}
