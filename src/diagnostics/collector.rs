// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! the check-in components and stores them in a circular buffer.

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CaptureEvent, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction,
};

/// Capacity of the channel between handles and the collector.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel
/// so logging never blocks the event loop.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Creates a handle whose events are discarded.
    ///
    /// Used where no collector is wired, e.g. in isolated component tests.
    #[must_use]
    pub fn disconnected() -> Self {
        let (event_tx, _) = bounded(1);
        Self { event_tx }
    }

    /// Logs a user action event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a capture sequence event.
    pub fn log_capture(&self, event: CaptureEvent) {
        self.send(DiagnosticEventKind::Capture { event });
    }

    /// Logs a screen phase transition.
    pub fn log_state(&self, from: &'static str, to: &'static str) {
        self.send(DiagnosticEventKind::StateChange { from, to });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full or collector is gone
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Counters over the currently buffered events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsSummary {
    pub started_at: DateTime<Utc>,
    pub events: usize,
    pub completed_sequences: usize,
    pub failed_sequences: usize,
    pub skipped_triggers: usize,
}

/// Central collector owning the event buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    /// Circular buffer storing diagnostic events.
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (wall clock for summaries).
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a new collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over buffered events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Summarizes the buffered events.
    #[must_use]
    pub fn summary(&self) -> DiagnosticsSummary {
        let mut summary = DiagnosticsSummary {
            started_at: self.started_at,
            events: self.buffer.len(),
            completed_sequences: 0,
            failed_sequences: 0,
            skipped_triggers: 0,
        };
        for event in self.buffer.iter() {
            if let DiagnosticEventKind::Capture { event } = &event.kind {
                match event {
                    CaptureEvent::SequenceCompleted { .. } => summary.completed_sequences += 1,
                    CaptureEvent::SequenceFailed { .. } => summary.failed_sequences += 1,
                    CaptureEvent::SequenceSkipped => summary.skipped_triggers += 1,
                    CaptureEvent::SequenceStarted | CaptureEvent::SequenceDiscarded => {}
                }
            }
        }
        summary
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
