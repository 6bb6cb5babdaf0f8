// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording check-in activity.
//!
//! This module provides infrastructure for capturing diagnostic events during
//! a check-in (user actions, capture sequence results, screen transitions)
//! and storing them in a memory-bounded circular buffer.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event of a [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Cheap, non-blocking sender given to components
//! - [`DiagnosticsCollector`]: Owner of the buffer, drained on each tick

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, DiagnosticsSummary};
pub use events::{CaptureEvent, CaptureStage, DiagnosticEvent, DiagnosticEventKind, UserAction};
