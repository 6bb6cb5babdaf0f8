// SPDX-License-Identifier: MPL-2.0
//! Render model of the check-in screen.
//!
//! The host renders a [`ViewModel`] and nothing else; it is recomputed from
//! the phase, session and interaction state on every call.

use super::component::Phase;
use super::interaction::InteractionState;
use crate::application::port::PermissionStatus;
use crate::domain::capture::{CaptureSession, Facing, ImageHandle};
use crate::domain::interaction::PanOffset;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    /// Camera access must be granted before anything else is shown.
    PermissionPrompt { status: PermissionStatus },
    /// Live camera with the shutter control.
    Camera {
        facing: Facing,
        /// False while a sequence is in flight.
        capture_enabled: bool,
        attempts: u32,
    },
    /// Captured pair with the primary photo transformed by zoom and pan.
    Review {
        primary: ImageHandle,
        secondary: ImageHandle,
        secondary_visible: bool,
        scale: f32,
        offset: PanOffset,
    },
    Closed,
}

impl ViewModel {
    #[must_use]
    pub fn project(
        phase: &Phase,
        session: &CaptureSession,
        facing: Facing,
        interaction: &InteractionState,
    ) -> Self {
        match phase {
            Phase::PermissionRequired(status) => ViewModel::PermissionPrompt { status: *status },
            Phase::Capturing => ViewModel::Camera {
                facing,
                capture_enabled: !session.busy,
                attempts: session.attempt_count,
            },
            Phase::Reviewing(pair) => ViewModel::Review {
                primary: interaction.primary(pair).clone(),
                secondary: interaction.secondary(pair).clone(),
                secondary_visible: interaction.secondary_visible(),
                scale: interaction.zoom().value(),
                offset: interaction.pan(),
            },
            Phase::Closed => ViewModel::Closed,
        }
    }
}
