// SPDX-License-Identifier: MPL-2.0
//! Visual state of the photo review surface.
//!
//! `secondary_visible` is stored for rendering but never set directly: every
//! mutator recomputes it from the long-press and zoom conditions, so the two
//! can not drift apart.

use crate::domain::capture::{CapturedPair, ImageHandle};
use crate::domain::interaction::{PanOffset, ZoomScale};

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    swapped: bool,
    zoom: ZoomScale,
    pan: PanOffset,
    long_press_held: bool,
    secondary_visible: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            swapped: false,
            zoom: ZoomScale::NEUTRAL,
            pan: PanOffset::ZERO,
            long_press_held: false,
            secondary_visible: true,
        }
    }
}

impl InteractionState {
    /// Swaps which photo is primary.
    pub fn toggle_swap(&mut self) {
        self.swapped = !self.swapped;
    }

    pub fn set_long_press(&mut self, held: bool) {
        self.long_press_held = held;
        self.refresh_visibility();
    }

    /// Sets the zoom. Returning to neutral also drops any pan offset.
    pub fn set_zoom(&mut self, zoom: ZoomScale) {
        self.zoom = zoom;
        if !zoom.is_zoomed() {
            self.pan = PanOffset::ZERO;
        }
        self.refresh_visibility();
    }

    /// Sets the pan offset. Ignored while not zoomed.
    pub fn set_pan(&mut self, pan: PanOffset) -> bool {
        if !self.zoom.is_zoomed() {
            return false;
        }
        self.pan = pan;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn refresh_visibility(&mut self) {
        self.secondary_visible = !self.long_press_held && !self.zoom.is_zoomed();
    }

    #[must_use]
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomScale {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    #[must_use]
    pub fn long_press_held(&self) -> bool {
        self.long_press_held
    }

    #[must_use]
    pub fn secondary_visible(&self) -> bool {
        self.secondary_visible
    }

    /// The large photo: back unless swapped.
    #[must_use]
    pub fn primary<'a>(&self, pair: &'a CapturedPair) -> &'a ImageHandle {
        if self.swapped {
            &pair.front
        } else {
            &pair.back
        }
    }

    /// The thumbnail photo: front unless swapped.
    #[must_use]
    pub fn secondary<'a>(&self, pair: &'a CapturedPair) -> &'a ImageHandle {
        if self.swapped {
            &pair.back
        } else {
            &pair.front
        }
    }
}
