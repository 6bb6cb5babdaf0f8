// SPDX-License-Identifier: MPL-2.0
//! `goalsy_checkin` is the dual-camera check-in core of the Goalsy goal tracker.
//!
//! One shutter press captures a back and a front photo, with a lens switch and
//! a hardware settle delay in between. The pair is then shown for review,
//! where the user can swap, pinch-zoom and pan the photos before confirming.
//!
//! The crate follows a layered layout: `domain` holds plain types, the
//! `application::port` traits describe the camera and the profile backend,
//! `infrastructure` provides adapters, and `ui` contains the screen
//! controller driven by messages from the host.

#![doc(html_root_url = "https://docs.rs/goalsy_checkin/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
