// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`capture`]: Capture types ([`Facing`](capture::Facing), [`ImageHandle`](capture::ImageHandle),
//!   [`CaptureSession`](capture::CaptureSession), [`SettleDelay`](capture::SettleDelay))
//! - [`interaction`]: Review value objects ([`ZoomScale`](interaction::ZoomScale),
//!   [`PanOffset`](interaction::PanOffset), [`LongPressDuration`](interaction::LongPressDuration))
//! - [`profile`]: Profile records exchanged with the backend
//!   ([`UserProfile`](profile::UserProfile), [`ProfileUpdate`](profile::ProfileUpdate))

pub mod capture;
pub mod interaction;
pub mod profile;
