// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports for dependency inversion.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for collaborators the check-in
//!   core drives or is driven by
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives port implementations by injection
//!
//! # Example
//!
//! ```ignore
//! use goalsy_checkin::application::port::CaptureDevice;
//! use goalsy_checkin::ui::checkin::CheckIn;
//!
//! // Platform code implements the port trait
//! struct NativeCamera { /* ... */ }
//! impl CaptureDevice for NativeCamera { /* ... */ }
//!
//! // The screen receives it explicitly
//! let screen = CheckIn::new(Rc::new(NativeCamera::new()), &settings, diagnostics, on_close);
//! ```

pub mod port;
