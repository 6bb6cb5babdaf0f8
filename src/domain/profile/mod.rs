// SPDX-License-Identifier: MPL-2.0
//! User profile types exchanged with the profile backend.
//!
//! The backend itself lives behind [`ProfileDirectory`](crate::application::port::ProfileDirectory);
//! these are the records crossing that boundary.

pub mod types;

pub use types::{
    normalize_username, NewProfile, NotificationSettings, Privacy, ProfileUpdate, UserProfile,
    UserSettings, VisibilitySettings,
};
