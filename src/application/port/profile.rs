// SPDX-License-Identifier: MPL-2.0
//! Profile backend port definition.
//!
//! The backend is reached over an authenticated HTTP interface in production;
//! the check-in core only depends on this trait.

use crate::domain::profile::{NewProfile, ProfileUpdate, UserProfile};
use std::fmt;
use std::future::Future;

/// Maximum number of profiles returned by [`ProfileDirectory::search_users`].
pub const SEARCH_LIMIT: usize = 10;

/// Errors returned by the profile backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Another user already holds the username.
    UsernameTaken,

    /// A profile already exists for this uid.
    AlreadyExists,

    /// No profile exists for the given key.
    NotFound,

    /// Transport or storage failure.
    Backend(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::UsernameTaken => write!(f, "Username already taken"),
            ProfileError::AlreadyExists => write!(f, "Profile already completed"),
            ProfileError::NotFound => write!(f, "Profile not found"),
            ProfileError::Backend(msg) => write!(f, "Profile backend error: {msg}"),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Port for user profile storage.
///
/// Usernames are compared in normalized form (see
/// [`normalize_username`](crate::domain::profile::normalize_username)).
pub trait ProfileDirectory {
    /// Returns `true` if no profile uses `username`.
    fn is_username_available(&self, username: &str)
        -> impl Future<Output = Result<bool, ProfileError>>;

    /// Creates the profile for `uid`. Fails if the uid or username is taken.
    fn create_user(
        &self,
        uid: &str,
        input: NewProfile,
    ) -> impl Future<Output = Result<UserProfile, ProfileError>>;

    fn get_user_by_uid(&self, uid: &str)
        -> impl Future<Output = Result<Option<UserProfile>, ProfileError>>;

    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<UserProfile>, ProfileError>>;

    /// Applies the whitelisted fields and returns the stored result.
    fn update_profile(
        &self,
        uid: &str,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ProfileError>>;

    /// Prefix search on display name, at most [`SEARCH_LIMIT`] results.
    fn search_users(&self, query: &str)
        -> impl Future<Output = Result<Vec<UserProfile>, ProfileError>>;
}
