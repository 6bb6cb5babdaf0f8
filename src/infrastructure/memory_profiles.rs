// SPDX-License-Identifier: MPL-2.0
//! In-memory adapter implementing the [`ProfileDirectory`] port trait.
//!
//! Profiles are kept in an ordered map keyed by uid. Timestamps come from
//! the wall clock in epoch milliseconds.
//!
//! [`ProfileDirectory`]: crate::application::port::ProfileDirectory

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::Utc;

use crate::application::port::profile::SEARCH_LIMIT;
use crate::application::port::{ProfileDirectory, ProfileError};
use crate::domain::profile::{normalize_username, NewProfile, ProfileUpdate, UserProfile};

#[derive(Debug, Default)]
pub struct InMemoryProfileDirectory {
    profiles: RefCell<BTreeMap<String, UserProfile>>,
}

impl InMemoryProfileDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.borrow().is_empty()
    }

    fn find_by_username(&self, username: &str) -> Option<UserProfile> {
        let wanted = normalize_username(username);
        self.profiles
            .borrow()
            .values()
            .find(|profile| profile.username == wanted)
            .cloned()
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

impl ProfileDirectory for InMemoryProfileDirectory {
    async fn is_username_available(&self, username: &str) -> Result<bool, ProfileError> {
        Ok(self.find_by_username(username).is_none())
    }

    async fn create_user(&self, uid: &str, input: NewProfile) -> Result<UserProfile, ProfileError> {
        if self.profiles.borrow().contains_key(uid) {
            return Err(ProfileError::AlreadyExists);
        }
        if self.find_by_username(&input.username).is_some() {
            return Err(ProfileError::UsernameTaken);
        }
        let profile = UserProfile::from_new(uid, input, now_ms());
        log::info!("created profile {uid} (@{})", profile.username);
        self.profiles
            .borrow_mut()
            .insert(uid.to_owned(), profile.clone());
        Ok(profile)
    }

    async fn get_user_by_uid(&self, uid: &str) -> Result<Option<UserProfile>, ProfileError> {
        Ok(self.profiles.borrow().get(uid).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserProfile>, ProfileError> {
        Ok(self.find_by_username(username))
    }

    async fn update_profile(
        &self,
        uid: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ProfileError> {
        let mut profiles = self.profiles.borrow_mut();
        let profile = profiles.get_mut(uid).ok_or(ProfileError::NotFound)?;
        profile.apply(update, now_ms());
        Ok(profile.clone())
    }

    async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>, ProfileError> {
        let mut matches: Vec<UserProfile> = self
            .profiles
            .borrow()
            .values()
            .filter(|profile| profile.display_name.starts_with(query))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        matches.truncate(SEARCH_LIMIT);
        Ok(matches)
    }
}
