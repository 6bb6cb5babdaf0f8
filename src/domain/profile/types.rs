// SPDX-License-Identifier: MPL-2.0
//! Profile records and the profile update whitelist.

/// Who may see a profile or its goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Privacy {
    #[default]
    Public,
    Followers,
    Private,
}

/// Per-event notification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    pub likes: bool,
    pub comments: bool,
    pub follows: bool,
    pub streak_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            likes: true,
            comments: true,
            follows: true,
            streak_reminders: true,
        }
    }
}

/// Visibility of the profile page and of the user's goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilitySettings {
    pub profile: Privacy,
    pub goals: Privacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub visibility: VisibilitySettings,
}

/// A stored user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub uid: String,
    /// Normalized (trimmed, lowercase) username used for lookups.
    pub username: String,
    /// Username as the user typed it.
    pub display_username: String,
    pub display_name: String,
    pub email: String,
    pub email_verified: bool,
    pub photo_url: Option<String>,
    pub bio: String,
    pub privacy: Privacy,
    pub follower_count: u32,
    pub following_count: u32,
    /// Goals ever created.
    pub goal_count: u32,
    /// Best streak ever reached.
    pub streak_count: u32,
    /// Epoch milliseconds.
    pub join_date: i64,
    /// Epoch milliseconds.
    pub last_active: i64,
    pub profile_complete: bool,
    pub settings: UserSettings,
}

impl UserProfile {
    /// Builds a fresh profile for `uid` with zeroed counters and default settings.
    #[must_use]
    pub fn from_new(uid: impl Into<String>, input: NewProfile, now_ms: i64) -> Self {
        Self {
            uid: uid.into(),
            username: normalize_username(&input.username),
            display_username: input.username,
            display_name: input.display_name,
            email: input.email,
            email_verified: false,
            photo_url: None,
            bio: input.bio.unwrap_or_default(),
            privacy: Privacy::Public,
            follower_count: 0,
            following_count: 0,
            goal_count: 0,
            streak_count: 0,
            join_date: now_ms,
            last_active: now_ms,
            profile_complete: true,
            settings: UserSettings::default(),
        }
    }

    /// Applies the whitelisted fields of `update`; absent fields are left untouched.
    pub fn apply(&mut self, update: ProfileUpdate, now_ms: i64) {
        if let Some(display_name) = update.display_name {
            self.display_name = display_name;
        }
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(photo_url) = update.photo_url {
            self.photo_url = Some(photo_url);
        }
        if let Some(privacy) = update.privacy {
            self.privacy = privacy;
        }
        if let Some(settings) = update.settings {
            self.settings = settings;
        }
        self.last_active = now_ms;
    }
}

/// Input for completing a profile after sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub bio: Option<String>,
}

/// Fields a user may change on their own profile.
///
/// Counters, identity and timestamps are deliberately not representable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub privacy: Option<Privacy>,
    pub settings: Option<UserSettings>,
}

impl ProfileUpdate {
    /// Returns true if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.bio.is_none()
            && self.photo_url.is_none()
            && self.privacy.is_none()
            && self.settings.is_none()
    }
}

/// Canonical form used to compare usernames.
#[must_use]
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
