//! Profile data and the unsaved-changes check behind the save button.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NICKNAME: &str = "ТекущийНик";
pub const DEFAULT_PHONE: &str = "+7 999 123-45-67";

/// Values shown in (and saved from) the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub nickname: String,
    pub phone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
        }
    }
}

/// Baseline the live field values are compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub original_nickname: String,
    pub original_phone: String,
    pub photo_changed: bool,
}

impl ProfileSnapshot {
    pub fn new(original_nickname: impl Into<String>, original_phone: impl Into<String>) -> Self {
        Self {
            original_nickname: original_nickname.into(),
            original_phone: original_phone.into(),
            photo_changed: false,
        }
    }
}

impl From<&Profile> for ProfileSnapshot {
    fn from(profile: &Profile) -> Self {
        Self::new(profile.nickname.clone(), profile.phone.clone())
    }
}

/// Decides whether the save affordance should be visible.
///
/// Text entry only changes what is compared; the snapshot moves only on a
/// photo change or a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyTracker {
    snapshot: ProfileSnapshot,
}

impl DirtyTracker {
    pub fn new(snapshot: ProfileSnapshot) -> Self {
        Self { snapshot }
    }

    /// Reset the baseline, e.g. when the profile screen is created again.
    pub fn initialize(&mut self, snapshot: ProfileSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &ProfileSnapshot {
        &self.snapshot
    }

    pub fn on_field_changed(&self, current_nickname: &str, current_phone: &str) -> bool {
        let nickname_changed = current_nickname != self.snapshot.original_nickname;
        let phone_changed = current_phone != self.snapshot.original_phone;
        let dirty = nickname_changed || phone_changed || self.snapshot.photo_changed;
        log::debug!(
            "profile dirty={} (nickname={}, phone={}, photo={})",
            dirty,
            nickname_changed,
            phone_changed,
            self.snapshot.photo_changed
        );
        dirty
    }

    pub fn on_photo_changed(&mut self) -> bool {
        self.snapshot.photo_changed = true;
        let nickname = self.snapshot.original_nickname.clone();
        let phone = self.snapshot.original_phone.clone();
        self.on_field_changed(&nickname, &phone)
    }

    /// Adopt the saved values as the new baseline and clear the photo flag.
    pub fn commit(&mut self, nickname: &str, phone: &str) -> bool {
        self.snapshot = ProfileSnapshot::new(nickname, phone);
        self.on_field_changed(nickname, phone)
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new(ProfileSnapshot::from(&Profile::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> DirtyTracker {
        DirtyTracker::new(ProfileSnapshot::new("A", "B"))
    }

    #[test]
    fn unchanged_fields_are_clean() {
        assert!(!tracker().on_field_changed("A", "B"));
    }

    #[test]
    fn changed_nickname_or_phone_is_dirty() {
        let t = tracker();
        assert!(t.on_field_changed("A2", "B"));
        assert!(t.on_field_changed("A", "B2"));
        assert!(t.on_field_changed("", ""));
    }

    #[test]
    fn reverting_an_edit_hides_save_again() {
        let t = tracker();
        assert!(t.on_field_changed("Ax", "B"));
        assert!(!t.on_field_changed("A", "B"));
    }

    #[test]
    fn photo_change_sticks_until_commit() {
        let mut t = tracker();
        assert!(t.on_photo_changed());
        assert!(t.on_field_changed("A", "B"));
        assert!(t.snapshot().photo_changed);

        assert!(!t.commit("A", "B"));
        assert!(!t.on_field_changed("A", "B"));
        assert!(!t.snapshot().photo_changed);
    }

    #[test]
    fn commit_moves_the_baseline() {
        let mut t = tracker();
        assert!(t.on_field_changed("Neo", "B"));
        t.commit("Neo", "B");
        assert!(!t.on_field_changed("Neo", "B"));
        assert!(t.on_field_changed("A", "B"));
    }

    #[test]
    fn initialize_replaces_snapshot() {
        let mut t = tracker();
        t.on_photo_changed();
        t.initialize(ProfileSnapshot::new("X", "Y"));
        assert!(!t.on_field_changed("X", "Y"));
    }

    #[test]
    fn default_profile_matches_placeholder_values() {
        let profile = Profile::default();
        assert_eq!(profile.nickname, DEFAULT_NICKNAME);
        assert_eq!(profile.phone, DEFAULT_PHONE);
        assert!(!DirtyTracker::default().on_field_changed(DEFAULT_NICKNAME, DEFAULT_PHONE));
    }
}
