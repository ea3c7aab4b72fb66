//! In-memory backend standing in for the real services.
//!
//! Every code and registration is accepted; the profile lives only as long
//! as the process.

use super::{AuthBackend, BackendResult, ChatDirectory, ProfileStore, RegistrationDraft};
use crate::chat::{placeholder_chats, ChatItem};
use crate::error::BackendError;
use crate::profile::Profile;
use std::sync::Mutex;

#[derive(Debug)]
pub struct PlaceholderBackend {
    profile: Mutex<Profile>,
    chats: Vec<ChatItem>,
}

impl PlaceholderBackend {
    pub fn new(profile: Profile, chats: Vec<ChatItem>) -> Self {
        Self {
            profile: Mutex::new(profile),
            chats,
        }
    }
}

impl Default for PlaceholderBackend {
    fn default() -> Self {
        Self::new(Profile::default(), placeholder_chats())
    }
}

impl AuthBackend for PlaceholderBackend {
    fn verify_code(&self, code: &str) -> BackendResult<()> {
        log::info!("verify_code accepted ({} chars, not checked)", code.len());
        Ok(())
    }

    fn register(&self, draft: &RegistrationDraft) -> BackendResult<()> {
        log::info!("register accepted for login '{}'", draft.login);
        Ok(())
    }
}

impl ProfileStore for PlaceholderBackend {
    fn load_profile(&self) -> BackendResult<Profile> {
        self.profile
            .lock()
            .map(|profile| profile.clone())
            .map_err(|_| BackendError::Unavailable("profile lock poisoned".to_string()))
    }

    fn save_profile(&self, profile: &Profile) -> BackendResult<()> {
        let mut stored = self
            .profile
            .lock()
            .map_err(|_| BackendError::Unavailable("profile lock poisoned".to_string()))?;
        *stored = profile.clone();
        log::info!("💾 profile saved in memory ({})", profile.nickname);
        Ok(())
    }
}

impl ChatDirectory for PlaceholderBackend {
    fn chats(&self) -> BackendResult<Vec<ChatItem>> {
        Ok(self.chats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_code() {
        let backend = PlaceholderBackend::default();
        assert!(backend.verify_code("").is_ok());
        assert!(backend.verify_code("0000").is_ok());
    }

    #[test]
    fn saved_profile_is_loaded_back() {
        let backend = PlaceholderBackend::default();
        let profile = Profile {
            nickname: "Neo".to_string(),
            phone: "+1 555".to_string(),
        };
        backend.save_profile(&profile).expect("save");
        assert_eq!(backend.load_profile().expect("load"), profile);
    }

    #[test]
    fn serves_three_placeholder_chats() {
        let chats = PlaceholderBackend::default().chats().expect("chats");
        assert_eq!(chats.len(), 3);
        assert_eq!(chats[1].last_message, "Привет!");
    }
}
