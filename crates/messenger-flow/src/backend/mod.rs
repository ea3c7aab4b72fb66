//! Capability traits for the services behind the onboarding screens.
//!
//! The flow only talks to these traits, so a networked implementation can
//! replace the placeholder without touching navigation. `FakeBackend`
//! records calls and can be told to fail, for tests.

pub mod fake_backend;
pub mod placeholder;

pub use fake_backend::{Capability, FakeBackend, Operation};
pub use placeholder::PlaceholderBackend;

use crate::chat::ChatItem;
use crate::error::BackendError;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};

pub type BackendResult<T> = Result<T, BackendError>;

/// Everything collected across the registration screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub email: String,
    pub login: String,
    pub phone: String,
    pub password: String,
}

pub trait AuthBackend {
    /// Check a verification code. There is no local check; the backend decides.
    fn verify_code(&self, code: &str) -> BackendResult<()>;

    fn register(&self, draft: &RegistrationDraft) -> BackendResult<()>;
}

pub trait ProfileStore {
    fn load_profile(&self) -> BackendResult<Profile>;

    fn save_profile(&self, profile: &Profile) -> BackendResult<()>;
}

pub trait ChatDirectory {
    fn chats(&self) -> BackendResult<Vec<ChatItem>>;
}

/// Complete backend combining all capabilities.
pub trait ClientBackend: AuthBackend + ProfileStore + ChatDirectory + Send + Sync {}

impl<T> ClientBackend for T where T: AuthBackend + ProfileStore + ChatDirectory + Send + Sync {}
