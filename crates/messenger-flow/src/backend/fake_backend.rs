//! Fake backend for testing.
//!
//! Records every call without doing anything, and fails any capability it
//! has been told to fail. Clones share the same record.

use super::{AuthBackend, BackendResult, ChatDirectory, ProfileStore, RegistrationDraft};
use crate::chat::{placeholder_chats, ChatItem};
use crate::error::BackendError;
use crate::profile::Profile;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Operation records for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    VerifyCode { code: String },
    Register { draft: RegistrationDraft },
    LoadProfile,
    SaveProfile { profile: Profile },
    Chats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    VerifyCode,
    Register,
    LoadProfile,
    SaveProfile,
    Chats,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    operations: Arc<Mutex<Vec<Operation>>>,
    failing: Arc<Mutex<HashSet<Capability>>>,
    profile: Arc<Mutex<Profile>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every capability fails.
    pub fn failing() -> Self {
        let backend = Self::new();
        for capability in [
            Capability::VerifyCode,
            Capability::Register,
            Capability::LoadProfile,
            Capability::SaveProfile,
            Capability::Chats,
        ] {
            backend.fail(capability);
        }
        backend
    }

    pub fn with_profile(profile: Profile) -> Self {
        let backend = Self::new();
        if let Ok(mut stored) = backend.profile.lock() {
            *stored = profile;
        }
        backend
    }

    pub fn fail(&self, capability: Capability) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(capability);
        }
    }

    pub fn recover(&self, capability: Capability) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.remove(&capability);
        }
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.operations
            .lock()
            .map(|ops| ops.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut ops) = self.operations.lock() {
            ops.clear();
        }
    }

    fn record(&self, op: Operation, capability: Capability) -> BackendResult<()> {
        if let Ok(mut ops) = self.operations.lock() {
            ops.push(op);
        }
        let fails = self
            .failing
            .lock()
            .map(|failing| failing.contains(&capability))
            .unwrap_or(false);
        if fails {
            return Err(BackendError::Rejected(format!("{:?} disabled", capability)));
        }
        Ok(())
    }
}

impl AuthBackend for FakeBackend {
    fn verify_code(&self, code: &str) -> BackendResult<()> {
        self.record(
            Operation::VerifyCode {
                code: code.to_string(),
            },
            Capability::VerifyCode,
        )
    }

    fn register(&self, draft: &RegistrationDraft) -> BackendResult<()> {
        self.record(
            Operation::Register {
                draft: draft.clone(),
            },
            Capability::Register,
        )
    }
}

impl ProfileStore for FakeBackend {
    fn load_profile(&self) -> BackendResult<Profile> {
        self.record(Operation::LoadProfile, Capability::LoadProfile)?;
        self.profile
            .lock()
            .map(|profile| profile.clone())
            .map_err(|_| BackendError::Unavailable("fake profile lock poisoned".to_string()))
    }

    fn save_profile(&self, profile: &Profile) -> BackendResult<()> {
        self.record(
            Operation::SaveProfile {
                profile: profile.clone(),
            },
            Capability::SaveProfile,
        )?;
        if let Ok(mut stored) = self.profile.lock() {
            *stored = profile.clone();
        }
        Ok(())
    }
}

impl ChatDirectory for FakeBackend {
    fn chats(&self) -> BackendResult<Vec<ChatItem>> {
        self.record(Operation::Chats, Capability::Chats)?;
        Ok(placeholder_chats())
    }
}
