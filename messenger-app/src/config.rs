use anyhow::Context;
use messenger_flow::chat::placeholder_chats;
use messenger_flow::{ChatItem, PlaceholderBackend, Profile, ScreenId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Startup settings. Every key is optional; missing keys keep the
/// placeholder data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub start: ScreenId,
    pub profile: Profile,
    pub chats: Vec<ChatItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start: ScreenId::Auth,
            profile: Profile::default(),
            chats: placeholder_chats(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::info!("⚙️ Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn backend(&self) -> PlaceholderBackend {
        PlaceholderBackend::new(self.profile.clone(), self.chats.clone())
    }
}
