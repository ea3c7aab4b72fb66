use serde::{Deserialize, Serialize};

/// A read-only row of the chat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatItem {
    pub chat_name: String,
    pub last_message: String,
    pub timestamp: String,
}

impl ChatItem {
    pub fn new(
        chat_name: impl Into<String>,
        last_message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            chat_name: chat_name.into(),
            last_message: last_message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Rows shown until a real chat history source is wired in.
pub fn placeholder_chats() -> Vec<ChatItem> {
    vec![
        ChatItem::new("Чат 1", "Последнее сообщение", "12:00"),
        ChatItem::new("Чат 2", "Привет!", "12:30"),
        ChatItem::new("Чат 3", "Как дела?", "13:00"),
    ]
}
