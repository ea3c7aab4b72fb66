//! Small, reusable UI helpers used by multiple screens.

use messenger_flow::ChatItem;

/// Marker drawn in front of the focused control.
pub fn focus_marker(focused: bool) -> &'static str {
    if focused {
        "▶ "
    } else {
        "  "
    }
}

pub fn button(label: &str) -> String {
    format!("[ {} ]", label)
}

/// One chat list row: time, name, then the last message.
pub fn chat_row(chat: &ChatItem) -> String {
    format!(
        "{:>5}  {}: {}",
        chat.timestamp, chat.chat_name, chat.last_message
    )
}

/// Bullets in place of each character, or `-` for an empty value.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        "•".repeat(value.chars().count())
    }
}
