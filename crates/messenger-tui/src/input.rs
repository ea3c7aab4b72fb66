//! Text field editing for the form screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single-line text input with cursor support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    value: String,
    /// Cursor position (byte index, always on a char boundary).
    cursor: usize,
    pub placeholder: String,
    /// Render as bullets instead of the typed text.
    pub masked: bool,
}

impl InputField {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
            masked: false,
        }
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    /// Text as it should appear on screen, with an optional cursor block.
    pub fn display(&self, with_cursor: bool) -> String {
        let (before, after) = self.value.split_at(self.cursor);
        let render = |s: &str| {
            if self.masked {
                "•".repeat(s.chars().count())
            } else {
                s.to_string()
            }
        };
        if with_cursor {
            format!("{}█{}", render(before), render(after))
        } else if self.value.is_empty() {
            format!("<{}>", self.placeholder)
        } else {
            render(&self.value)
        }
    }

    /// Handle an editing key. Returns true if the value or cursor changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.value.clear();
                self.cursor = 0;
                true
            }
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                true
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.value.len();
                true
            }
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.prev_boundary();
                true
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary();
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.value.remove(prev);
        self.cursor = prev;
        true
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_backspace_handle_multibyte_chars() {
        let mut field = InputField::new("Nickname");
        field.set_value("Ник");
        assert_eq!(field.cursor(), "Ник".len());

        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "Ни");

        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Char('x')));
        assert_eq!(field.value(), "Нxи");
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut field = InputField::new("Email");
        field.set_value("neo@example.com");
        assert!(field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn masked_display_hides_text() {
        let mut field = InputField::new("Password").masked(true);
        field.set_value("zion");
        assert_eq!(field.display(false), "••••");
        assert_eq!(field.display(true), "••••█");
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let field = InputField::new("Email");
        assert_eq!(field.display(false), "<Email>");
        assert_eq!(field.display(true), "█");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = InputField::new("Code");
        field.handle_key(key(KeyCode::Left));
        assert_eq!(field.cursor(), 0);
        field.set_value("12");
        field.handle_key(key(KeyCode::Right));
        assert_eq!(field.cursor(), 2);
        assert!(!field.handle_key(key(KeyCode::Delete)));
    }
}
