//! Key handling for the onboarding screens.

use super::view::{ButtonAction, Control, TerminalRenderer};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use messenger_flow::{ClientBackend, Flow, FlowError, FlowResult, ScreenId};

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub struct App {
    pub flow: Flow<TerminalRenderer>,
    pub status_message: String,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(backend: Box<dyn ClientBackend>, root: ScreenId) -> FlowResult<Self> {
        let mut flow = Flow::new(TerminalRenderer::new(), backend);
        flow.start(root)?;
        Ok(Self {
            flow,
            status_message: format!("🧭 {}", root.title()),
            error_message: None,
        })
    }

    /// Screen on top of the stack. Falls back to the auth screen only if the
    /// flow was never started, which `new` rules out.
    pub fn current_screen(&self) -> ScreenId {
        self.flow.current_screen().unwrap_or(ScreenId::Auth)
    }

    pub fn save_visible(&self) -> bool {
        self.flow
            .renderer()
            .view()
            .map(|view| view.save_visible)
            .unwrap_or(false)
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputResult::Quit;
        }

        match key.code {
            KeyCode::Esc => return self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Enter => self.activate(),
            _ => {
                if !self.edit_focused_field(key) && key.code == KeyCode::Char('q') {
                    return InputResult::Quit;
                }
            }
        }
        InputResult::Continue
    }

    fn go_back(&mut self) -> InputResult {
        match self.flow.back() {
            Ok(popped) => {
                self.error_message = None;
                self.status_message = format!("⬅️ Left {}", popped.screen.title());
                InputResult::Continue
            }
            Err(err) if err.is_empty_stack() => InputResult::Quit,
            Err(err) => {
                self.report(err);
                InputResult::Continue
            }
        }
    }

    fn move_focus(&mut self, delta: isize) {
        if let Some(view) = self.flow.renderer_mut().view_mut() {
            view.move_focus(delta);
        }
    }

    fn activate(&mut self) {
        let focused = self
            .flow
            .renderer()
            .view()
            .and_then(|view| view.focused())
            .map(|control| match control {
                Control::Button(button) => Some(*button),
                Control::Field { .. } => None,
            });
        let button = match focused {
            Some(Some(button)) => button,
            Some(None) => {
                self.move_focus(1);
                return;
            }
            None => return,
        };

        let result = match button {
            ButtonAction::Navigate(action) => self.flow.dispatch(action).map(|outcome| {
                format!("🧭 {} → {}", action.label(), outcome.screen().title())
            }),
            ButtonAction::ChangePhoto => self
                .flow
                .photo_changed()
                .map(|_| "🖼️ Photo changed".to_string()),
            ButtonAction::Save => self
                .flow
                .save_profile()
                .map(|_| "💾 Profile saved".to_string()),
        };
        match result {
            Ok(status) => {
                self.error_message = None;
                self.status_message = status;
            }
            Err(err) => self.report(err),
        }
    }

    /// Feed `key` to the focused text field. Returns false when no field has
    /// focus so the caller can treat the key as a command.
    fn edit_focused_field(&mut self, key: KeyEvent) -> bool {
        let changed = match self
            .flow
            .renderer_mut()
            .view_mut()
            .and_then(|view| view.focused_input_mut())
        {
            Some(input) => input.handle_key(key),
            None => return false,
        };
        if changed && self.current_screen() == ScreenId::ProfileSettings {
            if let Err(err) = self.flow.field_changed() {
                self.report(err);
            }
        }
        true
    }

    fn report(&mut self, err: FlowError) {
        log::warn!("{}", err);
        self.status_message = "❌ Action failed".to_string();
        self.error_message = Some(err.to_string());
    }
}
