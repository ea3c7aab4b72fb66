//! Application state for the onboarding TUI.

mod app;
mod view;

pub use app::{App, InputResult};
pub use view::{ButtonAction, Control, ScreenView, TerminalRenderer};
