//! Drawing for the onboarding TUI.

mod content;
mod dump;
mod render;
mod sidebar;

pub use dump::dump_screen;
pub use render::draw;
