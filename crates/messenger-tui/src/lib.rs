//! Messenger TUI.
//!
//! Terminal front end for the onboarding flow in `messenger-flow`.

pub mod input;
pub mod onboarding;
pub mod widgets;
