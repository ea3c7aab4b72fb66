use super::super::onboarding_app::{App, ButtonAction, Control, ScreenView};
use crate::widgets::{button, chat_row, focus_marker, mask_secret};
use messenger_flow::{NavigationOrigin, RegistrationDraft, ScreenId};

/// Lines for the center panel. The first line is always the screen hint.
pub(super) fn build_screen_lines(app: &App) -> Vec<String> {
    let screen = app.current_screen();
    let mut lines = vec![format!("🧭 Screen: {}", screen.title())];

    let Some(view) = app.flow.renderer().view() else {
        lines.push("(screen not rendered)".to_string());
        return lines;
    };

    if let Some(origin) = view.origin {
        lines.push(format!("Came from: {}", origin_label(origin)));
    }
    lines.push(String::new());

    if view.screen == ScreenId::ChatList {
        if view.chats.is_empty() {
            lines.push("No chats yet".to_string());
        }
        lines.extend(view.chats.iter().map(chat_row));
        lines.push(String::new());
    }

    lines.extend(control_lines(view));
    lines
}

fn control_lines(view: &ScreenView) -> Vec<String> {
    let mut lines = Vec::new();
    let mut nav_divider = false;
    for (index, control) in view.controls.iter().enumerate() {
        let focused = index == view.focus;
        let marker = focus_marker(focused);
        match control {
            Control::Field { id, input } => {
                lines.push(format!(
                    "{}{}: {}",
                    marker,
                    id.placeholder(),
                    input.display(focused)
                ));
            }
            Control::Button(ButtonAction::Save) if !view.save_visible => {}
            Control::Button(action @ ButtonAction::Navigate(nav)) => {
                if nav.is_bottom_nav() && !nav_divider {
                    lines.push("──────────".to_string());
                    nav_divider = true;
                }
                lines.push(format!("{}{}", marker, button(action.label())));
            }
            Control::Button(action) => {
                lines.push(format!("{}{}", marker, button(action.label())));
            }
        }
    }
    lines
}

fn origin_label(origin: NavigationOrigin) -> &'static str {
    match origin {
        NavigationOrigin::FromLogin => "login",
        NavigationOrigin::FromRegistration => "registration",
    }
}

pub(super) fn build_info_panel(app: &App) -> String {
    let mut lines = Vec::new();
    let navigator = app.flow.navigator();
    lines.push(format!("Depth: {}", navigator.depth()));
    if let Ok(entry) = navigator.current() {
        lines.push(format!("Entry: {}", entry));
    }

    let draft = app.flow.draft();
    if *draft != RegistrationDraft::default() {
        lines.push(String::new());
        lines.push("Registration:".to_string());
        lines.push(format!("Email: {}", or_dash(&draft.email)));
        lines.push(format!("Login: {}", or_dash(&draft.login)));
        lines.push(format!("Phone: {}", or_dash(&draft.phone)));
        lines.push(format!("Password: {}", mask_secret(&draft.password)));
    }

    if app.current_screen() == ScreenId::ProfileSettings {
        let snapshot = app.flow.tracker().snapshot();
        lines.push(String::new());
        lines.push("Saved profile:".to_string());
        lines.push(format!("Nickname: {}", snapshot.original_nickname));
        lines.push(format!("Phone: {}", snapshot.original_phone));
        if snapshot.photo_changed {
            lines.push("Photo: changed".to_string());
        }
        let state = if app.save_visible() {
            "🟡 Unsaved changes"
        } else {
            "🟢 Up to date"
        };
        lines.push(state.to_string());
    }
    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub(super) fn expected_actions(screen: ScreenId) -> String {
    let base = "Tab/↓: next  Shift+Tab/↑: previous  Enter: press  Esc: back  Ctrl+C: quit";
    if screen.fields().is_empty() {
        format!("{base}  q: quit")
    } else {
        format!("{base}  |  Type to edit  Ctrl+U: clear")
    }
}

pub(super) fn status_message(app: &App) -> String {
    match &app.error_message {
        Some(err) => format!("❌ {}", err),
        None => app.status_message.clone(),
    }
}
