use super::super::onboarding_app::App;
use super::content::{build_info_panel, build_screen_lines, expected_actions, status_message};
use super::sidebar::build_history_sidebar;

/// Plain-text rendering of the current screen, for logs and snapshot tests.
pub fn dump_screen(app: &App) -> String {
    let screen = app.current_screen();
    let lines = build_screen_lines(app);
    let hint = lines
        .first()
        .cloned()
        .unwrap_or_else(|| "🧭 Screen: (unknown)".to_string());
    let body = if lines.len() > 1 {
        lines[1..].join("\n")
    } else {
        "(no body content)".to_string()
    };

    format!(
        "SCREEN: {}\n\n- Header: Messenger\n- Hint line: {}\n- Body contents:\n{}\n- History:\n{}\n- Info:\n{}\n- Status: {}\n- Expected user actions (keys): {}\n",
        screen.title(),
        hint,
        body,
        build_history_sidebar(app),
        build_info_panel(app),
        status_message(app),
        expected_actions(screen)
    )
}
