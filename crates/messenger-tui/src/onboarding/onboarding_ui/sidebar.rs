use super::super::onboarding_app::App;

/// Back stack from the root down to the current screen.
pub(super) fn build_history_sidebar(app: &App) -> String {
    let history = app.flow.navigator().history();
    let last = history.len().saturating_sub(1);
    history
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = if index == last { "▶" } else { "✓" };
            format!("{} {}", marker, entry.screen.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
