use messenger_app::config::AppConfig;
use messenger_app::walk::{parse_steps, render_text, walk};
use messenger_flow::ScreenId;

fn run(start: ScreenId, steps: &[&str]) -> messenger_app::walk::WalkReport {
    let steps = parse_steps(steps).expect("parse steps");
    walk(&AppConfig::default(), start, &steps).expect("walk")
}

#[test]
fn login_edit_save_then_back_to_root() {
    let report = run(
        ScreenId::Auth,
        &["login", "code=1234", "verify", "nickname=Neo", "save", "back", "back"],
    );

    let screens: Vec<ScreenId> = report.trail.iter().map(|t| t.screen).collect();
    assert_eq!(
        screens,
        vec![
            ScreenId::CodeVerification,
            ScreenId::CodeVerification,
            ScreenId::ProfileSettings,
            ScreenId::ProfileSettings,
            ScreenId::ProfileSettings,
            ScreenId::Auth,
            ScreenId::Auth,
        ]
    );
    assert_eq!(report.trail[2].depth, 2);
    assert_eq!(report.trail[2].save_visible, Some(false));
    assert_eq!(report.trail[3].save_visible, Some(true));
    assert_eq!(report.trail[4].save_visible, Some(false));
    assert!(report.root_reached);
    assert_eq!(report.errors(), 0);
    assert_eq!(report.final_screen(), ScreenId::Auth);
}

#[test]
fn steps_after_root_back_are_not_run() {
    let report = run(ScreenId::Settings, &["back", "nav-chats"]);
    assert_eq!(report.trail.len(), 1);
    assert!(report.root_reached);
}

#[test]
fn failed_steps_are_recorded_and_walk_continues() {
    let report = run(ScreenId::Auth, &["verify", "email=neo@example.com", "register-link"]);
    assert_eq!(report.errors(), 2);
    assert!(report.trail[0].error.is_some());
    assert_eq!(
        report.trail[1].error.as_deref(),
        Some("email is not on the auth screen")
    );
    assert_eq!(report.final_screen(), ScreenId::EmailInput);
}

#[test]
fn text_trail_lists_steps_and_history() {
    let report = run(ScreenId::Auth, &["register-link", "next", "verify"]);
    let text = render_text(&report);
    assert!(text.starts_with("start: auth\n"));
    assert!(text.contains(" 3. verify -> login-phone [depth 3]"));
    assert!(text.contains("history: auth > email-input > login-phone"));
}

#[test]
fn json_report_uses_kebab_case() {
    let report = run(ScreenId::Auth, &["login"]);
    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["start"], "auth");
    assert_eq!(json["history"][1]["origin"], "from-login");
    assert_eq!(json["trail"][0]["step"], "login");
    assert!(json["trail"][0].get("error").is_none());
}
