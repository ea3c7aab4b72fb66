use std::process::Command;

fn messenger(args: &[&str]) -> std::process::Output {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_file = dir.path().join("messenger.log");
    Command::new(env!("CARGO_BIN_EXE_messenger"))
        .arg("--log-file")
        .arg(&log_file)
        .args(args)
        .output()
        .expect("failed to run messenger binary")
}

#[test]
fn walk_json_reports_registration_progress() {
    let output = messenger(&[
        "walk",
        "register-link",
        "email=neo@example.com",
        "next",
        "verify",
        "--json",
    ]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("walk prints json");
    let history = report["history"].as_array().expect("history array");
    assert_eq!(history.len(), 3);
    assert_eq!(history[2]["screen"], "login-phone");
}

#[test]
fn unknown_step_fails_before_walking() {
    let output = messenger(&["walk", "teleport"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown step 'teleport'"));
}

#[test]
fn dump_screens_prints_every_title() {
    let output = messenger(&["--dump-screens"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for title in ["Sign In", "Verification Code", "Profile", "Chats", "Registration"] {
        assert!(stdout.contains(&format!("SCREEN: {}", title)), "{}", title);
    }
}

#[test]
fn start_flag_overrides_root() {
    let output = messenger(&["--start", "chat-list", "walk", "nav-settings"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("start: chat-list"));
    assert!(stdout.contains("nav-settings -> settings [depth 2]"));
}
