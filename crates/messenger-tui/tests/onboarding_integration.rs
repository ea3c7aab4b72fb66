use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use messenger_flow::backend::{Capability, Operation};
use messenger_flow::{FakeBackend, PlaceholderBackend, ScreenId};
use messenger_tui::onboarding::dump_all_screens;
use messenger_tui::onboarding::onboarding_app::{App, InputResult};
use messenger_tui::onboarding::onboarding_ui::{draw, dump_screen};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_input(key(KeyCode::Char(ch)));
    }
}

fn app_at(root: ScreenId, backend: FakeBackend) -> App {
    App::new(Box::new(backend), root).expect("start app")
}

#[test]
fn registration_by_keyboard_reaches_profile() {
    let backend = FakeBackend::new();
    let mut app = app_at(ScreenId::Auth, backend.clone());

    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_screen(), ScreenId::EmailInput);

    type_text(&mut app, "neo@example.com");
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_screen(), ScreenId::CodeVerification);

    type_text(&mut app, "1234");
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_screen(), ScreenId::LoginPhone);

    type_text(&mut app, "neo");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "+1 555");
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_screen(), ScreenId::Password);

    type_text(&mut app, "zion");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "zion");
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_screen(), ScreenId::ProfileSettings);
    assert!(app.error_message.is_none());

    let screens: Vec<ScreenId> = app
        .flow
        .navigator()
        .history()
        .iter()
        .map(|entry| entry.screen)
        .collect();
    assert_eq!(
        screens,
        vec![
            ScreenId::Auth,
            ScreenId::EmailInput,
            ScreenId::LoginPhone,
            ScreenId::ProfileSettings
        ]
    );
    assert!(backend.operations().contains(&Operation::VerifyCode {
        code: "1234".to_string()
    }));
    assert_eq!(app.flow.draft().email, "neo@example.com");
    assert_eq!(app.flow.draft().password, "zion");
}

#[test]
fn editing_nickname_toggles_save() {
    let mut app = app_at(ScreenId::ProfileSettings, FakeBackend::new());
    assert!(!app.save_visible());

    app.handle_input(key(KeyCode::Char('x')));
    assert!(app.save_visible());

    app.handle_input(key(KeyCode::Backspace));
    assert!(!app.save_visible());
}

#[test]
fn change_photo_then_save_clears_dirty_state() {
    let mut app = app_at(ScreenId::ProfileSettings, FakeBackend::new());

    // nickname, phone, then the photo button
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));
    assert!(app.save_visible());

    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));
    assert!(!app.save_visible());
    assert_eq!(app.status_message, "💾 Profile saved");
}

#[test]
fn failed_save_reports_error_and_keeps_button() {
    let backend = FakeBackend::new();
    backend.fail(Capability::SaveProfile);
    let mut app = app_at(ScreenId::ProfileSettings, backend);

    app.handle_input(key(KeyCode::Char('!')));
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));

    assert!(app.save_visible());
    assert!(app.error_message.is_some());
}

#[test]
fn escape_walks_back_then_quits_at_root() {
    let mut app = app_at(ScreenId::Auth, FakeBackend::new());
    app.handle_input(key(KeyCode::Down));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_screen(), ScreenId::CodeVerification);

    assert_eq!(app.handle_input(key(KeyCode::Esc)), InputResult::Continue);
    assert_eq!(app.current_screen(), ScreenId::Auth);
    assert_eq!(app.handle_input(key(KeyCode::Esc)), InputResult::Quit);
}

#[test]
fn q_types_into_fields_but_quits_elsewhere() {
    let mut app = app_at(ScreenId::EmailInput, FakeBackend::new());
    assert_eq!(
        app.handle_input(key(KeyCode::Char('q'))),
        InputResult::Continue
    );

    let mut app = app_at(ScreenId::Settings, FakeBackend::new());
    assert_eq!(app.handle_input(key(KeyCode::Char('q'))), InputResult::Quit);
}

#[test]
fn draw_renders_title_and_history() {
    let app = app_at(ScreenId::ChatList, FakeBackend::new());
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
    terminal.draw(|f| draw(f, &app)).expect("draw");

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Messenger"));
    assert!(text.contains("History"));
}

#[test]
fn dump_lists_chats_and_bottom_nav() {
    let app = app_at(ScreenId::ChatList, FakeBackend::new());
    let dump = dump_screen(&app);
    assert!(dump.starts_with("SCREEN: Chats"));
    assert!(dump.contains("Чат 2: Привет!"));
    assert!(dump.contains("[ Settings ]"));
}

#[test]
fn dump_all_covers_every_screen() {
    let dumps = dump_all_screens(|| Box::new(PlaceholderBackend::default())).expect("dump");
    assert_eq!(dumps.len(), ScreenId::all().len());
}
