use super::super::onboarding_app::App;
use super::content::{build_info_panel, build_screen_lines, expected_actions, status_message};
use super::sidebar::build_history_sidebar;
use messenger_flow::ScreenId;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let screen = app.current_screen();

    // Main layout: Title | Main Body | Key Legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(f.area());

    let (save_label, save_color) = if app.save_visible() {
        ("UNSAVED", Color::Yellow)
    } else {
        ("SAVED", Color::Green)
    };
    let mut title_spans = vec![
        Span::styled("Messenger", Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(screen.title(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::raw(format!("depth {}", app.flow.navigator().depth())),
    ];
    if screen == ScreenId::ProfileSettings {
        title_spans.push(Span::raw(" | "));
        title_spans.push(Span::styled(save_label, Style::default().fg(save_color)));
    }
    let title = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans));
    f.render_widget(title, main_chunks[0]);

    // Sidebar | Content | Info Panel
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(20),
                Constraint::Percentage(55),
                Constraint::Percentage(25),
            ]
            .as_ref(),
        )
        .split(main_chunks[1]);

    let sidebar = Paragraph::new(build_history_sidebar(app))
        .block(Block::default().borders(Borders::ALL).title("History"));
    f.render_widget(sidebar, body_chunks[0]);

    let list_items = build_screen_lines(app)
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let content =
        List::new(list_items).block(Block::default().borders(Borders::ALL).title(screen.title()));
    f.render_widget(content, body_chunks[1]);

    let info_panel = Paragraph::new(build_info_panel(app))
        .block(Block::default().borders(Borders::ALL).title("Info"));
    f.render_widget(info_panel, body_chunks[2]);

    let legend_text = format!("{}\n{}", status_message(app), expected_actions(screen));
    let legend =
        Paragraph::new(legend_text).block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[2]);
}
