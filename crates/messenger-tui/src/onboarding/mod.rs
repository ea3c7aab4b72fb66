//! Onboarding TUI: sign-in, registration, profile and chat screens.

pub mod onboarding_app;
pub mod onboarding_ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use messenger_flow::{ClientBackend, ScreenId};
use onboarding_app::{App, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the onboarding screens in the terminal until the user quits.
pub fn run(app: &mut App) -> Result<()> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "No TTY detected. The TUI requires an interactive terminal.\n\
             Try `messenger walk ...` for a headless run."
        );
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| onboarding_ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_input(key) == InputResult::Quit {
                    log::info!("👋 quit from {}", app.current_screen());
                    return Ok(());
                }
            }
        }
    }
}

/// Dump every screen as text, each started as a fresh root.
pub fn dump_all_screens<F>(mut backend: F) -> Result<Vec<String>>
where
    F: FnMut() -> Box<dyn ClientBackend>,
{
    let mut dumps = Vec::new();
    for screen in ScreenId::all() {
        let app = App::new(backend(), *screen)?;
        let dump = onboarding_ui::dump_screen(&app);
        log::info!("{}", dump);
        dumps.push(dump);
    }
    Ok(dumps)
}
