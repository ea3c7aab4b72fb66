//! 💬 Messenger client entry point.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod walk;

use anyhow::Context;
use clap::Parser;
use messenger_tui::onboarding::{self, onboarding_app::App};

pub fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init_with(cli.log_file.clone());

    let config = config::AppConfig::load(cli.config.as_deref())?;
    let start = cli.start.unwrap_or(config.start);

    if cli.dump_screens {
        for dump in onboarding::dump_all_screens(|| Box::new(config.backend()))? {
            println!("{}", dump);
        }
        return Ok(());
    }

    match &cli.command {
        // No subcommand = open the screens in the terminal
        None => {
            log::info!("💬 Launching messenger TUI at {}", start);
            let mut app = App::new(Box::new(config.backend()), start)
                .with_context(|| format!("Failed to open {}", start.title()))?;
            onboarding::run(&mut app)?;
        }
        Some(cli::Command::Walk { steps, json }) => {
            let steps = walk::parse_steps(steps.as_slice())?;
            log::info!("🚶 Walking {} steps from {}", steps.len(), start);
            let report = walk::walk(&config, start, &steps)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", walk::render_text(&report));
            }
        }
    }
    Ok(())
}
