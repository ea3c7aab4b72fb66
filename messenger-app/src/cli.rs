//! CLI argument parsing for the messenger client
//!
//! Makes the TUI the default entry point when no subcommand is provided.

use clap::{Parser, Subcommand};
use messenger_flow::ScreenId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "messenger")]
#[command(about = "💬 Messenger - sign-in and onboarding screens")]
#[command(long_about = "💬 Messenger - sign-in and onboarding screens\n\n\
    Run without arguments to open the screens in the terminal.\n\
    Use `walk` to replay a sequence of steps without a terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Screen to start on, e.g. auth or chat-list (overrides the config file)
    #[arg(long, global = true)]
    pub start: Option<ScreenId>,

    /// JSON config file with the start screen, profile and chats
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of the default under the temp dir
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Dump every screen as text to stdout and exit
    #[arg(long, global = true)]
    pub dump_screens: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 🚶 Replay steps headlessly and print where they lead
    Walk {
        /// Action names (login, next, verify, ...), back, photo, save or field=value
        #[arg(required = true)]
        steps: Vec<String>,

        /// Print the trail as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["messenger"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.start.is_none());
        assert!(!cli.dump_screens);
    }

    #[test]
    fn start_takes_kebab_case_screen() {
        let cli = Cli::try_parse_from(["messenger", "--start", "chat-list"]).expect("parse");
        assert_eq!(cli.start, Some(ScreenId::ChatList));
        assert!(Cli::try_parse_from(["messenger", "--start", "lobby"]).is_err());
    }

    #[test]
    fn walk_collects_steps() {
        let cli = Cli::try_parse_from(["messenger", "walk", "login", "code=1234", "verify", "--json"])
            .expect("parse");
        match cli.command {
            Some(Command::Walk { steps, json }) => {
                assert_eq!(steps, vec!["login", "code=1234", "verify"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn walk_needs_at_least_one_step() {
        assert!(Cli::try_parse_from(["messenger", "walk"]).is_err());
    }
}
