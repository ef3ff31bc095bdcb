//! Command-line interface for rewind_toe.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Toe - tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "rewind_toe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the settings file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Apply a scripted sequence of events and print the final state
    Replay {
        /// Print the render snapshot as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Path to the settings file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Events: a cell index 0-8 clicks that cell, @N jumps to step N
        #[arg(required = true)]
        events: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["rewind_toe", "replay", "--json", "0", "4", "@1"]).unwrap();
        match cli.command {
            Command::Replay {
                json,
                config,
                events,
            } => {
                assert!(json);
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert_eq!(events, ["0", "4", "@1"]);
            }
            Command::Play { .. } => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_requires_events() {
        assert!(Cli::try_parse_from(["rewind_toe", "replay"]).is_err());
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from(["rewind_toe", "play", "-c", "custom.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { config } if config == PathBuf::from("custom.toml")
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
