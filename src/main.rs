//! Rewind Toe - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_toe::Settings;
use rewind_toe::cli::{Cli, Command};
use rewind_toe::replay::{JsonView, TextView};
use rewind_toe::script::{parse_script, run_script};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(&config),
        Command::Replay {
            json,
            config,
            events,
        } => run_replay(&config, json, &events),
    }
}

/// Run the interactive terminal game
fn run_play(config: &Path) -> Result<()> {
    let settings = Settings::load_or_default(config)?;
    rewind_toe::tui::run(&settings)
}

/// Apply a script and print the final snapshot
fn run_replay(config: &Path, json: bool, tokens: &[String]) -> Result<()> {
    let settings = Settings::load_or_default(config)?;
    init_stderr_logging(&settings);

    let events = parse_script(tokens)?;
    let controller = run_replay_events(&events)?;

    let stdout = std::io::stdout().lock();
    if json {
        controller
            .render_to(&mut JsonView::new(stdout))
            .context("Failed to write JSON snapshot")?;
    } else {
        controller
            .render_to(&mut TextView::new(stdout))
            .context("Failed to write snapshot")?;
    }
    Ok(())
}

#[instrument(skip_all, fields(count = events.len()))]
fn run_replay_events(
    events: &[rewind_toe_core::ViewEvent],
) -> Result<rewind_toe_core::Controller> {
    info!("Replaying script");
    let controller = run_script(events)?;
    info!(step = controller.game().current_step(), "Replay finished");
    Ok(controller)
}

fn init_stderr_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
