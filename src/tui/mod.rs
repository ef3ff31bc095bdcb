//! Interactive terminal view.

mod app;
mod input;
mod ui;

pub use app::{App, Focus, UiState};
pub use ui::ScreenLayout;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use rewind_toe_core::{GameView, RenderSnapshot};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::Settings;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Draws snapshots into the terminal, using the app's cursor and focus.
struct TerminalView<'a> {
    terminal: &'a mut CrosstermTerminal,
    ui: &'a UiState,
}

impl GameView for TerminalView<'_> {
    type Error = io::Error;

    fn render(&mut self, snapshot: &RenderSnapshot) -> Result<(), Self::Error> {
        let state = self.ui;
        self.terminal.draw(|frame| ui::draw(frame, snapshot, state))?;
        Ok(())
    }
}

/// Runs the interactive game until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    init_file_logging(settings)?;
    info!("Starting terminal view");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal view failed");
    }
    info!("Terminal view closed");
    res
}

/// Enters raw mode and the alternate screen.
///
/// If a later step fails, raw mode is switched off again before returning.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    undo_on_error(terminal, restore_terminal_modes).context("Failed to set up terminal")
}

/// Best-effort teardown after a failed setup.
fn restore_terminal_modes() {
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture) {
        error!(error = ?err, "Failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        error!(error = ?err, "Failed to disable raw mode");
    }
}

/// Calls `undo` when `result` is an error, then passes the result through.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Event loop: render, wait for input, apply it.
#[instrument(skip_all)]
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        app.controller().render_to(&mut TerminalView {
            terminal: &mut *terminal,
            ui: app.ui(),
        })?;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_click(mouse.column, mouse.row, area);
            }
            _ => {}
        }
    }
}

/// Sends tracing output to the configured log file so it does not clobber the screen.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_undo_runs_only_on_failed_setup() {
        let undone = Cell::new(false);
        let failed: io::Result<()> = Err(io::Error::other("no tty"));
        assert!(undo_on_error(failed, || undone.set(true)).is_err());
        assert!(undone.get());

        let undone = Cell::new(false);
        assert_eq!(undo_on_error(Ok(7), || undone.set(true)).unwrap(), 7);
        assert!(!undone.get());
    }
}
