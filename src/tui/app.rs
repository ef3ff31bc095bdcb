//! Application state and key handling.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use rewind_toe_core::{Controller, Position, ViewEvent};
use tracing::{debug, instrument};

use super::input::{digit_to_position, move_cursor};
use super::ui::ScreenLayout;
use crate::config::Settings;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows select a move-list entry.
    MoveList,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// View-local state that never reaches the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Highlighted square.
    pub cursor: Position,
    /// Pane with keyboard focus.
    pub focus: Focus,
    /// Highlighted move-list entry.
    pub selected: usize,
    /// Show 1-9 hints in empty squares.
    pub show_coordinates: bool,
}

impl UiState {
    /// The highlighted move-list entry, if the list has focus.
    pub fn list_selection(&self) -> Option<usize> {
        (self.focus == Focus::MoveList).then_some(self.selected)
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    ui: UiState,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: Controller::new(),
            ui: UiState {
                cursor: Position::Center,
                focus: Focus::Board,
                selected: 0,
                show_coordinates: *settings.show_coordinates(),
            },
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The view-local state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let event = match (self.ui.focus, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => {
                self.should_quit = true;
                None
            }
            (_, KeyCode::Tab) => {
                self.ui.focus = self.ui.focus.toggle();
                self.ui.selected = self.controller.game().current_step();
                None
            }
            (_, KeyCode::Char(c)) if digit_to_position(c).is_some() => {
                digit_to_position(c).map(ViewEvent::CellClicked)
            }
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                Some(ViewEvent::CellClicked(self.ui.cursor))
            }
            (Focus::Board, _) => {
                self.ui.cursor = move_cursor(self.ui.cursor, key);
                None
            }
            (Focus::MoveList, KeyCode::Up) => {
                self.ui.selected = self.ui.selected.saturating_sub(1);
                None
            }
            (Focus::MoveList, KeyCode::Down) => {
                let last = self.controller.game().history().len() - 1;
                self.ui.selected = (self.ui.selected + 1).min(last);
                None
            }
            (Focus::MoveList, KeyCode::Enter | KeyCode::Char(' ')) => {
                Some(ViewEvent::HistoryJump(self.ui.selected))
            }
            (Focus::MoveList, _) => None,
        };

        if let Some(event) = event {
            self.apply(event);
        }
    }

    /// Handles a left click at a screen coordinate.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) {
        let screen = ScreenLayout::new(area);

        if let Some(pos) = screen.cell_at(column, row) {
            self.ui.focus = Focus::Board;
            self.ui.cursor = pos;
            self.apply(ViewEvent::CellClicked(pos));
        } else if let Some(step) = screen
            .move_row_at(column, row, screen.move_list_offset(self.ui.list_selection()))
            .filter(|step| *step < self.controller.game().history().len())
        {
            self.ui.focus = Focus::MoveList;
            self.apply(ViewEvent::HistoryJump(step));
        }
    }

    fn apply(&mut self, event: ViewEvent) {
        match self.controller.dispatch(event) {
            Some(outcome) => debug!(%outcome, "Cell click handled"),
            None => debug!(?event, "Jump handled"),
        }
        self.ui.selected = self.controller.game().current_step();
    }
}
