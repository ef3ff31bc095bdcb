//! Stateless UI rendering for the terminal view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_toe_core::{Player, Position, RenderSnapshot, Square};

use super::app::{Focus, UiState};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// One rect per square, in board order.
    pub cells: [Rect; 9],
    /// Horizontal rules between board rows.
    pub row_rules: [Rect; 2],
    /// Vertical rules between columns, two per row.
    pub col_rules: [Rect; 6],
    /// Move list, including its border.
    pub moves: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(13),    // Board + moves
                Constraint::Length(3),  // Status
                Constraint::Length(1),  // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(28)])
            .split(chunks[1]);

        let board = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);

        let mut cells = [Rect::default(); 9];
        let mut col_rules = [Rect::default(); 6];
        let mut row_rules = [Rect::default(); 2];
        for row in 0..3u16 {
            let y = board.y + row * (CELL_HEIGHT + 1);
            for col in 0..3u16 {
                let x = board.x + col * (CELL_WIDTH + 1);
                cells[usize::from(row * 3 + col)] = clip(Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT), area);
                if col < 2 {
                    col_rules[usize::from(row * 2 + col)] =
                        clip(Rect::new(x + CELL_WIDTH, y, 1, CELL_HEIGHT), area);
                }
            }
            if row < 2 {
                row_rules[usize::from(row)] =
                    clip(Rect::new(board.x, y + CELL_HEIGHT, BOARD_WIDTH, 1), area);
            }
        }

        Self {
            title: chunks[0],
            cells,
            row_rules,
            col_rules,
            moves: body[1],
            status: chunks[2],
            help: chunks[3],
        }
    }

    /// Returns the square under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Returns the first move-list entry shown when `selected` is highlighted.
    ///
    /// The selection sits on the last visible row once it would fall below
    /// the box.
    pub fn move_list_offset(&self, selected: Option<usize>) -> usize {
        let visible = usize::from(self.move_rows().height).max(1);
        selected.map_or(0, |step| step.saturating_sub(visible - 1))
    }

    /// Returns the move-list entry under a screen coordinate, given the list's
    /// scroll `offset`.
    ///
    /// The result may exceed the number of entries; callers bound it.
    pub fn move_row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        let inner = self.move_rows();
        contains(inner, column, row).then(|| offset + usize::from(row - inner.y))
    }

    fn move_rows(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.moves)
    }
}

/// Draws one frame.
pub fn draw(frame: &mut Frame, snapshot: &RenderSnapshot, ui: &UiState) {
    let screen = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe - time travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, screen.title);

    for pos in Position::ALL {
        draw_cell(frame, screen.cells[pos.to_index()], snapshot, ui, pos);
    }
    for rule in screen.row_rules {
        let line = "─".repeat(usize::from(rule.width));
        frame.render_widget(
            Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
            rule,
        );
    }
    for rule in screen.col_rules {
        frame.render_widget(
            Paragraph::new(vec![Line::from("│"); usize::from(rule.height)])
                .style(Style::default().fg(Color::DarkGray)),
            rule,
        );
    }

    let offset = screen.move_list_offset(ui.list_selection());
    draw_moves(frame, screen.moves, offset, snapshot, ui);

    let status_style = if snapshot.winning_line.is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(snapshot.status.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, screen.status);

    let help = Paragraph::new("arrows/1-9 move · enter place · tab history · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot, ui: &UiState, pos: Position) {
    let (symbol, base_style) = match snapshot.board.get(pos) {
        Square::Empty if ui.show_coordinates => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = snapshot
        .winning_line
        .is_some_and(|line| line.contains(&pos));
    let style = if ui.focus == Focus::Board && pos == ui.cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(
    frame: &mut Frame,
    area: Rect,
    offset: usize,
    snapshot: &RenderSnapshot,
    ui: &UiState,
) {
    let items: Vec<ListItem> = snapshot
        .moves
        .iter()
        .map(|entry| {
            if entry.step == snapshot.current_step {
                ListItem::new(format!("• {}", entry.label))
                    .style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(format!("  {}", entry.label))
            }
        })
        .collect();

    let border_style = if ui.focus == Focus::MoveList {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black));

    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(ui.list_selection());
    frame.render_stateful_widget(list, area, &mut state);
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    rect.intersection(bounds)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use rewind_toe_core::{Controller, ViewEvent};

    fn ui_state() -> UiState {
        UiState {
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_coordinates: true,
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn render(snapshot: &RenderSnapshot, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, snapshot, ui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draws_status_and_move_list() {
        let mut controller = Controller::new();
        controller.dispatch(ViewEvent::CellClicked(Position::TopLeft));
        let text = render(&controller.snapshot(), &ui_state());

        assert!(text.contains("Next player: O"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("• Go to move #1"));
    }

    #[test]
    fn test_draws_winner() {
        let mut controller = Controller::new();
        for index in [0, 4, 1, 3, 2] {
            let pos = Position::from_index(index).unwrap();
            controller.dispatch(ViewEvent::CellClicked(pos));
        }
        let text = render(&controller.snapshot(), &ui_state());
        assert!(text.contains("Winner: X"));
    }

    #[test]
    fn test_layout_cells_do_not_overlap() {
        let screen = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        for (i, a) in screen.cells.iter().enumerate() {
            assert!(a.area() > 0);
            for b in &screen.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_testing() {
        let screen = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let center = screen.cells[4];
        assert_eq!(screen.cell_at(center.x + 1, center.y + 1), Some(Position::Center));
        assert_eq!(screen.cell_at(0, 0), None);

        let first_row = screen.moves.y + 1;
        assert_eq!(screen.move_row_at(screen.moves.x + 2, first_row, 0), Some(0));
        assert_eq!(screen.move_row_at(screen.moves.x + 2, first_row + 2, 0), Some(2));
        assert_eq!(screen.move_row_at(screen.moves.x, first_row, 0), None);
    }

    #[test]
    fn test_scrolled_move_list_matches_hit_testing() {
        // Nine moves without a winner give ten entries.
        let mut controller = Controller::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            let pos = Position::from_index(index).unwrap();
            controller.dispatch(ViewEvent::CellClicked(pos));
        }
        let snapshot = controller.snapshot();
        let ui = UiState {
            focus: Focus::MoveList,
            selected: 9,
            ..ui_state()
        };

        let area = Rect::new(0, 0, 80, 10);
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal.draw(|f| draw(f, &snapshot, &ui)).unwrap();
        let buffer = terminal.backend().buffer();

        let screen = ScreenLayout::new(area);
        let inner = Block::default().borders(Borders::ALL).inner(screen.moves);
        assert!(usize::from(inner.height) < snapshot.moves.len());
        let offset = screen.move_list_offset(ui.list_selection());
        assert!(offset > 0);

        for y in inner.y..inner.y + inner.height {
            let step = screen.move_row_at(inner.x + 1, y, offset).unwrap();
            let row: String = (inner.x..inner.x + inner.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            assert!(
                row.contains(&snapshot.moves[step].label),
                "row {y} shows {row:?}, expected step {step}"
            );
        }
    }
}
