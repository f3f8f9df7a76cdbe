use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

use crate::core::{Cell, Direction, GridState, Occupant, Vec2};
use crate::models::GameRenderState;

// The grid only changes on discrete moves, so ~10 polls per second is plenty.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_grid_to_string(state.grid);
        let game_paragraph = Paragraph::new(game_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Level {}", state.level_index + 1)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Status bar
        let instructions = match &state.notice {
            Some(notice) => notice.clone(),
            None => "Arrow keys to move, R to reset, Q to quit".to_string(),
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_grid_to_string(grid: &GridState) -> String {
    let mut result = String::new();
    for i in 0..grid.height() {
        for j in 0..grid.width() {
            if let Some(cell) = grid.cell_at(Vec2 { i, j }) {
                result.push(tile_char(cell));
            }
        }
        result.push('\n');
    }
    result
}

pub fn tile_char(cell: Cell) -> char {
    match (cell.occupant, cell.goal) {
        (Occupant::Wall, _) => '#',
        (Occupant::Box, false) => '$',
        (Occupant::Player, false) => '@',
        (Occupant::Empty, true) => '.',
        (Occupant::Player, true) => '+',
        (Occupant::Box, true) => '*',
        (Occupant::Empty, false) => ' ',
    }
}

pub enum ConsoleInput {
    Move(Direction),
    Reset,
    Quit,
    Timeout,
    Unknown,
}

/// Maps raw key events to abstract inputs. Only the four arrow keys move the
/// player; everything unrecognized is ignored.
pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                KeyCode::Up => ConsoleInput::Move(Direction::Up),
                KeyCode::Down => ConsoleInput::Move(Direction::Down),
                KeyCode::Left => ConsoleInput::Move(Direction::Left),
                KeyCode::Right => ConsoleInput::Move(Direction::Right),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
