// Terminal Sokoban with ratatui
// Controls: arrow keys to move, R to reset the level, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' empty.

mod console_interface;
mod core;
mod models;
#[cfg(test)]
mod test;

use std::fs;
use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use crate::core::{Advance, LevelCatalog, LevelController, MoveUpdate, attempt_move};
use crate::models::GameRenderState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // An optional path argument replaces the built-in catalog.
    let catalog = match std::env::args().nth(1) {
        Some(path) => LevelCatalog::from_json(&fs::read_to_string(path)?)?,
        None => LevelCatalog::builtin()?,
    };
    let mut controller = LevelController::new(catalog)?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut controller, &mut terminal);
    cleanup_terminal()?;
    result
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    // The alternate screen owns stdout, so logs go to a file instead.
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("pushbox.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_interactive(
    controller: &mut LevelController,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut notice: Option<String> = None;

    loop {
        render_game(terminal, &GameRenderState {
            grid: controller.grid(),
            level_index: controller.level_index(),
            notice: notice.clone(),
        })?;

        match handle_input()? {
            Quit => break,
            Move(direction) => {
                if let MoveUpdate::Moved(_) = attempt_move(controller.grid_mut(), direction) {
                    notice = match controller.on_move_completed()? {
                        Advance::None => None,
                        Advance::NextLevel(next) => {
                            Some(format!("Level complete! Advancing to level {}", next + 1))
                        }
                        Advance::WrappedToFirst => {
                            Some("Final level complete! Restarting from the first level".to_string())
                        }
                    };
                }
            }
            Reset => {
                controller.reset()?;
                notice = None;
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}
