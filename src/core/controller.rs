use tracing::{info, warn};

use crate::core::catalog::{LevelCatalog, LevelError};
use crate::core::grid::GridState;

/// What happened after a completed move, for the UI to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    None,
    NextLevel(usize),
    WrappedToFirst,
}

/// Owns the active level index and sequences loading, resets, and
/// advancement on victory.
pub struct LevelController {
    catalog: LevelCatalog,
    level_index: usize,
    grid: GridState,
}

impl LevelController {
    pub fn new(catalog: LevelCatalog) -> Result<LevelController, LevelError> {
        let (level_index, grid) = load_with_skip(&catalog, 0)?;
        Ok(LevelController { catalog, level_index, grid })
    }

    /// Loads the given level, applying the skip policy for player-less
    /// catalog entries.
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        let (resolved, grid) = load_with_skip(&self.catalog, index)?;
        self.level_index = resolved;
        self.grid = grid;
        Ok(())
    }

    /// Reloads the active level from the catalog, discarding all progress.
    pub fn reset(&mut self) -> Result<(), LevelError> {
        self.load_level(self.level_index)
    }

    /// Called after every completed move. On victory the next level loads
    /// immediately, wrapping to the first after the last.
    pub fn on_move_completed(&mut self) -> Result<Advance, LevelError> {
        if !self.grid.is_solved() {
            return Ok(Advance::None);
        }
        if self.level_index + 1 < self.catalog.len() {
            info!(level = self.level_index, "level complete, advancing");
            self.load_level(self.level_index + 1)?;
            Ok(Advance::NextLevel(self.level_index))
        } else {
            info!(level = self.level_index, "final level complete, restarting from the first level");
            self.load_level(0)?;
            Ok(Advance::WrappedToFirst)
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }
}

// Player-less catalog entries are recoverable: warn, try the next entry, and
// wrap to the first once the catalog is exhausted. Any failure after the wrap
// surfaces to the caller.
fn load_with_skip(catalog: &LevelCatalog, start: usize) -> Result<(usize, GridState), LevelError> {
    let len = catalog.len();
    let mut index = start;
    let mut wrapped = false;
    loop {
        let level = catalog
            .get(index)
            .ok_or(LevelError::IndexOutOfRange { index, len })?;
        match GridState::load(level) {
            Ok(grid) => return Ok((index, grid)),
            Err(LevelError::NoPlayer) if !wrapped => {
                if index + 1 < len {
                    warn!(level = index, "level has no player, trying the next level");
                    index += 1;
                } else {
                    warn!(level = index, "level has no player and none remain, falling back to the first level");
                    index = 0;
                    wrapped = true;
                }
            }
            Err(err) => return Err(err),
        }
    }
}
