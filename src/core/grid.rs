use crate::core::catalog::{LevelError, decode_cell, encode_cell};
use crate::core::{Cell, Level, Occupant, Vec2};

/// The live grid for the active level: per-cell occupancy plus the set of
/// goal coordinates captured at load time. The goal set never changes after
/// load; only occupancy does.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GridState {
    grid: Vec<Vec<Cell>>,
    goals: Vec<Vec2>,
}

impl GridState {
    /// Deep-copies the level into a fresh grid, so replays never corrupt the
    /// catalog's data. Rejects levels without a player tile.
    pub fn load(level: &Level) -> Result<GridState, LevelError> {
        let max_width = level.rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(level.rows.len());
        let mut goals: Vec<Vec2> = Vec::new();
        let mut has_player = false;

        for (i, source_row) in level.rows.iter().enumerate() {
            let mut row = Vec::with_capacity(max_width);
            for (j, &code) in source_row.iter().enumerate() {
                let cell = decode_cell(code);
                if cell.goal {
                    goals.push(Vec2 { i: i as i32, j: j as i32 });
                }
                if cell.occupant == Occupant::Player {
                    has_player = true;
                }
                row.push(cell);
            }
            // Pad ragged rows so every row has the same width
            while row.len() < max_width {
                row.push(Cell { occupant: Occupant::Empty, goal: false });
            }
            grid.push(row);
        }

        if !has_player {
            return Err(LevelError::NoPlayer);
        }
        Ok(GridState { grid, goals })
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    fn in_bounds(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && pos.i < self.height() && pos.j < self.width()
    }

    pub fn cell_at(&self, pos: Vec2) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.grid[pos.i as usize][pos.j as usize])
        } else {
            None
        }
    }

    /// `None` is the out-of-bounds sentinel; callers treat it as blocked.
    pub fn occupant_at(&self, pos: Vec2) -> Option<Occupant> {
        self.cell_at(pos).map(|cell| cell.occupant)
    }

    pub fn is_goal_at(&self, pos: Vec2) -> bool {
        self.cell_at(pos).is_some_and(|cell| cell.goal)
    }

    /// Bounds-checked write. The goal flag at the position is load-time
    /// metadata and is never altered here.
    pub fn set_occupant(&mut self, pos: Vec2, occupant: Occupant) {
        if self.in_bounds(pos) {
            self.grid[pos.i as usize][pos.j as usize].occupant = occupant;
        }
    }

    /// Scans for the player. Derived on demand, never cached across moves.
    pub fn player_position(&self) -> Option<Vec2> {
        for (i, row) in self.grid.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.occupant == Occupant::Player {
                    return Some(Vec2 { i: i as i32, j: j as i32 });
                }
            }
        }
        None
    }

    pub fn goals(&self) -> &[Vec2] {
        &self.goals
    }

    /// Solved when every goal recorded at load currently holds a box. No
    /// other coordinate matters; an empty goal set is vacuously solved.
    pub fn is_solved(&self) -> bool {
        for &pos in &self.goals {
            if self.occupant_at(pos) != Some(Occupant::Box) {
                return false;
            }
        }
        true
    }

    /// Re-encodes the grid into the stable numeric level format.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|&cell| encode_cell(cell)).collect())
            .collect()
    }
}
