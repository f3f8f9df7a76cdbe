use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Cell, Occupant};

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no player")]
    NoPlayer,
    #[error("level index {index} is out of range for a catalog of {len} levels")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("level catalog contains no levels")]
    EmptyCatalog,
    #[error("malformed level catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A level as authored: a matrix of cell codes in the stable 7-value encoding
/// (0 empty, 1 wall, 2 box, 3 player, 4 goal, 5 player-on-goal, 6 box-on-goal).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level {
    pub rows: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<LevelCatalog, LevelError> {
        LevelCatalog::from_json(include_str!("../../levels.json"))
    }

    pub fn from_json(s: &str) -> Result<LevelCatalog, LevelError> {
        let catalog: LevelCatalog = serde_json::from_str(s)?;
        LevelCatalog::from_levels(catalog.levels)
    }

    pub fn from_levels(levels: Vec<Level>) -> Result<LevelCatalog, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        Ok(LevelCatalog { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }
}

pub fn decode_cell(code: u8) -> Cell {
    match code {
        1 => Cell { occupant: Occupant::Wall, goal: false },
        2 => Cell { occupant: Occupant::Box, goal: false },
        3 => Cell { occupant: Occupant::Player, goal: false },
        4 => Cell { occupant: Occupant::Empty, goal: true },
        5 => Cell { occupant: Occupant::Player, goal: true },
        6 => Cell { occupant: Occupant::Box, goal: true },
        // 0, and anything unrecognized, is bare floor
        _ => Cell { occupant: Occupant::Empty, goal: false },
    }
}

pub fn encode_cell(cell: Cell) -> u8 {
    match (cell.occupant, cell.goal) {
        (Occupant::Wall, _) => 1,
        (Occupant::Box, false) => 2,
        (Occupant::Player, false) => 3,
        (Occupant::Empty, true) => 4,
        (Occupant::Player, true) => 5,
        (Occupant::Box, true) => 6,
        (Occupant::Empty, false) => 0,
    }
}
