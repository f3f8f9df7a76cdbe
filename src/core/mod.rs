mod catalog;
mod controller;
mod grid;
mod models;
mod update;

pub use catalog::{Level, LevelCatalog, LevelError, decode_cell, encode_cell};
pub use controller::{Advance, LevelController};
pub use grid::GridState;
pub use models::{Cell, Direction, MoveKind, MoveUpdate, Occupant, Vec2};
pub use update::attempt_move;
