use crate::core::{Direction, GridState, MoveKind, MoveUpdate, Occupant, Vec2};

/// Attempts to move the player one step, pushing at most one box. Mutates the
/// grid only when the whole move succeeds; a rejected move changes nothing.
pub fn attempt_move(grid: &mut GridState, direction: Direction) -> MoveUpdate {
    // The player is rederived by scanning every attempt, never cached.
    let Some(player) = grid.player_position() else {
        return MoveUpdate::Blocked;
    };

    let dir = vec_from_dir(direction);
    let target = Vec2 { i: player.i + dir.i, j: player.j + dir.j };

    match grid.occupant_at(target) {
        // Off-grid and walls block alike
        None | Some(Occupant::Wall) | Some(Occupant::Player) => MoveUpdate::Blocked,
        Some(Occupant::Empty) => {
            grid.set_occupant(player, Occupant::Empty);
            grid.set_occupant(target, Occupant::Player);
            MoveUpdate::Moved(MoveKind::PlayerMove)
        }
        Some(Occupant::Box) => {
            let push_target = Vec2 { i: target.i + dir.i, j: target.j + dir.j };
            match grid.occupant_at(push_target) {
                Some(Occupant::Empty) => {
                    // Move box, then player steps into the vacated cell
                    grid.set_occupant(push_target, Occupant::Box);
                    grid.set_occupant(target, Occupant::Player);
                    grid.set_occupant(player, Occupant::Empty);
                    MoveUpdate::Moved(MoveKind::PlayerAndBoxMove)
                }
                // A wall, another box, or the grid edge behind the box
                // rejects the entire move
                _ => MoveUpdate::Blocked,
            }
        }
    }
}

fn vec_from_dir(dir: Direction) -> Vec2 {
    match dir {
        Direction::Up => Vec2 { i: -1, j: 0 },
        Direction::Down => Vec2 { i: 1, j: 0 },
        Direction::Left => Vec2 { i: 0, j: -1 },
        Direction::Right => Vec2 { i: 0, j: 1 },
    }
}
