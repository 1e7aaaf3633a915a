//! Screensaver heuristic: a fixed direction priority, no lookahead.

use crate::core::Board;
use crate::types::Direction;

/// Tried in order; the first that changes the board ends the turn.
pub const PRIORITY: [Direction; 3] = [Direction::Up, Direction::Left, Direction::Right];

/// Applied when nothing in [`PRIORITY`] changed the board.
pub const FALLBACK: Direction = Direction::Down;

/// The move a screensaver turn made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub direction: Direction,
    pub changed: bool,
}

/// Play one turn.
///
/// The fallback is applied unconditionally and the turn counts as taken even
/// if it changed nothing; `changed` only reports what happened.
pub fn play_turn(board: &mut Board) -> Turn {
    for direction in PRIORITY {
        if board.shift(direction) {
            return Turn {
                direction,
                changed: true,
            };
        }
    }

    let changed = board.shift(FALLBACK);
    Turn {
        direction: FALLBACK,
        changed,
    }
}
