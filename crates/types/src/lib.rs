//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, the game loop, terminal rendering).
//!
//! # Board Dimensions
//!
//! The grid is always 4x4:
//!
//! - **Columns**: indexed 0-3, left to right (`x`)
//! - **Rows**: indexed 0-3, top to bottom (`y`)
//! - **Storage**: row-major, `y * BOARD_SIZE + x`
//!
//! # Tile Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_FOUR_ONE_IN` | 10 | A spawned tile is a 4 one time in ten, otherwise a 2 |
//! | `SCREENSAVER_RENDER_INTERVAL` | 5000 | Screensaver draws every Nth tick |
//! | `CELL_WIDTH` | 6 | Terminal columns per tile |
//! | `CELL_HEIGHT` | 3 | Terminal rows per tile |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Mode, BOARD_SIZE, CELL_COUNT};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! assert_eq!(Mode::from_arg(Some("screensaver")), Mode::Screensaver);
//! assert_eq!(Mode::from_arg(None), Mode::Interactive);
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

/// Board side length in cells
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// One spawn in this many is a 4
pub const SPAWN_FOUR_ONE_IN: u32 = 10;

/// Screensaver render cadence in ticks (not wall-clock time)
pub const SCREENSAVER_RENDER_INTERVAL: u64 = 5000;

/// Width of one tile in terminal columns
pub const CELL_WIDTH: u16 = 6;

/// Height of one tile in terminal rows
pub const CELL_HEIGHT: u16 = 3;

/// Command-line value that selects the self-playing mode
pub const SCREENSAVER_ARG: &str = "screensaver";

/// Direction tiles travel during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// What a key press asks the game loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide and merge the board in a direction
    Move(Direction),
    /// Stop the game immediately
    Quit,
}

/// How turns are driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A human picks each move from the keyboard
    #[default]
    Interactive,
    /// The game plays itself with a fixed direction priority
    Screensaver,
}

impl Mode {
    /// Select the mode from the optional positional argument.
    ///
    /// Only the exact value `"screensaver"` selects the self-playing mode;
    /// anything else, or no argument, is interactive.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(SCREENSAVER_ARG) => Mode::Screensaver,
            _ => Mode::Interactive,
        }
    }
}
