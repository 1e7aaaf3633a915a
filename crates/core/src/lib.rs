//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board rules for 2048 on a fixed 4x4 grid.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Arbitrary boards can be built with [`Board::from_rows`]
//! - **Fast**: Moves and spawns never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, tile spawning, directional moves, game-over detection
//! - [`rng`]: Seeded LCG used for spawn placement and values
//!
//! # Game Rules
//!
//! - **Spawn**: one new tile per turn on a random empty cell, a 4 one time in ten, else a 2
//! - **Move**: tiles slide toward an edge; equal neighbours merge into their sum,
//!   at most once per tile per move
//! - **Game over**: no empty cell and no equal orthogonal neighbours
//! - **No win condition**: 2048 is just another tile
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut board = Board::new();
//! board.spawn_tile(&mut rng);
//! board.spawn_tile(&mut rng);
//!
//! // Some direction always changes a board with two tiles and empty cells.
//! let moved = Direction::ALL.into_iter().any(|dir| {
//!     let mut probe = board;
//!     probe.shift(dir)
//! });
//! assert!(moved);
//! assert!(board.has_valid_move());
//! ```

pub mod board;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{color_index, Board, ShiftResult, Spawn, TileView};
pub use rng::SimpleRng;
