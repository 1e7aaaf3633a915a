//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders the board into a simple framebuffer that can be flushed to a
//! terminal backend, or captured by any other [`FrameSink`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout (pure) apart from terminal I/O
//! - Fixed 6x3 character tiles, coloured by tile value

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod sink;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{cell_label, GameView, Screen, GAME_OVER, HIGHEST_TILE_LABEL, PROMPT};
pub use palette::{tile_style, TILE_PALETTE};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use sink::{FrameLog, FrameSink};
