//! Game engine - the turn loop that ties board, input and rendering together.
//!
//! The loop is generic over where keys come from ([`input::KeySource`]) and
//! where frames go ([`term::FrameSink`]), so a whole game can run headless
//! against a scripted key sequence.
//!
//! # Example
//!
//! ```
//! use tui_2048_engine::{EndReason, Game, GameConfig};
//! use tui_2048_input::ScriptedKeys;
//! use tui_2048_term::FrameLog;
//! use tui_2048_types::Mode;
//!
//! let config = GameConfig {
//!     mode: Mode::Screensaver,
//!     seed: 7,
//!     render_interval: u64::MAX,
//! };
//! // The first render tick polls one key; the second answers the game-over wait.
//! let keys = ScriptedKeys::from_chars("xx");
//! let mut game = Game::new(config, keys, FrameLog::new());
//!
//! let outcome = game.run().unwrap();
//! assert_eq!(outcome.reason, EndReason::NoMovesLeft);
//! assert!(outcome.turns > 0);
//! ```

pub mod game;
pub mod screensaver;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use game::{EndReason, Game, GameConfig, Outcome};
pub use screensaver::{play_turn, Turn};
