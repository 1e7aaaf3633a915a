//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] and hides the key
//! device behind [`KeySource`], so the game loop can be fed from the terminal
//! or from a scripted sequence.

pub mod map;
pub mod source;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
