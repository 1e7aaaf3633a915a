//! Key sources: where the game loop gets key presses from.
//!
//! The loop only ever sees [`KeySource`]. The terminal implementation blocks on
//! crossterm events; the scripted one replays a fixed sequence so games can be
//! driven deterministically in tests.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// A blocking supplier of key presses.
pub trait KeySource {
    /// Block until the next key press.
    fn read_key(&mut self) -> Result<KeyEvent>;

    /// Return a key press if one is already waiting, without blocking.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads key presses from the real terminal.
///
/// Release and repeat events are skipped so one physical press is one key.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Replays a fixed sequence of key presses.
///
/// `read_key` fails once the script runs out instead of blocking forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script from plain key codes.
    pub fn from_codes(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(codes.into_iter().map(KeyEvent::from))
    }

    /// Script from characters, e.g. `"wasd"`.
    pub fn from_chars(chars: &str) -> Self {
        Self::from_codes(chars.chars().map(KeyCode::Char))
    }

    pub fn push(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    /// Keys not yet consumed.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!("scripted key source exhausted"),
        }
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> Result<KeyEvent> {
        (**self).read_key()
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).poll_key()
    }
}
