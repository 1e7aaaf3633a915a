//! Game loop - drives one game from an empty board to its end
//!
//! Every turn runs the same cycle:
//!
//! 1. **Spawn** a tile on a random empty cell
//! 2. **Check** whether any move is left; if not, the game is over
//! 3. **Move**: ask the keyboard (interactive) or the screensaver heuristic
//! 4. Repeat
//!
//! In interactive mode a key that does not change the board is rejected and the
//! loop keeps waiting, so only a real move consumes the turn. The screensaver
//! never waits for input; it renders on a tick counter instead of a timer.

use anyhow::Result;
use log::{debug, trace, warn};

use crate::core::{Board, SimpleRng};
use crate::input::{handle_key_event, KeySource};
use crate::screensaver;
use crate::term::{FrameBuffer, FrameSink, GameView, Screen};
use crate::types::{Command, Mode, SCREENSAVER_RENDER_INTERVAL};

/// Settings for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    /// Seed for spawn placement and values
    pub seed: u32,
    /// Screensaver draws on ticks where `tick % render_interval == 0`
    pub render_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            seed: 1,
            render_interval: SCREENSAVER_RENDER_INTERVAL,
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The board filled up with no merge left
    NoMovesLeft,
    /// The player asked to quit
    Quit,
}

/// Result of a finished game, computed once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub highest_tile: u32,
    /// Turns consumed (one per spawned tile that was followed by a move)
    pub turns: u64,
    pub reason: EndReason,
}

enum TurnResult {
    Played,
    Quit,
}

/// One game: owns the board and RNG, borrows nothing.
pub struct Game<K, S> {
    config: GameConfig,
    board: Board,
    rng: SimpleRng,
    view: GameView,
    frame: FrameBuffer,
    keys: K,
    sink: S,
    ticks: u64,
    turns: u64,
}

impl<K: KeySource, S: FrameSink> Game<K, S> {
    pub fn new(config: GameConfig, keys: K, sink: S) -> Self {
        let config = GameConfig {
            render_interval: config.render_interval.max(1),
            ..config
        };
        Self {
            config,
            board: Board::new(),
            rng: SimpleRng::new(config.seed),
            view: GameView::default(),
            frame: FrameBuffer::new(0, 0),
            keys,
            sink,
            ticks: 0,
            turns: 0,
        }
    }

    /// Start from `board` instead of an empty grid.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Give back the key source and frame sink.
    pub fn into_parts(self) -> (K, S) {
        (self.keys, self.sink)
    }

    /// Play until no move is left or the player quits.
    ///
    /// After a natural game over the final board is drawn and one more key
    /// press is awaited before returning.
    pub fn run(&mut self) -> Result<Outcome> {
        debug!(
            "starting {:?} game (seed {}, render every {} ticks)",
            self.config.mode, self.config.seed, self.config.render_interval
        );

        loop {
            if self.board.spawn_tile(&mut self.rng).is_none() {
                warn!("no empty cell to spawn into after turn {}", self.turns);
            }

            if !self.board.has_valid_move() {
                break;
            }

            let result = match self.config.mode {
                Mode::Screensaver => self.screensaver_turn()?,
                Mode::Interactive => self.interactive_turn()?,
            };
            if let TurnResult::Quit = result {
                return Ok(self.finish(EndReason::Quit));
            }
            self.turns += 1;
        }

        let highest_tile = self.board.max_tile();
        self.present(Screen::GameOver { highest_tile })?;
        self.keys.read_key()?;
        Ok(self.finish(EndReason::NoMovesLeft))
    }

    fn screensaver_turn(&mut self) -> Result<TurnResult> {
        let tick = self.ticks;
        self.ticks += 1;

        if tick % self.config.render_interval == 0 {
            self.present(Screen::Playing { prompt: false })?;
            if let Some(key) = self.keys.poll_key()? {
                if handle_key_event(key) == Some(Command::Quit) {
                    return Ok(TurnResult::Quit);
                }
            }
        }

        let turn = screensaver::play_turn(&mut self.board);
        trace!("screensaver moved {}", turn.direction.as_str());
        Ok(TurnResult::Played)
    }

    fn interactive_turn(&mut self) -> Result<TurnResult> {
        self.present(Screen::Playing { prompt: true })?;

        loop {
            let key = self.keys.read_key()?;
            match handle_key_event(key) {
                Some(Command::Quit) => return Ok(TurnResult::Quit),
                Some(Command::Move(dir)) => {
                    if self.board.shift(dir) {
                        return Ok(TurnResult::Played);
                    }
                    trace!("rejected {}: board unchanged", dir.as_str());
                }
                None => {}
            }
        }
    }

    fn present(&mut self, screen: Screen) -> Result<()> {
        self.view.render_into(&self.board, screen, &mut self.frame);
        self.sink.present(&self.frame)
    }

    fn finish(&self, reason: EndReason) -> Outcome {
        let outcome = Outcome {
            highest_tile: self.board.max_tile(),
            turns: self.turns,
            reason,
        };
        debug!(
            "game ended ({:?}) after {} turns, highest tile {}",
            outcome.reason, outcome.turns, outcome.highest_tile
        );
        outcome
    }
}
