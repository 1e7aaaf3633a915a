//! GameView: maps a `core::Board` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, TileView};
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::tile_style;
use crate::types::{BOARD_SIZE, CELL_HEIGHT, CELL_WIDTH};

/// Shown under the board while waiting for a key.
pub const PROMPT: &str = "Use WASD or arrow keys to move";

pub const GAME_OVER: &str = "Game over!";

pub const HIGHEST_TILE_LABEL: &str = "Highest tile: ";

/// What goes under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Game in progress, optionally with the key prompt
    Playing { prompt: bool },
    /// Final frame
    GameOver { highest_tile: u32 },
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(CELL_WIDTH, CELL_HEIGHT)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Board size in terminal columns and rows.
    pub fn board_extent(&self) -> (u16, u16) {
        (
            self.cell_w * BOARD_SIZE as u16,
            self.cell_h * BOARD_SIZE as u16,
        )
    }

    /// Render the board and footer into an existing framebuffer.
    ///
    /// The framebuffer is resized to fit; callers can reuse one across frames.
    pub fn render_into(&self, board: &Board, screen: Screen, fb: &mut FrameBuffer) {
        let (board_w, board_h) = self.board_extent();
        let footer = footer_lines(screen);
        let footer_w = footer
            .iter()
            .map(|line| line.chars().count() as u16)
            .max()
            .unwrap_or(0);

        fb.resize(board_w.max(footer_w), board_h + footer.len() as u16);
        fb.clear(Default::default());

        for tile in board.tiles() {
            self.draw_tile(fb, tile);
        }

        let plain = CellStyle::default();
        match screen {
            Screen::Playing { prompt: true } => {
                fb.put_str(0, board_h, PROMPT, plain);
            }
            Screen::Playing { prompt: false } => {}
            Screen::GameOver { highest_tile } => {
                fb.put_str(0, board_h, GAME_OVER, plain);
                let y = board_h + 1;
                fb.put_str(0, y, HIGHEST_TILE_LABEL, plain);
                let x = HIGHEST_TILE_LABEL.len() as u16;
                let style = tile_style(crate::core::color_index(highest_tile));
                fb.put_str(x, y, &highest_tile_badge(highest_tile), style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, screen: Screen) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(board, screen, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, tile: TileView) {
        let px = tile.x as u16 * self.cell_w;
        let py = tile.y as u16 * self.cell_h;
        let style = tile_style(tile.color_index);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if tile.value != 0 {
            let label = cell_label(tile.value, self.cell_w as usize);
            fb.put_str(px, py + self.cell_h / 2, &label, style);
        }
    }
}

/// Text for a tile's middle row.
///
/// Left-padded by `cell_w / 2 - (digits - 1)` (never negative), right-padded to
/// `cell_w`, and cut from the middle if still too long.
///
/// # Examples
///
/// ```
/// use tui_2048_term::cell_label;
///
/// assert_eq!(cell_label(2, 6), "   2  ");
/// assert_eq!(cell_label(2048, 6), "2048  ");
/// assert_eq!(cell_label(1048576, 6), "104576");
/// ```
pub fn cell_label(value: u32, cell_w: usize) -> String {
    let num = value.to_string();
    let pad = (cell_w / 2).saturating_sub(num.len() - 1);
    let text = format!("{:>width$}", num, width = pad + num.len());
    let text = format!("{:<cell_w$}", text);
    if text.len() <= cell_w {
        return text;
    }

    let half = cell_w / 2;
    format!("{}{}", &text[..half], &text[text.len() - half..])
}

fn highest_tile_badge(value: u32) -> String {
    format!(" {} ", value)
}

fn footer_lines(screen: Screen) -> Vec<String> {
    match screen {
        Screen::Playing { prompt: true } => vec![PROMPT.to_string()],
        Screen::Playing { prompt: false } => Vec::new(),
        Screen::GameOver { highest_tile } => vec![
            GAME_OVER.to_string(),
            format!("{}{}", HIGHEST_TILE_LABEL, highest_tile_badge(highest_tile)),
        ],
    }
}
