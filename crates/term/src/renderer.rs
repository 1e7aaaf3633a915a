//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are always full redraws from the top-left corner. The screen is not
//! cleared first; every line ends with a colour reset and an erase to the end of
//! the line, and whatever sits below the last line is erased, so a narrower or
//! shorter frame leaves nothing of the previous one behind.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::sink::FrameSink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer as a full redraw.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;

    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(style.fg))?;
    out.queue(SetBackgroundColor(style.bg))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::game_view::{GameView, Screen};

    fn encode(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_full_into(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn every_line_ends_with_a_reset() {
        let fb = GameView::default().render(&Board::new(), Screen::Playing { prompt: false });
        let text = encode(&fb);

        let line_end = "\x1b[0m\x1b[K";
        let lines: Vec<&str> = text.split("\r\n").collect();
        assert_eq!(lines.len(), fb.height() as usize);
        let (last, rest) = lines.split_last().unwrap();
        for line in rest {
            assert!(line.ends_with(line_end), "line missing reset: {:?}", line);
        }
        assert!(last.ends_with("\x1b[0m\x1b[K\x1b[J"), "last line: {:?}", last);
    }

    #[test]
    fn frame_homes_the_cursor_without_clearing_the_screen() {
        let fb = GameView::default().render(&Board::new(), Screen::Playing { prompt: true });
        let text = encode(&fb);

        assert!(text.starts_with("\x1b[1;1H"), "frame start: {:?}", &text[..8]);
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn shorter_frame_erases_leftovers_of_a_wider_one() {
        let view = GameView::default();
        let wide = view.render(&Board::new(), Screen::Playing { prompt: true });
        let narrow = view.render(&Board::new(), Screen::Playing { prompt: false });
        assert!(narrow.width() < wide.width());
        assert!(narrow.height() < wide.height());

        let text = encode(&narrow);
        // Each row erases past its own width, the tail erases the old prompt row.
        assert_eq!(text.matches("\x1b[K").count(), narrow.height() as usize);
        assert!(text.ends_with("\x1b[J"));
    }

    #[test]
    fn style_changes_are_coalesced_per_run() {
        let board = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
        let fb = GameView::default().render(&board, Screen::Playing { prompt: false });
        let text = encode(&fb);
        let first_line = text.split("\r\n").next().unwrap();

        // One style switch for a row of identical tiles.
        assert_eq!(first_line.matches("\x1b[38;").count(), 1);
    }

    #[test]
    fn tile_values_appear_in_output() {
        let board = Board::from_rows([[0; 4], [0, 512, 0, 0], [0; 4], [0; 4]]).unwrap();
        let fb = GameView::default().render(&board, Screen::GameOver { highest_tile: 512 });
        let text = encode(&fb);
        assert!(text.contains("512"));
        assert!(text.contains("Game over!"));
    }
}
