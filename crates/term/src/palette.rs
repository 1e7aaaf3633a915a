//! Tile colours, indexed by `floor(log2(value))`.

use crossterm::style::Color;

use crate::fb::CellStyle;

/// One entry per bucket: empty, 2, 4, 8, ... 2048. Larger tiles reuse the last entry.
pub const TILE_PALETTE: [CellStyle; 12] = [
    CellStyle::new(Color::Grey, Color::Black),        // empty
    CellStyle::new(Color::Grey, Color::DarkRed),      // 2
    CellStyle::new(Color::Grey, Color::DarkGreen),    // 4
    CellStyle::new(Color::Black, Color::DarkYellow),  // 8
    CellStyle::new(Color::Grey, Color::DarkBlue),     // 16
    CellStyle::new(Color::Grey, Color::DarkMagenta),  // 32
    CellStyle::new(Color::Grey, Color::DarkCyan),     // 64
    CellStyle::new(Color::Black, Color::Grey),        // 128
    CellStyle::new(Color::Grey, Color::DarkRed),      // 256
    CellStyle::new(Color::Grey, Color::DarkGreen),    // 512
    CellStyle::new(Color::Black, Color::DarkYellow),  // 1024
    CellStyle::new(Color::Grey, Color::Black),        // 2048+
];

/// Style for a colour index, clamped to the last palette entry.
pub fn tile_style(color_index: usize) -> CellStyle {
    TILE_PALETTE[color_index.min(TILE_PALETTE.len() - 1)]
}
