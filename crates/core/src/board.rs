//! Board module - the 4x4 grid and every rule that mutates it
//!
//! Each cell holds `0` (empty) or a power of two >= 2.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom)
//!
//! All four moves share one routine. A move walks every row (Left/Right) or
//! column (Up/Down) as a "line" whose position 0 is the edge the tiles travel
//! toward, so the same slide/merge pass serves every direction.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Direction, BOARD_SIZE, CELL_COUNT, SPAWN_FOUR_ONE_IN};

/// Where a new tile landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

/// Outcome of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftResult {
    /// Any tile slid or merged
    pub changed: bool,
    /// Number of merges; each removes exactly one tile
    pub merges: u32,
}

/// A cell prepared for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub x: usize,
    pub y: usize,
    pub value: u32,
    /// `floor(log2(value))`, `0` for an empty cell. Not clamped to any palette.
    pub color_index: usize,
}

/// Colour bucket for a tile value: `floor(log2(value))`, or `0` when empty.
///
/// # Examples
///
/// ```
/// use tui_2048_core::color_index;
///
/// assert_eq!(color_index(0), 0);
/// assert_eq!(color_index(2), 1);
/// assert_eq!(color_index(2048), 11);
/// assert_eq!(color_index(4096), 12);
/// ```
pub fn color_index(value: u32) -> usize {
    if value == 0 {
        0
    } else {
        value.ilog2() as usize
    }
}

fn is_cell_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Value two equal tiles merge into, `None` past the top of `u32`.
///
/// A pair of `1 << 31` tiles therefore never merges.
fn merged(value: u32) -> Option<u32> {
    value.checked_mul(2)
}

fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && merged(a).is_some()
}

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of cells, row-major order (y * BOARD_SIZE + x)
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from rows, top row first.
    ///
    /// Returns `None` if any cell is neither empty nor a power of two >= 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 8, 0],
    ///     [0, 0, 0, 16],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(3, 3), Some(16));
    ///
    /// assert!(Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_none());
    /// ```
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut cells = [0; CELL_COUNT];
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if !is_cell_value(value) {
                    return None;
                }
                cells[y * BOARD_SIZE + x] = value;
            }
        }
        Some(Self { cells })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: usize, y: usize) -> Option<usize> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(y * BOARD_SIZE + x)
    }

    /// Flat index of position `pos` along line `line` for a move in `dir`.
    ///
    /// Position 0 is the edge tiles move toward.
    #[inline(always)]
    fn line_index(dir: Direction, line: usize, pos: usize) -> usize {
        let far = BOARD_SIZE - 1;
        match dir {
            Direction::Left => line * BOARD_SIZE + pos,
            Direction::Right => line * BOARD_SIZE + (far - pos),
            Direction::Up => pos * BOARD_SIZE + line,
            Direction::Down => (far - pos) * BOARD_SIZE + line,
        }
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or if `value` is not a valid cell value
    pub fn set(&mut self, x: usize, y: usize, value: u32) -> bool {
        match Self::index(x, y) {
            Some(idx) if is_cell_value(value) => {
                self.cells[idx] = value;
                true
            }
            _ => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Copy out as rows, top row first
    pub fn rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, &value) in self.cells.iter().enumerate() {
            rows[i / BOARD_SIZE][i % BOARD_SIZE] = value;
        }
        rows
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Highest tile on the board, `0` if empty
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Place a 2 (or, one time in ten, a 4) on a uniformly chosen empty cell.
    ///
    /// Only empty cells are candidates, so this never retries. Returns `None`
    /// without touching the board when no cell is empty.
    pub fn spawn_tile(&mut self, rng: &mut SimpleRng) -> Option<Spawn> {
        let empties: ArrayVec<usize, CELL_COUNT> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| i)
            .collect();
        if empties.is_empty() {
            return None;
        }

        let idx = empties[rng.next_range(empties.len() as u32) as usize];
        let value = if rng.next_range(SPAWN_FOUR_ONE_IN) == 0 {
            4
        } else {
            2
        };
        self.cells[idx] = value;

        Some(Spawn {
            x: idx % BOARD_SIZE,
            y: idx / BOARD_SIZE,
            value,
        })
    }

    /// Check whether any move can change the board
    ///
    /// True when a cell is empty or two orthogonal neighbours hold the same value.
    pub fn has_valid_move(&self) -> bool {
        if self.cells.contains(&0) {
            return true;
        }

        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let value = self.cells[y * BOARD_SIZE + x];
                if x + 1 < BOARD_SIZE && can_merge(value, self.cells[y * BOARD_SIZE + x + 1]) {
                    return true;
                }
                if y + 1 < BOARD_SIZE && can_merge(value, self.cells[(y + 1) * BOARD_SIZE + x]) {
                    return true;
                }
            }
        }

        false
    }

    /// Slide and merge every tile toward `dir`.
    ///
    /// Returns true if anything moved or merged.
    pub fn shift(&mut self, dir: Direction) -> bool {
        self.shift_with_stats(dir).changed
    }

    /// Slide and merge every tile toward `dir`, reporting the merge count.
    ///
    /// Each line is scanned once from the near edge. A tile slides across the
    /// empty run ahead of it, then merges with the neighbour ahead if the values
    /// match. A tile created by a merge is locked for the rest of the pass, so
    /// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and `[2, 2, 4, 0]` becomes
    /// `[4, 4, 0, 0]`.
    pub fn shift_with_stats(&mut self, dir: Direction) -> ShiftResult {
        let mut result = ShiftResult::default();

        for line in 0..BOARD_SIZE {
            let idx = |pos: usize| Self::line_index(dir, line, pos);
            // Merges may only land at positions >= merge_floor.
            let mut merge_floor = 0;

            for pos in 1..BOARD_SIZE {
                let value = self.cells[idx(pos)];
                if value == 0 {
                    continue;
                }

                let mut target = pos;
                while target > 0 && self.cells[idx(target - 1)] == 0 {
                    target -= 1;
                }
                if target != pos {
                    self.cells[idx(target)] = value;
                    self.cells[idx(pos)] = 0;
                    result.changed = true;
                }

                if target > merge_floor && self.cells[idx(target - 1)] == value {
                    if let Some(sum) = merged(value) {
                        self.cells[idx(target - 1)] = sum;
                        self.cells[idx(target)] = 0;
                        merge_floor = target;
                        result.merges += 1;
                        result.changed = true;
                    }
                }
            }
        }

        result
    }

    /// Every cell with its colour bucket, row-major
    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        self.cells.iter().enumerate().map(|(i, &value)| TileView {
            x: i % BOARD_SIZE,
            y: i / BOARD_SIZE,
            value,
            color_index: color_index(value),
        })
    }
}
