//! Board structure

use super::{Pos, Stone};
use crate::error::GameError;

/// Square game board, cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Empty board of `size` x `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    /// Rebuild a board from a flattened row-major snapshot of cell codes
    pub fn from_snapshot(size: usize, codes: &[u8]) -> Result<Self, GameError> {
        if codes.len() != size * size {
            return Err(GameError::InvalidSnapshot {
                expected: size * size,
                actual: codes.len(),
            });
        }
        let cells = codes
            .iter()
            .map(|&code| Stone::from_code(code).ok_or(GameError::InvalidColor(code)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(self.contains(pos), "{:?} off a {}x{} board", pos, self.size, self.size);
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone (without capture processing)
    /// Use `rules::play_move` for game moves
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos), "{:?} off a {}x{} board", pos, self.size, self.size);
        let idx = pos.to_index(self.size);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Checked conversion of signed coordinates into a position on this board
    #[inline]
    pub fn pos(&self, row: i32, col: i32) -> Option<Pos> {
        Pos::checked(row, col, self.size)
    }

    /// All positions in scan order (rows, then columns)
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Flattened row-major cell codes (0 = Empty, 1 = Black, 2 = White)
    pub fn snapshot(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.code()).collect()
    }
}
