//! Board representation for the capture game

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use serde::{Deserialize, Serialize};

/// Largest supported board edge; every coordinate must fit in a `u8`
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Orthogonal neighbor offsets: up, down, left, right
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Stone colors
///
/// On the wire a stone is its numeric code: 0 = Empty, 1 = Black, 2 = White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Numeric cell code used in board snapshots
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    /// Parse a cell code, `None` for anything outside 0..=2
    #[inline]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

impl From<Stone> for u8 {
    fn from(stone: Stone) -> u8 {
        stone.code()
    }
}

impl TryFrom<u8> for Stone {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Stone::from_code(code).ok_or_else(|| format!("invalid stone code {code}"))
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major cell index on a board of the given edge size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Checked conversion from signed coordinates
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Pos> {
        if Pos::is_valid(row, col, size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// In-bounds orthogonal neighbors
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Pos> {
        let (r, c) = (self.row as i32, self.col as i32);
        DIRECTIONS
            .into_iter()
            .filter_map(move |(dr, dc)| Pos::checked(r + dr, c + dc, size))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
