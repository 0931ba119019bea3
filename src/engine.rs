//! Move selection for the automated opponent
//!
//! The bot plays the first legal point in scan order: rows top to bottom,
//! columns left to right. Given a board it always picks the same point, the
//! lexicographically smallest legal coordinate.
//!
//! # Example
//!
//! ```
//! use gobot::{Board, Bot, Pos, ScanBot, Stone};
//!
//! let mut board = Board::new(5);
//! board.place_stone(Pos::new(0, 0), Stone::Black);
//!
//! let mut bot = ScanBot::new();
//! let result = bot.select_move(&mut board, Stone::White);
//! assert_eq!(result.best_move, Some(Pos::new(0, 1)));
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::rules::is_legal_at;

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` when the side has no legal point
    pub best_move: Option<Pos>,
    /// Number of points examined before stopping
    pub checked: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn no_move(checked: usize, time_ms: u64) -> Self {
        Self {
            best_move: None,
            checked,
            time_ms,
        }
    }
}

/// Something that can pick a move for one side.
///
/// The board is borrowed mutably because legality checks place and take back
/// a trial stone; implementations must leave it unchanged.
pub trait Bot {
    fn select_move(&mut self, board: &mut Board, stone: Stone) -> MoveResult;
}

/// First-legal-point bot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanBot;

impl ScanBot {
    pub fn new() -> Self {
        ScanBot
    }
}

impl Bot for ScanBot {
    fn select_move(&mut self, board: &mut Board, stone: Stone) -> MoveResult {
        let start = Instant::now();
        let positions: Vec<Pos> = board.positions().collect();

        for (i, pos) in positions.into_iter().enumerate() {
            if is_legal_at(board, pos, stone) {
                let time_ms = start.elapsed().as_millis() as u64;
                debug!("{:?} bot picks ({}, {}) after {} points", stone, pos.row, pos.col, i + 1);
                return MoveResult {
                    best_move: Some(pos),
                    checked: i + 1,
                    time_ms,
                };
            }
        }

        debug!("{:?} bot has no legal move", stone);
        MoveResult::no_move(board.size() * board.size(), start.elapsed().as_millis() as u64)
    }
}

/// First legal point for `stone` in scan order
pub fn find_move(board: &mut Board, stone: Stone) -> Option<Pos> {
    ScanBot.select_move(board, stone).best_move
}
