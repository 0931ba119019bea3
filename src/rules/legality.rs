//! Move legality: occupancy, suicide and capture
//!
//! Legality cannot be decided by looking at the target point alone, because
//! a capture can hand the placed stone a liberty it did not have. The check
//! therefore places the stone for real, inspects the surrounding groups and
//! takes the stone back again.

use std::ops::Deref;

use crate::board::{Board, Pos, Stone};

use super::group::count_liberties;

/// A stone placed only for the duration of a legality check.
///
/// Dropping the guard clears the cell, so the board is restored on every
/// exit path.
struct TrialStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialStone<'a> {
    fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        debug_assert!(board.is_empty(pos));
        board.place_stone(pos, stone);
        Self { board, pos }
    }
}

impl Deref for TrialStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

/// Check whether `stone` may be placed at (`row`, `col`).
///
/// Out-of-bounds coordinates, occupied points and `Stone::Empty` are all
/// rejected. The board is left exactly as it was found.
pub fn is_legal(board: &mut Board, row: i32, col: i32, stone: Stone) -> bool {
    match board.pos(row, col) {
        Some(pos) => is_legal_at(board, pos, stone),
        None => false,
    }
}

/// Position form of [`is_legal`].
pub fn is_legal_at(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    if !board.contains(pos) || !stone.is_player() || !board.is_empty(pos) {
        return false;
    }

    let opponent = stone.opponent();
    let trial = TrialStone::place(board, pos, stone);
    let size = trial.size();

    let captured = pos
        .neighbors(size)
        .any(|n| trial.get(n) == opponent && count_liberties(&trial, n) == 0);
    let suicide = count_liberties(&trial, pos) == 0;
    drop(trial);

    !suicide || captured
}

/// Whether `stone` has at least one legal point on the board
pub fn has_legal_move(board: &mut Board, stone: Stone) -> bool {
    let positions: Vec<Pos> = board.positions().collect();
    positions.into_iter().any(|pos| is_legal_at(board, pos, stone))
}

/// Every legal point for `stone`, in scan order (rows, then columns)
pub fn legal_moves(board: &mut Board, stone: Stone) -> Vec<Pos> {
    let positions: Vec<Pos> = board.positions().collect();
    positions
        .into_iter()
        .filter(|&pos| is_legal_at(board, pos, stone))
        .collect()
}
