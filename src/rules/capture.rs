//! Capture resolution and move execution
//!
//! A group of the opponent's color that is left with zero liberties after a
//! placement is removed from the board. Only the opponent needs checking: the
//! mover's own group cannot be left without liberties, because the legality
//! check rejects that move before it is played.

use log::debug;

use crate::board::{Bitboard, Board, Pos, Stone};

use super::group::group_and_liberties;

/// Remove every group of `stone` that has no liberties.
///
/// Scans the board in row-major order, classifying each stone of `stone`
/// exactly once. Dead groups are collected first and cleared afterwards, so
/// the result does not depend on which group is discovered first.
///
/// # Arguments
/// * `board` - Mutable board to modify
/// * `stone` - Color whose dead groups should be removed
///
/// # Returns
/// Positions that were cleared in row-major order (empty when nothing was dead)
pub fn remove_dead_groups(board: &mut Board, stone: Stone) -> Vec<Pos> {
    let mut visited = Bitboard::new(board.size());
    let mut dead = Bitboard::new(board.size());

    for pos in board.positions() {
        if board.get(pos) != stone || visited.get(pos) {
            continue;
        }
        if let Some(group) = group_and_liberties(board, pos, &mut visited) {
            if group.is_dead() {
                for member in group.stones {
                    dead.set(member);
                }
            }
        }
    }

    if dead.is_empty() {
        return Vec::new();
    }

    let removed: Vec<Pos> = dead.iter_ones().collect();
    for &pos in &removed {
        board.remove_stone(pos);
    }
    removed
}

/// Commit a move and resolve captures.
///
/// The move must already have passed [`is_legal`](super::is_legal); it is
/// not re-validated here.
///
/// # Returns
/// Opponent stones removed by this move
pub fn play_move(board: &mut Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    debug_assert!(stone.is_player());
    debug_assert!(board.is_empty(pos));

    board.place_stone(pos, stone);
    let captured = remove_dead_groups(board, stone.opponent());
    if !captured.is_empty() {
        debug!(
            "{:?} at ({}, {}) captured {} stone(s): {:?}",
            stone,
            pos.row,
            pos.col,
            captured.len(),
            captured
        );
    }
    captured
}
