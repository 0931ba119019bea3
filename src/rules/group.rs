//! Connected groups and their liberties
//!
//! A group is the maximal set of same-colored stones reachable through
//! orthogonal adjacency. Its liberty count is the number of *distinct* empty
//! points touching any member, so a point shared by two stones counts once.

use crate::board::{Bitboard, Board, Pos, Stone};

/// A group found by flood fill, with its deduplicated liberty count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub color: Stone,
    /// Member stones in traversal order
    pub stones: Vec<Pos>,
    pub liberties: usize,
}

impl Group {
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.liberties == 0
    }
}

/// Group containing the stone at `pos`.
///
/// Returns `None` when `pos` is empty. Uses fresh marks on every call, so
/// queries on different groups never interfere.
pub fn analyze(board: &Board, pos: Pos) -> Option<Group> {
    let mut visited = Bitboard::new(board.size());
    group_and_liberties(board, pos, &mut visited)
}

/// Liberty count of the group at `pos` (0 for an empty point)
#[inline]
pub fn count_liberties(board: &Board, pos: Pos) -> usize {
    analyze(board, pos).map_or(0, |g| g.liberties)
}

/// Flood fill from `pos` using a caller-owned visited set.
///
/// Every member is marked in `visited`, which lets a board-wide scan skip
/// stones already classified. Liberty marks are always local to this call.
pub fn group_and_liberties(board: &Board, pos: Pos, visited: &mut Bitboard) -> Option<Group> {
    let color = board.get(pos);
    if !color.is_player() {
        return None;
    }

    let size = board.size();
    let mut seen_liberties = Bitboard::new(size);
    let mut liberties = 0;
    let mut stones = Vec::new();
    let mut stack = vec![pos];
    visited.set(pos);

    while let Some(current) = stack.pop() {
        stones.push(current);

        for next in current.neighbors(size) {
            let stone = board.get(next);
            if stone == Stone::Empty {
                if seen_liberties.insert(next) {
                    liberties += 1;
                }
            } else if stone == color && visited.insert(next) {
                stack.push(next);
            }
        }
    }

    Some(Group {
        color,
        stones,
        liberties,
    })
}
