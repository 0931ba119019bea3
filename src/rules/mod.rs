//! Game rules for the capture game
//!
//! This module implements the rule set:
//! - Group and liberty analysis (flood fill)
//! - Move legality (occupancy, suicide unless capturing)
//! - Capture resolution and move execution
//!
//! There is no ko rule: a move that repeats an earlier position is legal.

pub mod capture;
pub mod group;
pub mod legality;

// Re-exports for convenient access
pub use capture::{play_move, remove_dead_groups};
pub use group::{analyze, count_liberties, group_and_liberties, Group};
pub use legality::{has_legal_move, is_legal, is_legal_at, legal_moves};
