//! Go-style capture rules engine with a first-legal-move opponent
//!
//! The engine keeps the board of a simplified Go variant and enforces:
//! - Orthogonally connected groups and their shared liberties
//! - Suicide is illegal unless the move captures
//! - Opponent groups left without liberties are removed
//! - A side with no legal move loses; the player who moved last wins
//!
//! # Architecture
//!
//! - [`board`]: Board representation, positions and bit sets
//! - [`rules`]: Group analysis, legality and capture resolution
//! - [`engine`]: Bot move selection (first legal point in scan order)
//! - [`game`]: Human-vs-bot session state machine
//! - [`protocol`]: JSON request/response mapping for a host process
//!
//! # Quick Start
//!
//! ```
//! use gobot::{rules, Board, Pos, Stone};
//!
//! let mut board = Board::new(5);
//! // White stone at (1,1) with Black on three sides
//! board.place_stone(Pos::new(1, 1), Stone::White);
//! for &(r, c) in &[(0, 1), (2, 1), (1, 0)] {
//!     board.place_stone(Pos::new(r, c), Stone::Black);
//! }
//!
//! assert!(rules::is_legal(&mut board, 1, 2, Stone::Black));
//! let captured = rules::play_move(&mut board, Pos::new(1, 2), Stone::Black);
//! assert_eq!(captured, vec![Pos::new(1, 1)]);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod protocol;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, MAX_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{find_move, Bot, MoveResult, ScanBot};
pub use error::{ConfigError, GameError};
pub use game::{GamePhase, GameSession, MoveReport};
