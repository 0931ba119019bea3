//! Game session: turn sequencing between the human and the bot
//!
//! A session moves through three phases:
//!
//! - `AwaitingHumanMove` → a legal human move is played. If the bot is then
//!   left without a legal move the human wins, otherwise it is the bot's turn.
//! - `AwaitingBotMove` → the bot plays its first legal point. If the human is
//!   then left without a legal move the bot wins, otherwise it is the human's
//!   turn again.
//! - `GameOver { winner }` → terminal; start a new session to play again.
//!
//! # Example
//!
//! ```
//! use gobot::{GameConfig, GamePhase, GameSession};
//!
//! let config = GameConfig::new(5, 2).unwrap(); // human plays White
//! let mut game = GameSession::start(config).unwrap();
//! // Bot (Black) has already opened at the first point
//! assert_eq!(game.snapshot()[0], 1);
//!
//! let report = game.submit_human_move(0, 1).unwrap();
//! assert!(report.accepted);
//! assert_eq!(game.phase(), GamePhase::AwaitingBotMove);
//! ```

use log::{info, warn};

use crate::board::{Board, Pos, Stone, MAX_BOARD_SIZE};
use crate::config::GameConfig;
use crate::engine::{Bot, ScanBot};
use crate::error::GameError;
use crate::rules::{has_legal_move, is_legal, play_move};

/// Turn state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingHumanMove,
    AwaitingBotMove,
    GameOver { winner: Stone },
}

/// Outcome of one move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// False when the proposed move was illegal; nothing changed
    pub accepted: bool,
    pub played: Option<Pos>,
    pub captured: Vec<Pos>,
    /// Phase after the request
    pub phase: GamePhase,
}

impl MoveReport {
    fn rejected(phase: GamePhase) -> Self {
        Self {
            accepted: false,
            played: None,
            captured: Vec::new(),
            phase,
        }
    }
}

/// One human-vs-bot game
pub struct GameSession {
    board: Board,
    human_color: Stone,
    phase: GamePhase,
    bot: Box<dyn Bot>,
}

impl GameSession {
    /// Start a new game against the first-legal-point bot.
    ///
    /// When the human plays White the bot (Black) moves before this returns.
    pub fn start(config: GameConfig) -> Result<Self, GameError> {
        Self::start_with_bot(config, Box::new(ScanBot::new()))
    }

    /// Start a new game with a custom bot
    pub fn start_with_bot(config: GameConfig, bot: Box<dyn Bot>) -> Result<Self, GameError> {
        config.validate()?;

        let mut session = Self {
            board: Board::new(config.size),
            human_color: config.human_color,
            phase: GamePhase::AwaitingHumanMove,
            bot,
        };
        info!(
            "New {}x{} game, human plays {:?}",
            config.size, config.size, config.human_color
        );

        if session.human_color == Stone::White {
            session.phase = GamePhase::AwaitingBotMove;
            session.resolve_bot_move()?;
        } else if !has_legal_move(&mut session.board, session.human_color) {
            session.finish(session.bot_color());
        }

        Ok(session)
    }

    /// Continue a game from an existing position
    pub fn resume(board: Board, human_color: Stone, phase: GamePhase) -> Result<Self, GameError> {
        if !human_color.is_player() {
            return Err(GameError::InvalidColor(human_color.code()));
        }
        if board.size() == 0 || board.size() > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(board.size()));
        }
        if let GamePhase::GameOver { winner } = phase {
            if !winner.is_player() {
                return Err(GameError::InvalidColor(winner.code()));
            }
        }
        Ok(Self {
            board,
            human_color,
            phase,
            bot: Box::new(ScanBot::new()),
        })
    }

    /// Replace the opponent
    pub fn with_bot(mut self, bot: Box<dyn Bot>) -> Self {
        self.bot = bot;
        self
    }

    /// Try the human's move at (`row`, `col`).
    ///
    /// An illegal move is not an error: the report comes back with
    /// `accepted == false` and the board untouched.
    pub fn submit_human_move(&mut self, row: i32, col: i32) -> Result<MoveReport, GameError> {
        match self.phase {
            GamePhase::GameOver { .. } => return Err(GameError::GameOver),
            GamePhase::AwaitingBotMove => return Err(GameError::NotHumanTurn),
            GamePhase::AwaitingHumanMove => {}
        }

        let human = self.human_color;
        let pos = match self.board.pos(row, col) {
            Some(pos) if is_legal(&mut self.board, row, col, human) => pos,
            _ => {
                info!("Rejected {:?} move at ({}, {})", human, row, col);
                return Ok(MoveReport::rejected(self.phase));
            }
        };

        let captured = play_move(&mut self.board, pos, human);
        info!("{:?} (human) plays ({}, {})", human, pos.row, pos.col);

        let bot = self.bot_color();
        if has_legal_move(&mut self.board, bot) {
            self.phase = GamePhase::AwaitingBotMove;
        } else {
            self.finish(human);
        }

        Ok(MoveReport {
            accepted: true,
            played: Some(pos),
            captured,
            phase: self.phase,
        })
    }

    /// Let the bot play its move
    pub fn resolve_bot_move(&mut self) -> Result<MoveReport, GameError> {
        match self.phase {
            GamePhase::GameOver { .. } => return Err(GameError::GameOver),
            GamePhase::AwaitingHumanMove => return Err(GameError::NotBotTurn),
            GamePhase::AwaitingBotMove => {}
        }

        let bot = self.bot_color();
        let result = self.bot.select_move(&mut self.board, bot);

        let pos = match result.best_move {
            Some(pos) if is_legal(&mut self.board, pos.row as i32, pos.col as i32, bot) => pos,
            _ => {
                // Normally ruled out by the check after the human move
                warn!("{:?} bot found no move, awarding the game to the human", bot);
                self.finish(self.human_color);
                return Ok(MoveReport::rejected(self.phase));
            }
        };

        let captured = play_move(&mut self.board, pos, bot);
        info!(
            "{:?} (bot) plays ({}, {}) [{} checked, {}ms]",
            bot, pos.row, pos.col, result.checked, result.time_ms
        );

        if has_legal_move(&mut self.board, self.human_color) {
            self.phase = GamePhase::AwaitingHumanMove;
        } else {
            self.finish(bot);
        }

        Ok(MoveReport {
            accepted: true,
            played: Some(pos),
            captured,
            phase: self.phase,
        })
    }

    fn finish(&mut self, winner: Stone) {
        info!(
            "Game over, {:?} wins with {} stones on the board",
            winner,
            self.board.stone_count()
        );
        self.phase = GamePhase::GameOver { winner };
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Flattened row-major cell codes
    pub fn snapshot(&self) -> Vec<u8> {
        self.board.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn human_color(&self) -> Stone {
        self.human_color
    }

    pub fn bot_color(&self) -> Stone {
        self.human_color.opponent()
    }
}
