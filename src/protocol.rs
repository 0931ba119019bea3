//! JSON request/response mapping for a host process
//!
//! One request object in, one response object out. A [`Host`] keeps at most
//! one active game; `startGame` replaces it.
//!
//! ```text
//! {"op":"startGame","size":5,"humanColor":2}
//!   -> {"board":[1,0,0,...]}
//! {"op":"resolveHumanMove","x":0,"y":1,"humanColor":2}
//!   -> {"valid":true,"board":[...],"botTurn":true}
//! {"op":"resolveBotMove","humanColor":2}
//!   -> {"board":[...],"gameOver":false}
//! ```
//!
//! Malformed calls come back as `{"error":"..."}` and leave the game as it was.

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::GameSession;

/// A call from the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    #[serde(rename_all = "camelCase")]
    StartGame { size: usize, human_color: u8 },
    /// `x` is the row, `y` the column
    #[serde(rename_all = "camelCase", alias = "submitHumanMove")]
    ResolveHumanMove { x: i32, y: i32, human_color: u8 },
    #[serde(rename_all = "camelCase")]
    ResolveBotMove { human_color: u8 },
}

/// Reply to the host; absent fields are omitted from the JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Stone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_turn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn error(err: &GameError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Default::default()
        }
    }
}

/// Holder of the single active game
#[derive(Default)]
pub struct Host {
    session: Option<GameSession>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Parse and run one JSON request line
    pub fn handle_line(&mut self, line: &str) -> Response {
        let result = serde_json::from_str::<Request>(line)
            .map_err(GameError::from)
            .and_then(|request| self.handle(request));
        match result {
            Ok(response) => response,
            Err(err) => {
                log::debug!("Request failed: {err}");
                Response::error(&err)
            }
        }
    }

    /// Run one request against the active game
    pub fn handle(&mut self, request: Request) -> Result<Response, GameError> {
        match request {
            Request::StartGame { size, human_color } => {
                let session = GameSession::start(GameConfig::new(size, human_color)?)?;
                let response = Response {
                    board: Some(session.snapshot()),
                    winner: session.winner(),
                    game_over: session.is_over().then_some(true),
                    ..Default::default()
                };
                self.session = Some(session);
                Ok(response)
            }
            Request::ResolveHumanMove { x, y, human_color } => {
                let session = self.active(human_color)?;
                let report = session.submit_human_move(x, y)?;
                if !report.accepted {
                    return Ok(Response {
                        valid: Some(false),
                        ..Default::default()
                    });
                }

                let over = session.is_over();
                Ok(Response {
                    valid: Some(true),
                    board: Some(session.snapshot()),
                    winner: session.winner(),
                    game_over: over.then_some(true),
                    bot_turn: (!over).then_some(true),
                    ..Default::default()
                })
            }
            Request::ResolveBotMove { human_color } => {
                let session = self.active(human_color)?;
                session.resolve_bot_move()?;
                Ok(Response {
                    board: Some(session.snapshot()),
                    winner: session.winner(),
                    game_over: Some(session.is_over()),
                    ..Default::default()
                })
            }
        }
    }

    /// Active session, checked against the color the caller claims to play
    fn active(&mut self, human_color: u8) -> Result<&mut GameSession, GameError> {
        let claimed = match Stone::from_code(human_color) {
            Some(stone) if stone.is_player() => stone,
            _ => return Err(GameError::InvalidColor(human_color)),
        };
        let session = self.session.as_mut().ok_or(GameError::NoActiveGame)?;
        if session.human_color() != claimed {
            return Err(GameError::ColorMismatch {
                expected: session.human_color(),
                actual: claimed,
            });
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests() {
        let req: Request = serde_json::from_str(r#"{"op":"startGame","size":9,"humanColor":1}"#).unwrap();
        assert_eq!(req, Request::StartGame { size: 9, human_color: 1 });

        let req: Request =
            serde_json::from_str(r#"{"op":"submitHumanMove","x":2,"y":3,"humanColor":2}"#).unwrap();
        assert_eq!(req, Request::ResolveHumanMove { x: 2, y: 3, human_color: 2 });
    }

    #[test]
    fn test_missing_arguments_reported() {
        let mut host = Host::new();
        let resp = host.handle_line(r#"{"op":"startGame","size":9}"#);
        assert!(resp.error.unwrap().contains("humanColor"));
        assert!(host.session().is_none());
    }

    #[test]
    fn test_move_without_game() {
        let mut host = Host::new();
        let resp = host.handle_line(r#"{"op":"resolveBotMove","humanColor":1}"#);
        assert_eq!(resp.error.as_deref(), Some("no active game"));
    }

    #[test]
    fn test_color_mismatch_leaves_game_untouched() {
        let mut host = Host::new();
        host.handle_line(r#"{"op":"startGame","size":3,"humanColor":1}"#);
        let before = host.session().unwrap().snapshot();

        let resp = host.handle_line(r#"{"op":"resolveHumanMove","x":0,"y":0,"humanColor":2}"#);
        assert!(resp.error.is_some());
        assert_eq!(host.session().unwrap().snapshot(), before);
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let resp = Response {
            valid: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"valid":false}"#);

        let resp = Response {
            board: Some(vec![0, 1]),
            winner: Some(Stone::Black),
            game_over: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"board":[0,1],"winner":1,"gameOver":true}"#
        );
    }
}
