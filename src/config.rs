use crate::board::{Stone, MAX_BOARD_SIZE};
use crate::error::{ConfigError, GameError};

/// Settings for starting one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Board edge length
    pub size: usize,
    /// Color played by the human; the bot takes the other one
    pub human_color: Stone,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: 9,
            human_color: Stone::Black,
        }
    }
}

impl GameConfig {
    /// Build a validated config from wire values.
    pub fn new(size: usize, human_color: u8) -> Result<Self, GameError> {
        let human_color = match Stone::from_code(human_color) {
            Some(stone) if stone.is_player() => stone,
            _ => return Err(GameError::InvalidColor(human_color)),
        };
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }
        let config = GameConfig { size, human_color };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Validation("size must be > 0".into()));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        if !self.human_color.is_player() {
            return Err(ConfigError::Validation(
                "human_color must be Black or White".into(),
            ));
        }
        Ok(())
    }

    pub fn bot_color(&self) -> Stone {
        self.human_color.opponent()
    }
}
