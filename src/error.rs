use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the game loop.
///
/// Everything here propagates straight to the engine loop, which logs it and
/// shuts down. `InputCancelled` is the one variant that is not a failure: it
/// carries the player's quit request out of whatever screen is active.
#[derive(Debug, Error)]
pub enum GameError {
    /// The world could not be set up, e.g. a skyline too narrow for placement.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Escape or Ctrl+Q was pressed.
    #[error("Input cancelled by player")]
    InputCancelled,

    /// Numeric entry produced text that does not parse as a number.
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumericInput(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Window, surface, adapter or device creation failed.
    #[error("Graphics error: {0}")]
    Graphics(String),
}

impl GameError {
    /// `true` when the error is the quit chord rather than a real failure.
    pub fn is_cancel(&self) -> bool {
        matches!(self, GameError::InputCancelled)
    }
}
