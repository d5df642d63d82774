use thiserror::Error;

/// Errors raised while setting up or exporting a game.
///
/// Running out of money is not an error: bankruptcy and a short bank are
/// recorded in the game state.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Number of players must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),

    #[error("Invalid rules configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode game state: {0}")]
    Encode(#[from] bincode::Error),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;
