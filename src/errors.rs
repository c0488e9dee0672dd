//! Error types for the fallible edges of the game (saving and loading).
//! Gameplay itself never errors; bad input becomes a message to the player.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file corrupt: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save file schema mismatch: expected v{expected}, found v{found}")]
    SchemaMismatch { expected: u8, found: u8 },
}
