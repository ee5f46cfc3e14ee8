//! Error types
//!
//! Two families: move rejection (always handled silently by the tick loop)
//! and configuration failures (reported when a session is created).

use thiserror::Error;

/// Result alias for configuration paths.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Target cell lies outside the board.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Target cell belongs to another player.
    #[error("cell ({row}, {col}) is owned by player {owner}")]
    Occupied { row: usize, col: usize, owner: usize },

    /// Input arrived while a chain reaction was still resolving.
    #[error("not accepting input while the board is resolving")]
    NotAcceptingInput,

    /// A winner has already been declared.
    #[error("game is over")]
    GameOver,
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("player count {0} outside 2..=8")]
    PlayerCount(usize),

    #[error("board {rows}x{cols} is smaller than 2x2")]
    BoardSize { rows: usize, cols: usize },

    #[error("{name} must be finite and > 0, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let e = MoveError::Occupied {
            row: 2,
            col: 3,
            owner: 1,
        };
        let msg = e.to_string();
        assert!(msg.contains("(2, 3)"));
        assert!(msg.contains("player 1"));
    }

    #[test]
    fn test_config_error_display() {
        let msg = ConfigError::PlayerCount(9).to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains("2..=8"));
    }
}
