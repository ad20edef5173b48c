use chess_core::Square;
use thiserror::Error;

/// Why a user move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the opponent is still to move")]
    OpponentToMove,
    #[error("the game is over")]
    GameOver,
    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },
}
