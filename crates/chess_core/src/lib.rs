//! ChessMaster core: position evaluation and everything derived from it.
//!
//! Rules, move legality and FEN handling come from `cozy-chess`; this crate
//! adds the material evaluator, the advantage classifier, the evaluation-bar
//! encoding and the small amount of game bookkeeping the UI needs on top.

pub mod advantage;
pub mod analysis;
pub mod display;
pub mod material;
pub mod movegen;
pub mod notation;
pub mod openings;
pub mod types;

pub use advantage::*;
pub use analysis::*;
pub use display::*;
pub use material::*;
pub use movegen::*;
pub use notation::*;
pub use openings::*;
pub use types::*;

// The rules library is part of this crate's public API.
pub use cozy_chess::{Board, Color, GameStatus, Move, Piece, Square};

// =============================================================================
// Engine trait — implemented by anything that can pick a move for the opponent
// =============================================================================

/// Trait that all opponents must implement.
pub trait Engine: Send {
    /// Pick a move for the side to move, or `None` if there is no legal move.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;

    /// Display name of the opponent
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
