//! Random Move Opponent
//!
//! Selects moves uniformly at random from all legal moves. This is the whole
//! of the opponent's "intelligence": there is no evaluation and no search.

use chess_core::{legal_moves_into, Board, Engine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An opponent that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    moves: Vec<Move>,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            moves: Vec::with_capacity(64),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            moves: Vec::with_capacity(64),
        }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        legal_moves_into(board, &mut self.moves);
        self.moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
