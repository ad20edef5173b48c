//! Game-state summary of a position: termination flags, material, advantage.
//!
//! The serialized form of [`PositionAnalysis`] is the game-state JSON handed to
//! the chat assistant, so its field names are part of the prompt contract.

use crate::advantage::{AdvantageClassifier, AdvantageLabel, CheckFlags};
use crate::display::{encode_display, encode_for_label, DisplayEncoding};
use crate::material::{evaluate_material, MaterialTotals};
use crate::movegen::has_legal_moves;
use crate::types::{file_of, rank_of, Side};
use cozy_chess::{Board, Piece};
use serde::{Deserialize, Serialize};

/// Halfmove clock value at which the fifty-move rule applies.
pub const FIFTY_MOVE_HALFMOVES: u8 = 100;

/// Number of occurrences of a position that makes a repetition draw.
pub const REPETITION_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFlags {
    #[serde(rename = "isCheck")]
    pub check: bool,
    #[serde(rename = "isCheckmate")]
    pub checkmate: bool,
    #[serde(rename = "isDraw")]
    pub draw: bool,
    #[serde(rename = "isStalemate")]
    pub stalemate: bool,
}

impl GameFlags {
    /// `repetitions` is how many times the current position has occurred,
    /// counting this one.
    pub fn of(board: &Board, repetitions: usize) -> Self {
        let check = !board.checkers().is_empty();
        let can_move = has_legal_moves(board);
        let checkmate = check && !can_move;
        let stalemate = !check && !can_move;
        let draw = !checkmate
            && (stalemate
                || board.halfmove_clock() >= FIFTY_MOVE_HALFMOVES
                || is_insufficient_material(board)
                || repetitions >= REPETITION_LIMIT);
        Self {
            check,
            checkmate,
            draw,
            stalemate,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.draw
    }
}

/// Neither side can possibly mate.
///
/// Bare kings, a single minor piece, or any number of bishops all standing on
/// squares of one colour.
pub fn is_insufficient_material(board: &Board) -> bool {
    let others = board.occupied() & !board.pieces(Piece::King);
    let bishops = board.pieces(Piece::Bishop);
    let minors = bishops | board.pieces(Piece::Knight);

    match others.len() {
        0 => true,
        1 => others == (others & minors),
        _ => {
            if others != bishops {
                return false;
            }
            let mut shades = others.into_iter().map(|sq| (file_of(sq) + rank_of(sq)) % 2);
            match shades.next() {
                Some(first) => shades.all(|shade| shade == first),
                None => true,
            }
        }
    }
}

/// Everything the analysis panel and the assistant need about one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionAnalysis {
    #[serde(flatten)]
    pub flags: GameFlags,
    pub turn: Side,
    pub material: MaterialTotals,
    pub advantage: AdvantageLabel,
}

impl PositionAnalysis {
    pub fn of(board: &Board, repetitions: usize, classifier: &AdvantageClassifier) -> Self {
        let flags = GameFlags::of(board, repetitions);
        let turn = Side::from(board.side_to_move());
        let material = evaluate_material(board);
        let check = CheckFlags {
            side_to_move: turn,
            in_check: flags.check,
            checkmate: flags.checkmate,
        };
        Self {
            flags,
            turn,
            material,
            advantage: classifier.classify(material, Some(check)),
        }
    }

    /// Evaluation bar driven by the raw material difference.
    pub fn bar(&self) -> DisplayEncoding {
        encode_display(f64::from(self.material.difference()))
    }

    /// Material caption that agrees with the advantage label.
    pub fn balance(&self) -> DisplayEncoding {
        encode_for_label(self.advantage, self.material)
    }

    /// One-sentence description of the position.
    pub fn verdict(&self) -> String {
        if self.flags.checkmate {
            return "Checkmate! Game over.".to_string();
        }
        if self.flags.stalemate {
            return "Stalemate! The game is a draw.".to_string();
        }
        if self.flags.draw {
            return "The game is a draw.".to_string();
        }
        match self.advantage.side() {
            None => "The position is roughly equal. Both sides have chances.".to_string(),
            Some(side) => format!("{side} has a material advantage and better winning chances."),
        }
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
