//! Material counting with fixed pawn-unit weights.

use crate::types::Side;
use cozy_chess::{Board, Color, Piece};
use serde::{Deserialize, Serialize};

/// Material weights in pawn units.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [u32; 6] = [1, 3, 3, 5, 9, 0];

/// Weight of a single piece. Kings are never counted.
pub fn piece_value(piece: Piece) -> u32 {
    match piece {
        Piece::Pawn => PIECE_VALUES[0],
        Piece::Knight => PIECE_VALUES[1],
        Piece::Bishop => PIECE_VALUES[2],
        Piece::Rook => PIECE_VALUES[3],
        Piece::Queen => PIECE_VALUES[4],
        Piece::King => PIECE_VALUES[5],
    }
}

/// Per-side material sums for one position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTotals {
    pub white: u32,
    pub black: u32,
}

impl MaterialTotals {
    pub fn new(white: u32, black: u32) -> Self {
        Self { white, black }
    }

    /// Signed material difference, white minus black.
    pub fn difference(&self) -> i32 {
        self.white as i32 - self.black as i32
    }

    pub fn for_side(&self, side: Side) -> u32 {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    /// Totals with the colours exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            white: self.black,
            black: self.white,
        }
    }

    fn add(&mut self, side: Side, value: u32) {
        match side {
            Side::White => self.white += value,
            Side::Black => self.black += value,
        }
    }
}

/// Sums the material of both sides on `board`.
pub fn evaluate_material(board: &Board) -> MaterialTotals {
    let mut totals = MaterialTotals::default();
    for piece in Piece::ALL {
        let value = piece_value(piece);
        totals.white += value * board.colored_pieces(Color::White, piece).len();
        totals.black += value * board.colored_pieces(Color::Black, piece).len();
    }
    totals
}

/// Sums material straight from a FEN piece-placement field.
///
/// Uppercase letters count for White and lowercase for Black. Digits, rank
/// separators and unknown codes contribute nothing. A full FEN record may be
/// passed; only the text before the first space is read.
pub fn material_from_placement(placement: &str) -> MaterialTotals {
    let field = placement.split(' ').next().unwrap_or_default();
    let mut totals = MaterialTotals::default();
    for ch in field.chars() {
        if let Some((side, value)) = placement_value(ch) {
            totals.add(side, value);
        }
    }
    totals
}

fn placement_value(ch: char) -> Option<(Side, u32)> {
    let piece = match ch.to_ascii_lowercase() {
        'p' => Piece::Pawn,
        'n' => Piece::Knight,
        'b' => Piece::Bishop,
        'r' => Piece::Rook,
        'q' => Piece::Queen,
        'k' => Piece::King,
        _ => return None,
    };
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    Some((side, piece_value(piece)))
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod material_tests;
