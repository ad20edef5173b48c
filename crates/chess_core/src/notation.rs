//! Standard Algebraic Notation for the move list.

use crate::movegen::{is_castle, legal_moves};
use crate::types::{file_of, rank_of, Side};
use cozy_chess::{Board, GameStatus, Move, Piece, Square};
use std::fmt;

/// One entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub san: String,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.side, self.san)
    }
}

/// SAN for `mv` played from `board`. Illegal moves fall back to coordinate form.
pub fn san(board: &Board, mv: Move) -> String {
    let mut after = board.clone();
    if after.try_play(mv).is_err() {
        return mv.to_string();
    }
    let Some(piece) = board.piece_on(mv.from) else {
        return mv.to_string();
    };

    let mut out = if is_castle(board, mv) {
        if file_of(mv.to) > file_of(mv.from) {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        }
    } else {
        let capture = board.color_on(mv.to).is_some()
            || (piece == Piece::Pawn && file_of(mv.from) != file_of(mv.to));
        let mut text = String::new();
        if piece == Piece::Pawn {
            if capture {
                text.push(file_char(mv.from));
            }
        } else {
            text.push(piece_letter(piece));
            text.push_str(&disambiguation(board, mv, piece));
        }
        if capture {
            text.push('x');
        }
        text.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            text.push('=');
            text.push(piece_letter(promo));
        }
        text
    };

    if after.status() == GameStatus::Won {
        out.push('#');
    } else if !after.checkers().is_empty() {
        out.push('+');
    }
    out
}

/// Builds the move-list entry for `mv` before it is played.
pub fn record(board: &Board, mv: Move) -> MoveRecord {
    MoveRecord {
        side: board.side_to_move().into(),
        san: san(board, mv),
    }
}

fn disambiguation(board: &Board, mv: Move, piece: Piece) -> String {
    let rivals: Vec<Square> = legal_moves(board)
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from && board.piece_on(m.from) == Some(piece))
        .map(|m| m.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let same_file = rivals.iter().any(|&sq| file_of(sq) == file_of(mv.from));
    let same_rank = rivals.iter().any(|&sq| rank_of(sq) == rank_of(mv.from));
    match (same_file, same_rank) {
        (false, _) => file_char(mv.from).to_string(),
        (true, false) => rank_char(mv.from).to_string(),
        (true, true) => mv.from.to_string(),
    }
}

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

fn file_char(sq: Square) -> char {
    (b'a' + file_of(sq) as u8) as char
}

fn rank_char(sq: Square) -> char {
    (b'1' + rank_of(sq) as u8) as char
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
