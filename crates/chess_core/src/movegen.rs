use crate::types::file_of;
use cozy_chess::{Board, File, Move, Square};

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    board.generate_moves(|moves| {
        out.extend(moves);
        false
    });
}

/// Legal moves of the piece standing on `from`.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    board.generate_moves(|moves| {
        if moves.from == from {
            out.extend(moves);
        }
        false
    });
    out
}

pub fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

/// Castling is encoded as the king capturing its own rook.
pub fn is_castle(board: &Board, mv: Move) -> bool {
    board.color_on(mv.to) == Some(board.side_to_move())
}

/// Square the moving piece ends up on. Differs from `mv.to` only for castling.
pub fn landing_square(board: &Board, mv: Move) -> Square {
    if !is_castle(board, mv) {
        return mv.to;
    }
    let file = if file_of(mv.to) > file_of(mv.from) {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
