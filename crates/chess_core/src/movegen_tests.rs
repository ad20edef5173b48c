use super::*;

#[test]
fn startpos_has_20_moves() {
    let board = Board::default();
    assert_eq!(legal_moves(&board).len(), 20);
    assert_eq!(legal_moves_from(&board, Square::G1).len(), 2);
    assert!(legal_moves_from(&board, Square::E1).is_empty());
    assert!(has_legal_moves(&board));
}

#[test]
fn castling_lands_on_g_and_c_files() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", false).unwrap();
    let king_moves = legal_moves_from(&board, Square::E1);

    let short = king_moves.iter().find(|m| m.to == Square::H1).copied().unwrap();
    assert!(is_castle(&board, short));
    assert_eq!(landing_square(&board, short), Square::G1);

    let long = king_moves.iter().find(|m| m.to == Square::A1).copied().unwrap();
    assert!(is_castle(&board, long));
    assert_eq!(landing_square(&board, long), Square::C1);

    let step = king_moves.iter().find(|m| m.to == Square::F1).copied().unwrap();
    assert!(!is_castle(&board, step));
    assert_eq!(landing_square(&board, step), Square::F1);
}

#[test]
fn mated_side_has_no_moves() {
    let board = Board::from_fen(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        false,
    )
    .unwrap();
    assert!(!has_legal_moves(&board));
    let mut buf = vec![Move {
        from: Square::A2,
        to: Square::A3,
        promotion: None,
    }];
    legal_moves_into(&board, &mut buf);
    assert!(buf.is_empty());
}
