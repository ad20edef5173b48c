use super::*;

fn quiet(side_to_move: Side) -> CheckFlags {
    CheckFlags {
        side_to_move,
        in_check: false,
        checkmate: false,
    }
}

#[test]
fn small_differences_are_equal() {
    assert_eq!(classify_advantage(MaterialTotals::new(39, 39), None), AdvantageLabel::Equal);
    assert_eq!(classify_advantage(MaterialTotals::new(39, 38), None), AdvantageLabel::Equal);
    assert_eq!(classify_advantage(MaterialTotals::new(38, 39), None), AdvantageLabel::Equal);
}

#[test]
fn two_pawns_is_an_advantage() {
    assert_eq!(classify_advantage(MaterialTotals::new(39, 37), None), AdvantageLabel::White);
    assert_eq!(classify_advantage(MaterialTotals::new(30, 39), None), AdvantageLabel::Black);
}

#[test]
fn threshold_is_configurable() {
    let strict = AdvantageClassifier::new(1.0);
    assert_eq!(strict.classify(MaterialTotals::new(5, 4), None), AdvantageLabel::White);

    let loose = AdvantageClassifier::new(4.0);
    assert_eq!(loose.classify(MaterialTotals::new(8, 5), None), AdvantageLabel::Equal);
}

#[test]
fn zero_difference_is_equal_even_with_zero_threshold() {
    let classifier = AdvantageClassifier::new(0.0);
    assert_eq!(classifier.classify(MaterialTotals::new(3, 3), None), AdvantageLabel::Equal);
}

#[test]
fn doubling_totals_keeps_label_outside_equal_band() {
    let cases = [(39, 39), (39, 30), (20, 31), (9, 0), (0, 5)];
    for (white, black) in cases {
        let base = classify_advantage(MaterialTotals::new(white, black), None);
        let doubled = classify_advantage(MaterialTotals::new(white * 2, black * 2), None);
        assert_eq!(base, doubled, "{white} vs {black}");
    }
}

#[test]
fn check_breaks_equal_tie_for_checking_side() {
    let flags = CheckFlags {
        side_to_move: Side::Black,
        in_check: true,
        checkmate: false,
    };
    assert_eq!(
        classify_advantage(MaterialTotals::new(39, 39), Some(flags)),
        AdvantageLabel::White
    );

    let flags = CheckFlags {
        side_to_move: Side::White,
        ..flags
    };
    assert_eq!(
        classify_advantage(MaterialTotals::new(39, 39), Some(flags)),
        AdvantageLabel::Black
    );
}

#[test]
fn check_does_not_override_material_edge() {
    let flags = CheckFlags {
        side_to_move: Side::White,
        in_check: true,
        checkmate: false,
    };
    assert_eq!(
        classify_advantage(MaterialTotals::new(30, 20), Some(flags)),
        AdvantageLabel::White
    );
}

#[test]
fn checkmate_overrides_material() {
    // Black is up a queen but has just been mated.
    let flags = CheckFlags {
        side_to_move: Side::Black,
        in_check: true,
        checkmate: true,
    };
    assert_eq!(
        classify_advantage(MaterialTotals::new(1, 18), Some(flags)),
        AdvantageLabel::White
    );
}

#[test]
fn quiet_flags_change_nothing() {
    assert_eq!(
        classify_advantage(MaterialTotals::new(39, 39), Some(quiet(Side::White))),
        AdvantageLabel::Equal
    );
    assert_eq!(
        classify_advantage(MaterialTotals::new(20, 39), Some(quiet(Side::White))),
        AdvantageLabel::Black
    );
}

#[test]
fn flags_read_from_board() {
    // Fool's mate: White is mated.
    let board = Board::from_fen(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        false,
    )
    .unwrap();
    let flags = CheckFlags::of(&board);
    assert_eq!(flags.side_to_move, Side::White);
    assert!(flags.in_check);
    assert!(flags.checkmate);

    let flags = CheckFlags::of(&Board::default());
    assert!(!flags.in_check);
    assert!(!flags.checkmate);
}

#[test]
fn labels_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&AdvantageLabel::Equal).unwrap(), "\"equal\"");
    assert_eq!(AdvantageLabel::White.to_string(), "white");
    assert_eq!(AdvantageLabel::Black.side(), Some(Side::Black));
    assert_eq!(AdvantageLabel::Equal.side(), None);
}
