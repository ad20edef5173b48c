use super::*;
use chess_core::{AdvantageLabel, Color};
use std::collections::VecDeque;

/// Plays a fixed list of UCI moves, then gives up.
struct Scripted {
    moves: VecDeque<Move>,
}

impl Scripted {
    fn new(uci: &[&str]) -> Self {
        Self {
            moves: uci.iter().map(|m| m.parse().unwrap()).collect(),
        }
    }
}

impl Engine for Scripted {
    fn choose_move(&mut self, _board: &Board) -> Option<Move> {
        self.moves.pop_front()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn session_at(fen: &str) -> GameSession {
    GameSession::from_board(Board::from_fen(fen, false).unwrap(), SessionConfig::default())
}

/// Submit a user move and, if one was scheduled, fire the opponent reply.
fn play_round(session: &mut GameSession, engine: &mut Scripted, from: &str, to: &str) -> Transition {
    match session.submit_user_move(sq(from), sq(to)).unwrap() {
        Transition::ScheduleOpponent { ticket, .. } => session.opponent_timer_fired(ticket, engine),
        other => other,
    }
}

#[test]
fn new_session_waits_for_user() {
    let session = GameSession::default();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.is_user_turn());
    assert!(session.history().is_empty());
    assert_eq!(session.repetitions(), 1);
    assert_eq!(
        session.fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn user_move_schedules_opponent() {
    let mut session = GameSession::default();

    let transition = session.submit_user_move(sq("e2"), sq("e4")).unwrap();

    assert_eq!(
        transition,
        Transition::ScheduleOpponent {
            ticket: 1,
            delay: Duration::from_millis(300),
        }
    );
    assert_eq!(session.phase(), Phase::AwaitingOpponentMove { ticket: 1 });
    assert_eq!(session.history()[0].san, "e4");
    assert_eq!(session.last_move(), Some((sq("e2"), sq("e4"))));
}

#[test]
fn user_cannot_move_while_opponent_thinks() {
    let mut session = GameSession::default();
    session.submit_user_move(sq("e2"), sq("e4")).unwrap();

    let err = session.submit_user_move(sq("d2"), sq("d4")).unwrap_err();

    assert_eq!(err, SessionError::OpponentToMove);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn illegal_move_is_rejected_without_side_effects() {
    let mut session = GameSession::default();
    let before = session.fen();

    let err = session.submit_user_move(sq("e2"), sq("e5")).unwrap_err();

    assert_eq!(
        err,
        SessionError::IllegalMove {
            from: sq("e2"),
            to: sq("e5"),
        }
    );
    assert_eq!(session.fen(), before);
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn opponent_reply_returns_turn_to_user() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["e7e5"]);

    let transition = play_round(&mut session, &mut engine, "e2", "e4");

    assert_eq!(transition, Transition::Ready);
    assert_eq!(session.phase(), Phase::Idle);
    let sans: Vec<&str> = session.history().iter().map(|r| r.san.as_str()).collect();
    assert_eq!(sans, ["e4", "e5"]);
    assert_eq!(session.history()[1].side, Side::Black);
}

#[test]
fn wrong_ticket_is_ignored() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["e7e5"]);
    session.submit_user_move(sq("e2"), sq("e4")).unwrap();

    assert_eq!(session.opponent_timer_fired(7, &mut engine), Transition::Ignored);
    assert_eq!(session.phase(), Phase::AwaitingOpponentMove { ticket: 1 });
    assert_eq!(session.history().len(), 1);
}

#[test]
fn illegal_opponent_reply_keeps_opponent_to_move() {
    let mut session = GameSession::default();
    // White's pawn move offered on Black's turn, then a real reply.
    let mut engine = Scripted::new(&["e2e4", "e7e5"]);
    session.submit_user_move(sq("d2"), sq("d4")).unwrap();

    assert_eq!(
        session.opponent_timer_fired(1, &mut engine),
        Transition::ScheduleOpponent {
            ticket: 2,
            delay: Duration::from_millis(300),
        }
    );
    assert_eq!(session.phase(), Phase::AwaitingOpponentMove { ticket: 2 });
    assert_eq!(session.board().side_to_move(), Color::Black);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.click(sq("e7")), Err(SessionError::OpponentToMove));
    assert_eq!(session.selected(), None);

    assert_eq!(session.opponent_timer_fired(1, &mut engine), Transition::Ignored);
    assert_eq!(session.opponent_timer_fired(2, &mut engine), Transition::Ready);
    let sans: Vec<&str> = session.history().iter().map(|r| r.san.as_str()).collect();
    assert_eq!(sans, ["d4", "e5"]);
}

#[test]
fn silent_opponent_is_asked_again() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&[]);
    session.submit_user_move(sq("e2"), sq("e4")).unwrap();

    let transition = session.opponent_timer_fired(1, &mut engine);

    assert!(matches!(transition, Transition::ScheduleOpponent { ticket: 2, .. }));
    assert!(!session.is_user_turn());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn reset_makes_pending_ticket_stale() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["e7e5"]);
    let Transition::ScheduleOpponent { ticket, .. } =
        session.submit_user_move(sq("e2"), sq("e4")).unwrap()
    else {
        panic!("expected the opponent to be scheduled");
    };

    session.reset();

    assert_eq!(session.opponent_timer_fired(ticket, &mut engine), Transition::Ignored);
    assert!(session.history().is_empty());
    assert_eq!(session.phase(), Phase::Idle);

    // The next schedule gets a fresh ticket.
    match session.submit_user_move(sq("d2"), sq("d4")).unwrap() {
        Transition::ScheduleOpponent { ticket: next, .. } => assert!(next > ticket),
        other => panic!("unexpected transition {other:?}"),
    }
}

#[test]
fn user_checkmate_ends_game() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["e7e5", "b8c6", "g8f6"]);

    play_round(&mut session, &mut engine, "e2", "e4");
    play_round(&mut session, &mut engine, "f1", "c4");
    play_round(&mut session, &mut engine, "d1", "h5");
    let transition = session.submit_user_move(sq("h5"), sq("f7")).unwrap();

    let outcome = Outcome::Checkmate {
        winner: Side::White,
    };
    assert_eq!(transition, Transition::Finished(outcome));
    assert_eq!(session.phase(), Phase::GameOver(outcome));
    assert_eq!(session.history().last().unwrap().san, "Qxf7#");
    assert_eq!(outcome.describe(), "Checkmate! White wins");
    assert_eq!(
        session.submit_user_move(sq("e1"), sq("e2")),
        Err(SessionError::GameOver)
    );
}

#[test]
fn opponent_checkmate_ends_game() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["e7e5", "d8h4"]);

    play_round(&mut session, &mut engine, "f2", "f3");
    let transition = play_round(&mut session, &mut engine, "g2", "g4");

    assert_eq!(
        transition,
        Transition::Finished(Outcome::Checkmate {
            winner: Side::Black,
        })
    );
    assert!(session.analysis().flags.checkmate);
    assert_eq!(session.analysis().advantage, AdvantageLabel::Black);
}

#[test]
fn stalemate_ends_game() {
    let mut session = session_at("k7/8/8/2Q5/8/8/8/1K6 w - - 0 1");

    let transition = session.submit_user_move(sq("c5"), sq("b6")).unwrap();

    assert_eq!(transition, Transition::Finished(Outcome::Stalemate));
    assert_eq!(Outcome::Stalemate.describe(), "Stalemate");
}

#[test]
fn threefold_repetition_is_a_draw() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["g8f6", "f6g8", "g8f6", "f6g8"]);

    assert_eq!(play_round(&mut session, &mut engine, "g1", "f3"), Transition::Ready);
    assert_eq!(play_round(&mut session, &mut engine, "f3", "g1"), Transition::Ready);
    assert_eq!(session.repetitions(), 2);
    assert_eq!(play_round(&mut session, &mut engine, "g1", "f3"), Transition::Ready);
    let transition = play_round(&mut session, &mut engine, "f3", "g1");

    assert_eq!(transition, Transition::Finished(Outcome::Draw));
    assert_eq!(session.repetitions(), 3);
}

#[test]
fn promotion_defaults_to_queen() {
    let mut session = session_at("8/P6k/8/8/8/8/8/K7 w - - 0 1");

    session.submit_user_move(sq("a7"), sq("a8")).unwrap();

    assert_eq!(session.board().piece_on(sq("a8")), Some(Piece::Queen));
    assert_eq!(session.history()[0].san, "a8=Q");
}

#[test]
fn castling_accepts_king_destination() {
    let mut session = session_at("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");

    session.submit_user_move(sq("e1"), sq("g1")).unwrap();

    assert_eq!(session.board().piece_on(sq("g1")), Some(Piece::King));
    assert_eq!(session.board().piece_on(sq("f1")), Some(Piece::Rook));
    assert_eq!(session.history()[0].san, "O-O");
    assert_eq!(session.last_move(), Some((sq("e1"), sq("g1"))));
}

#[test]
fn castling_accepts_king_takes_rook() {
    let mut session = session_at("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");

    session.submit_user_move(sq("e1"), sq("a1")).unwrap();

    assert_eq!(session.board().piece_on(sq("c1")), Some(Piece::King));
    assert_eq!(session.history()[0].san, "O-O-O");
}

#[test]
fn click_selects_then_moves() {
    let mut session = GameSession::default();

    assert_eq!(session.click(sq("e2")), Ok(None));
    assert_eq!(session.selected(), Some(sq("e2")));
    assert!(session.targets().contains(&sq("e3")));
    assert!(session.targets().contains(&sq("e4")));
    assert_eq!(session.targets().len(), 2);

    let transition = session.click(sq("e4")).unwrap();

    assert!(matches!(transition, Some(Transition::ScheduleOpponent { .. })));
    assert_eq!(session.selected(), None);
    assert!(session.targets().is_empty());
}

#[test]
fn click_elsewhere_clears_selection() {
    let mut session = GameSession::default();

    session.click(sq("g1")).unwrap();
    assert_eq!(session.selected(), Some(sq("g1")));

    // Clicking the same piece again deselects it.
    session.click(sq("g1")).unwrap();
    assert_eq!(session.selected(), None);

    session.click(sq("g1")).unwrap();
    session.click(sq("e5")).unwrap();
    assert_eq!(session.selected(), None);

    // Opponent pieces cannot be selected.
    session.click(sq("e7")).unwrap();
    assert_eq!(session.selected(), None);
}

#[test]
fn click_switches_between_own_pieces() {
    let mut session = GameSession::default();

    session.click(sq("g1")).unwrap();
    session.click(sq("b1")).unwrap();

    assert_eq!(session.selected(), Some(sq("b1")));
    assert!(session.targets().contains(&sq("c3")));
}

#[test]
fn analysis_tracks_the_board() {
    let mut session = GameSession::default();
    let mut engine = Scripted::new(&["d7d5"]);
    assert_eq!(session.analysis().advantage, AdvantageLabel::Equal);

    play_round(&mut session, &mut engine, "e2", "e4");
    session.submit_user_move(sq("e4"), sq("d5")).unwrap();

    let analysis = session.analysis();
    assert_eq!(analysis.material.difference(), 1);
    assert_eq!(analysis.turn, Side::Black);
}

#[test]
fn configured_delay_is_used() {
    let config = SessionConfig {
        opponent_delay_ms: 1200,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(config);

    match session.submit_user_move(sq("e2"), sq("e4")).unwrap() {
        Transition::ScheduleOpponent { delay, .. } => {
            assert_eq!(delay, Duration::from_millis(1200))
        }
        other => panic!("unexpected transition {other:?}"),
    }
}
