//! Game state machine

use crate::config::SessionConfig;
use crate::error::SessionError;
use chess_core::{
    landing_square, legal_moves_from, record, Board, Engine, GameFlags, Move, MoveRecord, Piece,
    PositionAnalysis, Side, Square,
};
use std::time::Duration;
use tracing::{debug, warn};

/// Identifies one scheduled opponent reply.
pub type Ticket = u64;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Side },
    Stalemate,
    Draw,
}

impl Outcome {
    pub fn describe(&self) -> String {
        match self {
            Outcome::Checkmate { winner } => format!("Checkmate! {winner} wins"),
            Outcome::Stalemate => "Stalemate".to_string(),
            Outcome::Draw => "Draw".to_string(),
        }
    }
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to move.
    Idle,
    /// A user move was accepted; the opponent answers when `ticket` fires.
    AwaitingOpponentMove { ticket: Ticket },
    GameOver(Outcome),
}

/// What the caller has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Schedule the opponent reply after `delay`.
    ScheduleOpponent { ticket: Ticket, delay: Duration },
    /// The user is to move again.
    Ready,
    Finished(Outcome),
    /// A stale or unexpected event; nothing changed.
    Ignored,
}

/// The game the UI is driving.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    /// Move list in SAN
    history: Vec<MoveRecord>,
    /// Position hashes, one per position reached, for repetition detection
    position_history: Vec<u64>,
    phase: Phase,
    /// Last ticket handed out; anything older is stale.
    ticket: Ticket,
    /// Last move (for highlighting), as displayed from/to squares
    last_move: Option<(Square, Square)>,
    /// Currently selected square (for move input)
    selected: Option<Square>,
    /// Destination squares of the selected piece
    targets: Vec<Square>,
    config: SessionConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_board(Board::default(), config)
    }

    fn from_board(board: Board, config: SessionConfig) -> Self {
        let initial_hash = board.hash();
        Self {
            board,
            history: Vec::new(),
            position_history: vec![initial_hash],
            phase: Phase::Idle,
            ticket: 0,
            last_move: None,
            selected: None,
            targets: Vec::new(),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn targets(&self) -> &[Square] {
        &self.targets
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current position in FEN.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn is_user_turn(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Times the current position has occurred, this occurrence included.
    pub fn repetitions(&self) -> usize {
        let current = self.board.hash();
        self.position_history
            .iter()
            .filter(|&&h| h == current)
            .count()
    }

    pub fn analysis(&self) -> PositionAnalysis {
        PositionAnalysis::of(&self.board, self.repetitions(), &self.config.advantage)
    }

    /// Start over from the initial position. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        let ticket = self.ticket;
        let config = self.config;
        *self = Self::new(config);
        self.ticket = ticket + 1;
        debug!(stale_before = self.ticket, "session reset");
    }

    /// Click-to-move input.
    ///
    /// Clicking a piece of the side to move selects it, and clicking it again
    /// deselects it. Clicking one of the selected piece's destinations plays
    /// the move; anything else clears the selection.
    pub fn click(&mut self, sq: Square) -> Result<Option<Transition>, SessionError> {
        self.ensure_user_turn()?;

        if let Some(from) = self.selected {
            if self.targets.contains(&sq) {
                return self.submit_user_move(from, sq).map(Some);
            }
        }

        let reselect = self.selected != Some(sq);
        self.clear_selection();
        if reselect && self.board.color_on(sq) == Some(self.board.side_to_move()) {
            self.selected = Some(sq);
            self.targets = legal_moves_from(&self.board, sq)
                .into_iter()
                .map(|mv| landing_square(&self.board, mv))
                .collect();
        }
        Ok(None)
    }

    /// Play a user move given as from/to squares.
    ///
    /// Promotions always choose a queen. Castling may be entered either as
    /// the king's destination (`e1g1`) or as king takes rook (`e1h1`).
    pub fn submit_user_move(&mut self, from: Square, to: Square) -> Result<Transition, SessionError> {
        self.ensure_user_turn()?;

        let mv = self
            .resolve(from, to)
            .ok_or(SessionError::IllegalMove { from, to })?;
        self.apply(mv)?;

        if let Some(outcome) = self.check_game_end() {
            return Ok(self.finish(outcome));
        }

        debug!("user move accepted");
        Ok(self.schedule_opponent())
    }

    /// The opponent's timer went off.
    ///
    /// A missing or illegal engine reply leaves the position alone and
    /// schedules another attempt under a fresh ticket.
    pub fn opponent_timer_fired(&mut self, ticket: Ticket, engine: &mut dyn Engine) -> Transition {
        match self.phase {
            Phase::AwaitingOpponentMove { ticket: expected } if expected == ticket => {}
            _ => {
                debug!(ticket, "ignoring stale opponent timer");
                return Transition::Ignored;
            }
        }

        let Some(mv) = engine.choose_move(&self.board) else {
            warn!(engine = engine.name(), "opponent found no move, asking again");
            return self.schedule_opponent();
        };
        debug!(engine = engine.name(), %mv, "opponent move");
        if let Err(err) = self.apply(mv) {
            warn!(engine = engine.name(), error = %err, "opponent move rejected, asking again");
            return self.schedule_opponent();
        }

        if let Some(outcome) = self.check_game_end() {
            return self.finish(outcome);
        }
        self.phase = Phase::Idle;
        Transition::Ready
    }

    fn schedule_opponent(&mut self) -> Transition {
        self.ticket += 1;
        self.phase = Phase::AwaitingOpponentMove {
            ticket: self.ticket,
        };
        debug!(ticket = self.ticket, "opponent scheduled");
        Transition::ScheduleOpponent {
            ticket: self.ticket,
            delay: self.config.opponent_delay(),
        }
    }

    fn ensure_user_turn(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Idle => Ok(()),
            Phase::AwaitingOpponentMove { .. } => Err(SessionError::OpponentToMove),
            Phase::GameOver(_) => Err(SessionError::GameOver),
        }
    }

    fn resolve(&self, from: Square, to: Square) -> Option<Move> {
        legal_moves_from(&self.board, from)
            .into_iter()
            .filter(|&mv| mv.to == to || landing_square(&self.board, mv) == to)
            .find(|mv| mv.promotion.is_none() || mv.promotion == Some(Piece::Queen))
    }

    fn apply(&mut self, mv: Move) -> Result<(), SessionError> {
        let entry = record(&self.board, mv);
        let landing = landing_square(&self.board, mv);
        self.board
            .try_play(mv)
            .map_err(|_| SessionError::IllegalMove {
                from: mv.from,
                to: mv.to,
            })?;
        self.history.push(entry);
        self.position_history.push(self.board.hash());
        self.last_move = Some((mv.from, landing));
        self.clear_selection();
        Ok(())
    }

    fn check_game_end(&self) -> Option<Outcome> {
        let flags = GameFlags::of(&self.board, self.repetitions());
        if !flags.is_game_over() {
            return None;
        }
        if flags.checkmate {
            let loser = Side::from(self.board.side_to_move());
            Some(Outcome::Checkmate {
                winner: loser.other(),
            })
        } else if flags.stalemate {
            Some(Outcome::Stalemate)
        } else if flags.draw {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Transition {
        debug!(?outcome, "game over");
        self.phase = Phase::GameOver(outcome);
        Transition::Finished(outcome)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
