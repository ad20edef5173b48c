//! Discrete advantage labels derived from material and check state.

use crate::material::MaterialTotals;
use crate::types::Side;
use cozy_chess::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Material differences strictly below this magnitude count as equal.
///
/// Totals are whole pawn units, so 1.5 treats a single-pawn edge as equal and
/// anything from two pawns up as an advantage.
pub const DEFAULT_EQUAL_THRESHOLD: f64 = 1.5;

/// Which side, if any, is favoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvantageLabel {
    White,
    Black,
    Equal,
}

impl From<Side> for AdvantageLabel {
    fn from(side: Side) -> Self {
        match side {
            Side::White => AdvantageLabel::White,
            Side::Black => AdvantageLabel::Black,
        }
    }
}

impl AdvantageLabel {
    /// The favoured side, or `None` for an equal position.
    pub fn side(self) -> Option<Side> {
        match self {
            AdvantageLabel::White => Some(Side::White),
            AdvantageLabel::Black => Some(Side::Black),
            AdvantageLabel::Equal => None,
        }
    }
}

impl fmt::Display for AdvantageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdvantageLabel::White => "white",
            AdvantageLabel::Black => "black",
            AdvantageLabel::Equal => "equal",
        })
    }
}

/// Check state of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckFlags {
    pub side_to_move: Side,
    pub in_check: bool,
    pub checkmate: bool,
}

impl CheckFlags {
    pub fn of(board: &Board) -> Self {
        let in_check = !board.checkers().is_empty();
        Self {
            side_to_move: board.side_to_move().into(),
            in_check,
            checkmate: in_check && board.status() == GameStatus::Won,
        }
    }
}

/// Turns material totals into an [`AdvantageLabel`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvantageClassifier {
    pub equal_threshold: f64,
}

impl Default for AdvantageClassifier {
    fn default() -> Self {
        Self {
            equal_threshold: DEFAULT_EQUAL_THRESHOLD,
        }
    }
}

impl AdvantageClassifier {
    pub fn new(equal_threshold: f64) -> Self {
        Self { equal_threshold }
    }

    /// Classifies the position.
    ///
    /// Checkmate always goes to the side that delivered it. Otherwise the
    /// material difference decides, and a materially equal position leans
    /// towards the side giving check.
    pub fn classify(&self, totals: MaterialTotals, flags: Option<CheckFlags>) -> AdvantageLabel {
        let diff = f64::from(totals.difference());
        let mut label = if diff == 0.0 || diff.abs() < self.equal_threshold {
            AdvantageLabel::Equal
        } else if diff > 0.0 {
            AdvantageLabel::White
        } else {
            AdvantageLabel::Black
        };

        if let Some(flags) = flags {
            let attacker = flags.side_to_move.other();
            if flags.checkmate {
                return attacker.into();
            }
            if flags.in_check && label == AdvantageLabel::Equal {
                label = attacker.into();
            }
        }
        label
    }
}

/// [`AdvantageClassifier::classify`] with the default threshold.
pub fn classify_advantage(totals: MaterialTotals, flags: Option<CheckFlags>) -> AdvantageLabel {
    AdvantageClassifier::default().classify(totals, flags)
}

#[cfg(test)]
#[path = "advantage_tests.rs"]
mod advantage_tests;
