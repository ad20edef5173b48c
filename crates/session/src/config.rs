use chess_core::AdvantageClassifier;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before the opponent answers a user move.
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 300;

/// Session settings, read from the `[session]` table of the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub opponent_delay_ms: u64,
    pub advantage: AdvantageClassifier,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
            advantage: AdvantageClassifier::default(),
        }
    }
}

impl SessionConfig {
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}
