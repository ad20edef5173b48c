use chess_core::PositionAnalysis;

pub const SUGGESTION_PROMPT: &str =
    "Give me a suggestion for my next move based on the current position.";

/// A question about the current position.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    /// Current position in FEN
    pub fen: String,
    pub state: PositionAnalysis,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, fen: impl Into<String>, state: PositionAnalysis) -> Self {
        Self {
            message: message.into(),
            fen: fen.into(),
            state,
        }
    }

    /// The canned "what should I play?" request.
    pub fn suggestion(fen: impl Into<String>, state: PositionAnalysis) -> Self {
        Self::new(SUGGESTION_PROMPT, fen, state)
    }
}
