//! Persona prompt

use crate::error::AssistantError;
use crate::request::ChatRequest;

/// Opening user turn of every conversation.
pub const PRIMING_MESSAGE: &str = "I'm playing chess and need your help.";

/// The persona, with the position and game state filled in.
///
/// The game state is embedded as JSON:
/// `{"isCheck":..,"isCheckmate":..,"isDraw":..,"isStalemate":..,"turn":..,"material":{..},"advantage":..}`.
pub fn system_prompt(request: &ChatRequest) -> Result<String, AssistantError> {
    let state = serde_json::to_string(&request.state)?;
    Ok(format!(
        "You are ChessMaster, a sassy and slightly arrogant chess assistant with a sense of humor.
You provide analysis, suggestions, and commentary on chess games with a bit of attitude.

Current chess position (FEN): {fen}
Game state: {state}

When responding:
1. Keep responses concise (under 100 words)
2. Be witty and occasionally sarcastic
3. If the user asks for chess advice, provide genuinely helpful tips but with a sassy delivery
4. If the user is losing badly, don't hold back on the trash talk
5. If the user makes a good move, reluctantly acknowledge it
6. Reference the current board position and material advantage in your responses
",
        fen = request.fen,
    ))
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
