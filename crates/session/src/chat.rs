//! Chat transcript shown next to the board

use serde::{Deserialize, Serialize};

pub const GREETING: &str =
    "I'm ChessMaster, powered by Gemini AI. Ready to crush some chess? Let's see what you've got.";
pub const THINKING: &str = "Thinking...";
pub const ANALYZING: &str = "Analyzing position...";
pub const RESET_NOTICE: &str = "Board reset. Ready for a fresh battle? Bring it on!";
pub const FLIP_TO_BLACK: &str = "Now you're playing as Black. The dark side has cookies, they say.";
pub const FLIP_TO_WHITE: &str = "Back to White. The first-move advantage is yours again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Role,
    pub content: String,
    /// Placeholder still waiting for the assistant's reply
    #[serde(default)]
    pub pending: bool,
}

impl ChatEntry {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            pending: false,
        }
    }
}

/// Handle to a placeholder entry awaiting its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplySlot(usize);

/// Append-only transcript. Entries are never removed, so a [`ReplySlot`]
/// stays valid across resets and board flips.
#[derive(Debug, Clone)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            entries: vec![ChatEntry::new(Role::Assistant, GREETING)],
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Adds a user message. Blank input is ignored and yields `None`;
    /// otherwise the trimmed text is returned for sending on.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.entries.push(ChatEntry::new(Role::User, text));
        Some(text.to_string())
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.entries.push(ChatEntry::new(Role::Assistant, text));
    }

    /// Adds an assistant placeholder such as [`THINKING`].
    pub fn begin_reply(&mut self, placeholder: &str) -> ReplySlot {
        self.entries.push(ChatEntry {
            role: Role::Assistant,
            content: placeholder.to_string(),
            pending: true,
        });
        ReplySlot(self.entries.len() - 1)
    }

    /// Replaces a placeholder with the reply. Returns false if the slot was
    /// already resolved.
    pub fn resolve(&mut self, slot: ReplySlot, text: impl Into<String>) -> bool {
        match self.entries.get_mut(slot.0) {
            Some(entry) if entry.pending => {
                entry.content = text.into();
                entry.pending = false;
                true
            }
            _ => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|e| e.pending)
    }

    pub fn notify_reset(&mut self) {
        self.push_assistant(RESET_NOTICE);
    }

    /// `now_black` is the orientation after the flip.
    pub fn notify_flip(&mut self, now_black: bool) {
        self.push_assistant(if now_black { FLIP_TO_BLACK } else { FLIP_TO_WHITE });
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod chat_tests;
