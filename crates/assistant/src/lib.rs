//! ChessMaster chat assistant
//!
//! [`Assistant`] wraps a [`Responder`] and never fails: when the responder
//! errors, the caller gets [`FALLBACK_MESSAGE`] with `success == false`.
//! There are no retries.

use async_trait::async_trait;
use tracing::{debug, warn};

mod config;
mod error;
pub mod gemini;
mod prompt;
mod request;

pub use config::*;
pub use error::*;
pub use gemini::GeminiResponder;
pub use prompt::*;
pub use request::*;

pub const FALLBACK_MESSAGE: &str =
    "My circuits are a bit overloaded. Even genius chess AIs need a break sometimes. Try again in a moment.";

/// Produces the assistant's reply text.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, request: &ChatRequest) -> Result<String, AssistantError>;
}

/// What the chat panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Assistant<R> {
    responder: R,
}

impl<R: Responder> Assistant<R> {
    pub fn new(responder: R) -> Self {
        Self { responder }
    }

    pub async fn reply(&self, request: &ChatRequest) -> Reply {
        debug!(fen = %request.fen, "assistant request");
        match self.responder.respond(request).await {
            Ok(message) => Reply {
                success: true,
                message,
            },
            Err(err) => {
                warn!(error = %err, "assistant reply failed");
                Reply {
                    success: false,
                    message: FALLBACK_MESSAGE.to_string(),
                }
            }
        }
    }
}
