use thiserror::Error;

/// Every way a reply can fail collapses into this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("assistant unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AssistantError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        AssistantError::ServiceUnavailable(reason.into())
    }
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::ServiceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::ServiceUnavailable(err.to_string())
    }
}
