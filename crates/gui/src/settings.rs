//! Settings file
//!
//! Read from `chessmaster.toml` in the working directory, or from the path in
//! `CHESSMASTER_CONFIG`. Every field has a default, so an empty or missing
//! file is fine.
//!
//! ```toml
//! [session]
//! opponent_delay_ms = 300
//!
//! [session.advantage]
//! equal_threshold = 1.5
//!
//! [assistant]
//! model = "gemini-pro"
//! api_key_env = "GEMINI_API_KEY"
//! timeout_secs = 30
//! ```

use assistant::AssistantConfig;
use game_session::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_SETTINGS_FILE: &str = "chessmaster.toml";
pub const SETTINGS_ENV: &str = "CHESSMASTER_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub session: SessionConfig,
    pub assistant: AssistantConfig,
}

impl Settings {
    pub fn parse(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Loads settings, falling back to defaults on any error.
    ///
    /// A missing default file is normal and only logged at info level; a
    /// missing file named by the environment, or any parse error, is a
    /// warning.
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_or_default(Path::new(&path), true),
            None => Self::load_or_default(Path::new(DEFAULT_SETTINGS_FILE), false),
        }
    }

    fn load_or_default(path: &Path, explicit: bool) -> Self {
        match Self::from_path(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(SettingsError::Io { source, .. })
                if !explicit && source.kind() == std::io::ErrorKind::NotFound =>
            {
                info!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(error = %err, "using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
