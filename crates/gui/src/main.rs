//! ChessMaster desktop application
//!
//! Play against a random opponent while the side panel tracks material,
//! advantage and game state, suggests openings, and chats about the
//! position through a hosted language model.

mod app;
mod board;
mod panels;
mod settings;
mod styles;

use app::ChessApp;
use iced::application;
use settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load();
    info!(
        opponent_delay_ms = settings.session.opponent_delay_ms,
        equal_threshold = settings.session.advantage.equal_threshold,
        model = %settings.assistant.model,
        "starting ChessMaster"
    );

    application("ChessMaster", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size((1200.0, 800.0))
        .run_with(move || ChessApp::new(settings))
}
