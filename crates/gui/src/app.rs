//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::panels;
use crate::settings::Settings;
use crate::styles::{self, PANEL_WIDTH};

use assistant::{Assistant, ChatRequest, GeminiResponder, Reply, FALLBACK_MESSAGE};
use chess_core::Engine;
use game_session::{
    ChatLog, GameSession, OpponentTimer, Phase, ReplySlot, TimerOutcome, Transition, ANALYZING,
    THINKING,
};
use iced::widget::{button, column, container, horizontal_rule, horizontal_space, row, text};
use iced::{Element, Length, Task, Theme};
use random_engine::RandomEngine;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Side panel tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Analysis,
    Openings,
    Chat,
}

/// Main application state
pub struct ChessApp {
    /// Current tab
    tab: Tab,
    session: GameSession,
    opponent: RandomEngine,
    timer: OpponentTimer,
    /// Board flipped?
    flipped: bool,
    chat: ChatLog,
    /// Chat input not yet sent
    draft: String,
    /// `None` when the HTTP client could not be built; every request then
    /// gets the fallback reply.
    assistant: Option<Arc<Assistant<GeminiResponder>>>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    TabSelected(Tab),

    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    FlipBoard,

    // Opponent
    OpponentTimer(TimerOutcome),

    // Assistant
    DraftChanged(String),
    SendChat,
    GetSuggestion,
    AssistantReplied(ReplySlot, Reply),
}

impl ChessApp {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let assistant = match GeminiResponder::new(settings.assistant.clone()) {
            Ok(responder) => {
                if !responder.has_api_key() {
                    warn!(
                        var = %settings.assistant.api_key_env,
                        "no API key set, the assistant will not answer"
                    );
                }
                Some(Arc::new(Assistant::new(responder)))
            }
            Err(err) => {
                error!(error = %err, "failed to set up the assistant");
                None
            }
        };

        (
            Self {
                tab: Tab::Analysis,
                session: GameSession::new(settings.session),
                opponent: RandomEngine::new(),
                timer: OpponentTimer::new(),
                flipped: false,
                chat: ChatLog::new(),
                draft: String::new(),
                assistant,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Task::none()
            }

            Message::Board(BoardMessage::SquareClicked(sq)) => match self.session.click(sq) {
                Ok(Some(transition)) => self.advance(transition),
                Ok(None) => Task::none(),
                Err(err) => {
                    debug!(%sq, error = %err, "click ignored");
                    Task::none()
                }
            },

            Message::NewGame => {
                self.timer.cancel();
                self.session.reset();
                self.opponent.new_game();
                self.chat.notify_reset();
                info!("new game");
                Task::none()
            }

            Message::FlipBoard => {
                self.flipped = !self.flipped;
                self.chat.notify_flip(self.flipped);
                Task::none()
            }

            Message::OpponentTimer(TimerOutcome::Fired(ticket)) => {
                let transition = self.session.opponent_timer_fired(ticket, &mut self.opponent);
                self.advance(transition)
            }

            Message::OpponentTimer(TimerOutcome::Cancelled(ticket)) => {
                debug!(ticket, "opponent reply cancelled");
                Task::none()
            }

            Message::DraftChanged(draft) => {
                self.draft = draft;
                Task::none()
            }

            Message::SendChat => {
                if self.chat.has_pending() {
                    return Task::none();
                }
                let Some(text) = self.chat.push_user(&self.draft) else {
                    return Task::none();
                };
                self.draft.clear();
                let request =
                    ChatRequest::new(text, self.session.fen(), self.session.analysis());
                self.ask(request, THINKING)
            }

            Message::GetSuggestion => {
                self.tab = Tab::Chat;
                let request = ChatRequest::suggestion(self.session.fen(), self.session.analysis());
                self.ask(request, ANALYZING)
            }

            Message::AssistantReplied(slot, reply) => {
                if !self.chat.resolve(slot, reply.message) {
                    debug!(?slot, "reply for an already resolved entry");
                }
                Task::none()
            }
        }
    }

    /// Carry out whatever a session transition asks for.
    fn advance(&mut self, transition: Transition) -> Task<Message> {
        match transition {
            Transition::ScheduleOpponent { ticket, delay } => {
                Task::perform(self.timer.schedule(ticket, delay), Message::OpponentTimer)
            }
            Transition::Finished(outcome) => {
                info!(result = %outcome.describe(), "game over");
                Task::none()
            }
            Transition::Ready | Transition::Ignored => Task::none(),
        }
    }

    /// Post a placeholder and send the request off in the background.
    fn ask(&mut self, request: ChatRequest, placeholder: &str) -> Task<Message> {
        let slot = self.chat.begin_reply(placeholder);

        let Some(assistant) = self.assistant.clone() else {
            self.chat.resolve(slot, FALLBACK_MESSAGE);
            return Task::none();
        };

        Task::perform(
            async move { assistant.reply(&request).await },
            move |reply| Message::AssistantReplied(slot, reply),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("ChessMaster").size(22),
            container(text("Savage Mode").size(12))
                .padding([2, 8])
                .style(styles::badge(styles::ACCENT)),
            horizontal_space(),
            button(text("Flip Board"))
                .on_press(Message::FlipBoard)
                .style(button::secondary),
            button(text("New Game"))
                .on_press(Message::NewGame)
                .style(button::danger),
        ]
        .spacing(10)
        .padding(10)
        .align_y(iced::Alignment::Center);

        column![header, horizontal_rule(2), self.play_view()].into()
    }

    /// Board on the left, tabbed panel on the right
    fn play_view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.session, self.flipped)
            .view()
            .map(Message::Board);

        let actions = row![
            button(text("Get Suggestion"))
                .on_press(Message::GetSuggestion)
                .style(button::primary),
            button(text("Openings"))
                .on_press(Message::TabSelected(Tab::Openings))
                .style(button::secondary),
            button(text("Chat"))
                .on_press(Message::TabSelected(Tab::Chat))
                .style(button::secondary),
        ]
        .spacing(8);

        let left = column![board, text(self.status()).size(16), actions].spacing(12);

        let tabs = row![
            tab_button("Analysis", Tab::Analysis, self.tab),
            tab_button("Openings", Tab::Openings, self.tab),
            tab_button("Chat", Tab::Chat, self.tab),
        ]
        .spacing(5);

        let analysis = self.session.analysis();
        let content: Element<'_, Message> = match self.tab {
            Tab::Analysis => panels::analysis_panel(&analysis, self.session.history()),
            Tab::Openings => panels::openings_panel(self.session.history()),
            Tab::Chat => panels::chat_panel(&self.chat, &self.draft),
        };

        row![
            left,
            container(column![tabs, content].spacing(10))
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    fn status(&self) -> String {
        match self.session.phase() {
            Phase::Idle => format!("{} to move", self.session.analysis().turn),
            Phase::AwaitingOpponentMove { .. } => "Opponent thinking...".to_string(),
            Phase::GameOver(outcome) => outcome.describe(),
        }
    }
}

/// Create a tab button
fn tab_button(label: &str, tab: Tab, current: Tab) -> Element<'static, Message> {
    let is_active = tab == current;

    button(text(label.to_string()))
        .on_press(Message::TabSelected(tab))
        .style(if is_active {
            button::primary
        } else {
            button::secondary
        })
        .into()
}
