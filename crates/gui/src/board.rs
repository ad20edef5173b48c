//! Chess board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use chess_core::{Side, Square};
use game_session::GameSession;
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(Square),
}

/// Renders the chess board
pub struct BoardView<'a> {
    session: &'a GameSession,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a GameSession, flipped: bool) -> Self {
        Self { session, flipped }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for rank in 0..8 {
            let display_rank = if self.flipped { rank } else { 7 - rank };
            let mut rank_row = row![].spacing(0);

            for file in 0..8 {
                let display_file = if self.flipped { 7 - file } else { file };
                let sq = Square::index(display_rank * 8 + display_file);
                rank_row = rank_row.push(self.render_square(sq, display_rank, display_file));
            }

            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: Square, rank: usize, file: usize) -> Element<'a, BoardMessage> {
        // a1 is dark
        let is_light = (rank + file) % 2 == 1;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        if self.session.selected() == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        if let Some((from, to)) = self.session.last_move() {
            if sq == from || sq == to {
                bg_color = styles::blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let board = self.session.board();
        let piece = board
            .piece_on(sq)
            .zip(board.color_on(sq))
            .map(|(piece, color)| (styles::piece_char(piece), Side::from(color)));
        let is_target = self.session.targets().contains(&sq);

        let content: Element<'a, BoardMessage> = match piece {
            Some((glyph, side)) => text(glyph)
                .size(SQUARE_SIZE * 0.75)
                .color(styles::piece_color(side))
                .center()
                .into(),
            None if is_target => text("\u{25CF}")
                .size(SQUARE_SIZE * 0.3)
                .color(styles::TARGET_DOT)
                .center()
                .into(),
            None => text("").into(),
        };

        // Captures onto an occupied square get a ring instead of a dot.
        let ring = if is_target && piece.is_some() {
            iced::Border {
                color: styles::TARGET_DOT,
                width: 3.0,
                radius: (SQUARE_SIZE / 2.0).into(),
            }
        } else {
            iced::Border::default()
        };

        button(
            container(content)
                .width(SQUARE_SIZE)
                .height(SQUARE_SIZE)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(SQUARE_SIZE)
        .height(SQUARE_SIZE)
        .padding(0)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                button::Status::Active | button::Status::Disabled => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    styles::blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: ring,
                text_color: Color::WHITE,
                ..Default::default()
            }
        })
        .on_press_maybe(
            self.session
                .is_user_turn()
                .then_some(BoardMessage::SquareClicked(sq)),
        )
        .into()
    }
}
