//! Side panel views: analysis, openings and chat

use crate::app::Message;
use crate::styles::{self, EVAL_BAR_HEIGHT};
use chess_core::{matching_openings, AdvantageLabel, MoveRecord, PositionAnalysis, Side, OPENINGS};
use game_session::{ChatLog, Role};
use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, text_input, Column,
};
use iced::{Color, Element, Length};

fn badge(label: &'static str, color: Color) -> Element<'static, Message> {
    container(text(label).size(12))
        .padding([2, 8])
        .style(styles::badge(color))
        .into()
}

fn heading(label: &'static str) -> Element<'static, Message> {
    text(label).size(18).into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(styles::card)
        .into()
}

/// Two-sided bar: the white share grows with White's material lead.
pub fn eval_bar(analysis: &PositionAnalysis) -> Element<'static, Message> {
    let encoding = analysis.bar();
    let white = (encoding.percentage * 10.0).round() as u16;
    let black = 1000u16.saturating_sub(white);

    let segment = |portion: u16, color: Color| {
        container(text(""))
            .width(Length::FillPortion(portion))
            .height(EVAL_BAR_HEIGHT)
            .style(move |_theme| container::Style {
                background: Some(color.into()),
                ..Default::default()
            })
    };

    column![
        row![
            text("Black").size(12).color(styles::MUTED),
            horizontal_space(),
            text("White").size(12).color(styles::MUTED),
        ],
        row![
            segment(black, styles::EVAL_BLACK),
            segment(white, styles::EVAL_WHITE)
        ],
        container(text(encoding.caption).size(12).color(styles::MUTED)).center_x(Length::Fill),
    ]
    .spacing(4)
    .into()
}

pub fn analysis_panel<'a>(
    analysis: &PositionAnalysis,
    history: &'a [MoveRecord],
) -> Element<'a, Message> {
    let flags = &analysis.flags;
    let mut badges = row![].spacing(6);
    if flags.check {
        badges = badges.push(badge("Check", styles::CHECK_RED));
    }
    if flags.checkmate {
        badges = badges.push(badge("Checkmate", Color::from_rgb(0.66, 0.33, 0.97)));
    }
    if flags.draw {
        badges = badges.push(badge("Draw", Color::from_rgb(0.23, 0.51, 0.96)));
    }
    if flags.stalemate {
        badges = badges.push(badge("Stalemate", styles::ACCENT));
    }
    badges = badges.push(match analysis.turn {
        Side::White => badge("White to move", styles::WHITE_PIECE),
        Side::Black => badge("Black to move", styles::MUTED),
    });

    let advantage = match analysis.advantage {
        AdvantageLabel::Equal => badge("Equal", Color::from_rgb(0.23, 0.51, 0.96)),
        AdvantageLabel::White => badge("White Advantage", styles::WHITE_PIECE),
        AdvantageLabel::Black => badge("Black Advantage", styles::MUTED),
    };
    let totals = [Side::White, Side::Black]
        .into_iter()
        .fold(row![].spacing(16), |line, side| {
            line.push(text(format!("{side}: {}", analysis.material.for_side(side))))
        });
    let material = card(column![
        text("Material Balance").size(15),
        row![totals, horizontal_space(), advantage].align_y(iced::Alignment::Center),
        text(analysis.balance().caption).size(13).color(styles::MUTED),
    ]
    .spacing(8));

    let verdict = card(column![
        text("Position Evaluation").size(15),
        text(analysis.verdict()).size(14).color(styles::MUTED),
    ]
    .spacing(8));

    column![
        heading("Position Evaluation"),
        eval_bar(analysis),
        heading("Game Analysis"),
        badges.wrap(),
        material,
        verdict,
        heading("Move History"),
        move_history(history),
    ]
    .spacing(10)
    .into()
}

fn move_history(history: &[MoveRecord]) -> Element<'_, Message> {
    if history.is_empty() {
        return card(
            text("No moves played yet. Make a move to start the game.")
                .size(13)
                .color(styles::MUTED),
        );
    }

    let moves = history
        .iter()
        .enumerate()
        .fold(Column::new().spacing(2), |list, (ply, entry)| {
            let color = match entry.side {
                Side::White => styles::WHITE_PIECE,
                Side::Black => styles::MUTED,
            };
            list.push(row![
                text(format!("{}.", ply / 2 + 1)).size(12).color(styles::MUTED).width(32),
                text(entry.to_string()).size(13).color(color),
            ])
        });

    scrollable(moves).height(200).into()
}

pub fn openings_panel(history: &[MoveRecord]) -> Element<'_, Message> {
    let played: Vec<&str> = history.iter().map(|m| m.san.as_str()).collect();
    let on_board = matching_openings(&played);

    let list = OPENINGS.iter().fold(Column::new().spacing(8), |list, opening| {
        let in_play = on_board.iter().any(|o| o.name == opening.name);
        let mut title = row![text(opening.name).size(15).color(styles::ACCENT)].spacing(8);
        if in_play {
            title = title.push(badge("On the board", styles::ACCENT));
        }
        list.push(card(column![
            title,
            text(format!("{} - {}", opening.line(), opening.description))
                .size(13)
                .color(styles::MUTED),
        ]
        .spacing(4)))
    });

    column![heading("Popular Openings"), list].spacing(10).into()
}

pub fn chat_panel<'a>(chat: &'a ChatLog, draft: &'a str) -> Element<'a, Message> {
    let entries = chat
        .entries()
        .iter()
        .fold(Column::new().spacing(10), |list, entry| {
            let (who, color) = match entry.role {
                Role::Assistant => ("ChessMaster", styles::ACCENT),
                Role::User => ("You", Color::from_rgb(0.51, 0.55, 0.97)),
            };
            let body = if entry.pending {
                text(format!("\u{231B} {}", entry.content)).color(styles::MUTED)
            } else {
                text(entry.content.as_str())
            };
            let bubble = card(column![text(who).size(12).color(color), body.size(14)].spacing(4));
            let line = match entry.role {
                Role::Assistant => row![container(bubble).max_width(340), horizontal_space()],
                Role::User => row![horizontal_space(), container(bubble).max_width(340)],
            };
            list.push(line)
        });

    let input = text_input("Ask for advice or trash talk the AI...", draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::SendChat)
        .padding(8);

    column![
        scrollable(entries).height(Length::Fill),
        row![
            input,
            button(text("Send"))
                .on_press_maybe((!chat.has_pending()).then_some(Message::SendChat))
                .style(button::primary),
        ]
        .spacing(8),
    ]
    .spacing(10)
    .height(520)
    .into()
}
