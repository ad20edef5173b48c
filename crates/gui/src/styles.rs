//! Styling constants and theme configuration

use chess_core::{Piece, Side};
use iced::widget::container;
use iced::{Border, Color, Theme};

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.20, 0.25, 0.33); // Slate
pub const DARK_SQUARE: Color = Color::from_rgb(0.12, 0.16, 0.23); // Dark slate
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.45, 0.40, 0.10);
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.92, 0.70, 0.03, 0.3); // Amber overlay
pub const TARGET_DOT: Color = Color::from_rgba(0.92, 0.70, 0.03, 0.6);

// Piece colors
pub const WHITE_PIECE: Color = Color::from_rgb(0.96, 0.96, 0.96);
pub const BLACK_PIECE: Color = Color::from_rgb(0.05, 0.05, 0.05);

// Evaluation bar colors
pub const EVAL_WHITE: Color = Color::from_rgb(0.92, 0.70, 0.03);
pub const EVAL_BLACK: Color = Color::from_rgb(0.15, 0.15, 0.15);

// Accents
pub const ACCENT: Color = Color::from_rgb(0.92, 0.70, 0.03);
pub const MUTED: Color = Color::from_rgb(0.6, 0.6, 0.6);
pub const CHECK_RED: Color = Color::from_rgb(0.94, 0.27, 0.27);

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 420.0;
pub const EVAL_BAR_HEIGHT: f32 = 16.0;

/// Filled glyphs for both sides; the side is told apart by text color.
pub fn piece_char(piece: Piece) -> &'static str {
    match piece {
        Piece::King => "\u{265A}",
        Piece::Queen => "\u{265B}",
        Piece::Rook => "\u{265C}",
        Piece::Bishop => "\u{265D}",
        Piece::Knight => "\u{265E}",
        Piece::Pawn => "\u{265F}",
    }
}

pub fn piece_color(side: Side) -> Color {
    match side {
        Side::White => WHITE_PIECE,
        Side::Black => BLACK_PIECE,
    }
}

/// Small rounded label used for the analysis badges.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(color),
        background: Some(Color { a: 0.12, ..color }.into()),
        border: Border {
            color,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// Card background for panel sections.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb(0.12, 0.13, 0.15).into()),
        border: Border {
            color: Color::from_rgb(0.2, 0.2, 0.22),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Blend two colors together
pub fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
