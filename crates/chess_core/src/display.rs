//! Evaluation bar encoding: a fill percentage and a caption.

use crate::advantage::AdvantageLabel;
use crate::material::MaterialTotals;
use serde::Serialize;

/// Material difference (in pawns) at which the bar saturates.
pub const SATURATION_DIFFERENCE: f64 = 10.0;
pub const MIN_PERCENTAGE: f64 = 5.0;
pub const MAX_PERCENTAGE: f64 = 95.0;

const EQUAL_CAPTION: &str = "Equal position";

/// What the evaluation bar shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayEncoding {
    /// White's share of the bar, in `[5, 95]`.
    pub percentage: f64,
    pub caption: String,
}

/// Bar fill for a signed material difference (white minus black).
///
/// NaN reads as an equal position; infinities saturate. Only an exact zero
/// centres the bar, but differences too small to move it off 50.0 also land
/// there while the caption still names a side. Material differences are whole
/// pawns, so this only affects fractional callers of [`encode_display`].
pub fn bar_percentage(difference: f64) -> f64 {
    if difference.is_nan() || difference == 0.0 {
        return 50.0;
    }
    let percentage = 50.0 + difference * (50.0 / SATURATION_DIFFERENCE);
    percentage.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE)
}

/// Encodes a signed material difference for the evaluation bar.
pub fn encode_display(difference: f64) -> DisplayEncoding {
    let caption = if difference.is_nan() || difference == 0.0 {
        EQUAL_CAPTION.to_string()
    } else if difference > 0.0 {
        advantage_caption(AdvantageLabel::White, difference)
    } else {
        advantage_caption(AdvantageLabel::Black, -difference)
    };
    DisplayEncoding {
        percentage: bar_percentage(difference),
        caption,
    }
}

/// Encoding whose caption follows an already-classified label.
///
/// The bar still tracks the raw material difference, so a label of `Equal`
/// can sit next to a slightly off-centre bar. A side label the material does
/// not back (the check tie-break) falls back to the material caption.
pub fn encode_for_label(label: AdvantageLabel, totals: MaterialTotals) -> DisplayEncoding {
    let difference = totals.difference();
    let backed = match label {
        AdvantageLabel::Equal => true,
        AdvantageLabel::White => difference > 0,
        AdvantageLabel::Black => difference < 0,
    };
    if !backed {
        return encode_display(f64::from(difference));
    }

    let caption = match label {
        AdvantageLabel::Equal => EQUAL_CAPTION.to_string(),
        side => advantage_caption(side, f64::from(difference.abs())),
    };
    DisplayEncoding {
        percentage: bar_percentage(f64::from(difference)),
        caption,
    }
}

fn advantage_caption(label: AdvantageLabel, lead: f64) -> String {
    let side = match label {
        AdvantageLabel::Black => "Black",
        _ => "White",
    };
    format!("{side} advantage (+{lead:.1})")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;
