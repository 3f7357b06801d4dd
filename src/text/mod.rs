//! Text placement, wrapping and multiline layout on a [`DrawingSurface`].
//!
//! [`DrawingSurface`]: crate::render::DrawingSurface

mod multiline;
mod placement;
mod wrap;

pub use multiline::{draw_multiline_text, draw_multiline_text_with_size};
pub use placement::{
    CHART_TEXT_BOX_HEIGHT, CHART_TEXT_EDGE_PADDING, CHART_TEXT_FADE_DISTANCE,
    CHART_TEXT_VERTICAL_NUDGE, ChartTextPlacement, chart_text_rect, draw_text, draw_text_in_chart,
};
pub use wrap::break_text;

use crate::render::TextHAlign;

/// Horizontal shift applied to an anchor so `width`-wide text honors `align`.
pub(crate) fn alignment_offset(align: TextHAlign, width: f64) -> f64 {
    match align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => width / 2.0,
        TextHAlign::Right => width,
    }
}
