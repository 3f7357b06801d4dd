use std::borrow::Cow;

use crate::core::{Point, Rect, Size};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, TextAttributes, TextHAlign, with_surface_scope};

use super::{alignment_offset, break_text};

/// Height of the box chart-aware labels are drawn into.
pub const CHART_TEXT_BOX_HEIGHT: f64 = 30.0;
/// Gap kept between a label and the chart's left or right edge.
pub const CHART_TEXT_EDGE_PADDING: f64 = 5.0;
/// Horizontal distance from the midline over which adjustments fade in.
pub const CHART_TEXT_FADE_DISTANCE: f64 = 40.0;
/// Vertical nudge away from the horizontal midline at full strength.
pub const CHART_TEXT_VERTICAL_NUDGE: f64 = 10.0;

/// Where a chart-aware label lands and whether it must be wrapped first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTextPlacement {
    pub rect: Rect,
    pub wraps: bool,
}

/// Resolves the label box for text `width` pixels wide anchored at `point`.
///
/// Labels in the left half grow toward the left edge, labels in the right
/// half toward the right edge. Near the vertical midline both shifts fade
/// toward a centered box, and labels are nudged away from the horizontal
/// midline.
#[must_use]
pub fn chart_text_rect(point: Point, width: f64, chart_size: Size) -> ChartTextPlacement {
    let mid_x = chart_size.width / 2.0;
    // Whole pixels, so the fade moves in 1/40 steps.
    let offset_x = (point.x - mid_x).abs().trunc();
    let percent_offset = (offset_x / CHART_TEXT_FADE_DISTANCE).clamp(0.0, 1.0);
    let half_width = width / 2.0;

    let mut x = point.x;
    let wraps = if point.x < mid_x {
        x -= half_width;
        x -= half_width * percent_offset;
        width + CHART_TEXT_EDGE_PADDING > point.x
    } else {
        x -= half_width * (1.0 - percent_offset);
        width + CHART_TEXT_EDGE_PADDING + point.x > chart_size.width
    };

    let nudge = CHART_TEXT_VERTICAL_NUDGE * (1.0 - percent_offset);
    let y = if point.y > chart_size.height / 2.0 {
        point.y + nudge
    } else {
        point.y - nudge
    };

    ChartTextPlacement {
        rect: Rect::new(x, y, width, CHART_TEXT_BOX_HEIGHT),
        wraps,
    }
}

/// Draws `text` anchored at `point`, shifted horizontally for `align`.
///
/// No wrapping and no edge avoidance.
pub fn draw_text<S>(
    surface: &mut S,
    text: &str,
    point: Point,
    align: TextHAlign,
    attributes: &TextAttributes,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let mut origin = point;
    if align != TextHAlign::Left {
        let width = surface.measure_text(text, attributes).width;
        origin.x -= alignment_offset(align, width);
    }

    with_surface_scope(surface, |surface| {
        surface.draw_string_at_point(text, origin, attributes)
    })
}

/// Draws a label around a chart of `chart_size`, wrapping it with
/// [`break_text`] when it would run past the nearest side edge.
///
/// The box keeps the width of the unwrapped text. There is no separate
/// alignment argument: `attributes.alignment` aligns the lines inside the box.
pub fn draw_text_in_chart<S>(
    surface: &mut S,
    text: &str,
    point: Point,
    attributes: &TextAttributes,
    chart_size: Size,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let width = surface.measure_text(text, attributes).width;
    let placement = chart_text_rect(point, width, chart_size);
    let text = if placement.wraps {
        Cow::Owned(break_text(text))
    } else {
        Cow::Borrowed(text)
    };

    with_surface_scope(surface, |surface| {
        surface.draw_string_in_rect(&text, placement.rect, attributes)
    })
}
