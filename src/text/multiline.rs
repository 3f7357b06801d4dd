use crate::core::{Point, Rect, Size};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, TextAttributes, TextHAlign, with_surface_scope};

use super::alignment_offset;

/// Draws `text` into a `known_size` rect anchored at `point`.
///
/// `align` shifts the rect: center by half its width, right by its full width.
pub fn draw_multiline_text_with_size<S>(
    surface: &mut S,
    text: &str,
    known_size: Size,
    point: Point,
    align: TextHAlign,
    attributes: &TextAttributes,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let mut rect = Rect::from_origin_size(point, known_size);
    rect.origin.x -= alignment_offset(align, known_size.width);

    with_surface_scope(surface, |surface| {
        surface.draw_string_in_rect(text, rect, attributes)
    })
}

/// Measures `text` wrapped within `constrained_to`, then draws it like
/// [`draw_multiline_text_with_size`].
pub fn draw_multiline_text<S>(
    surface: &mut S,
    text: &str,
    point: Point,
    align: TextHAlign,
    attributes: &TextAttributes,
    constrained_to: Size,
) -> ChartResult<()>
where
    S: DrawingSurface + ?Sized,
{
    let size = surface.measure_text_constrained(text, attributes, constrained_to);
    draw_multiline_text_with_size(surface, text, size, point, align, attributes)
}
