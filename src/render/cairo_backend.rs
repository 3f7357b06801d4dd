use cairo::Context;
use pango::{Alignment, FontDescription, Layout, WrapMode};
use tracing::warn;

use crate::core::{Point, Rect, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextAttributes, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub texts_drawn: usize,
    pub pushes: usize,
}

/// Cairo + Pango + PangoCairo drawing surface over a borrowed context.
///
/// The context can come from an offscreen `ImageSurface` or from a GTK
/// `DrawingArea` draw callback. `push_context`/`pop_context` map to
/// `save`/`restore`.
#[derive(Debug)]
pub struct CairoSurface<'a> {
    context: &'a Context,
    stats: CairoSurfaceStats,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            stats: CairoSurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    fn layout(&self, text: &str, attributes: &TextAttributes) -> Layout {
        let layout = pangocairo::functions::create_layout(self.context);
        let mut font_description = FontDescription::from_string(&attributes.font.family);
        font_description.set_absolute_size(attributes.font.size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font_description));
        layout.set_alignment(pango_alignment(attributes.alignment));
        layout.set_text(text);
        layout
    }

    fn show(&mut self, layout: &Layout, origin: Point, color: Color) -> ChartResult<()> {
        color.validate()?;
        if !origin.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        apply_color(self.context, color);
        self.context.move_to(origin.x, origin.y);
        pangocairo::functions::show_layout(self.context, layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn push_context(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.stats.pushes += 1;
        Ok(())
    }

    fn pop_context(&mut self) {
        if let Err(err) = self.context.restore() {
            warn!(error = %err, "failed to restore cairo state");
        }
    }

    fn measure_text(&self, text: &str, attributes: &TextAttributes) -> Size {
        let (width, height) = self.layout(text, attributes).pixel_size();
        Size::new(f64::from(width), f64::from(height))
    }

    fn measure_text_constrained(
        &self,
        text: &str,
        attributes: &TextAttributes,
        constraint: Size,
    ) -> Size {
        let layout = self.layout(text, attributes);
        constrain_layout(&layout, constraint);
        let (width, height) = layout.pixel_size();
        Size::new(f64::from(width), f64::from(height))
    }

    fn draw_string_at_point(
        &mut self,
        text: &str,
        point: Point,
        attributes: &TextAttributes,
    ) -> ChartResult<()> {
        let layout = self.layout(text, attributes);
        self.show(&layout, point, attributes.color)
    }

    fn draw_string_in_rect(
        &mut self,
        text: &str,
        rect: Rect,
        attributes: &TextAttributes,
    ) -> ChartResult<()> {
        if !rect.size.is_valid() {
            return Err(ChartError::InvalidData(
                "text rect size must be finite and >= 0".to_owned(),
            ));
        }
        let layout = self.layout(text, attributes);
        constrain_layout(&layout, rect.size);
        self.show(&layout, rect.origin, attributes.color)
    }
}

fn constrain_layout(layout: &Layout, constraint: Size) {
    if constraint.width.is_finite() && constraint.width > 0.0 {
        layout.set_width(to_pango_units(constraint.width));
        layout.set_wrap(WrapMode::Word);
    }
    if constraint.height.is_finite() && constraint.height > 0.0 {
        layout.set_height(to_pango_units(constraint.height));
    }
}

fn to_pango_units(pixels: f64) -> i32 {
    (pixels * f64::from(pango::SCALE)).round() as i32
}

fn pango_alignment(alignment: TextHAlign) -> Alignment {
    match alignment {
        TextHAlign::Left => Alignment::Left,
        TextHAlign::Center => Alignment::Center,
        TextHAlign::Right => Alignment::Right,
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Surface(format!("{prefix}: {err}"))
}
