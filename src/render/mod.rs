mod primitives;
mod recording_surface;
mod surface_scope;

pub use primitives::{Color, FontDescriptor, TextAttributes, TextHAlign};
pub use recording_surface::{RecordingSurface, SurfaceCommand};
pub use surface_scope::{SurfaceScope, with_surface_scope};

use crate::core::{Point, Rect, Size};
use crate::error::ChartResult;

/// Capability contract implemented by every drawing backend.
///
/// Text helpers only draw between `push_context` and `pop_context`; use
/// [`SurfaceScope`] rather than calling the pair by hand.
pub trait DrawingSurface {
    /// Makes this surface the current drawing context.
    fn push_context(&mut self) -> ChartResult<()>;

    /// Restores the context that was current before the matching push.
    fn pop_context(&mut self);

    /// Rendered size of `text` on a single unconstrained layout.
    fn measure_text(&self, text: &str, attributes: &TextAttributes) -> Size;

    /// Rendered size of `text` when wrapped to fit within `constraint`.
    fn measure_text_constrained(
        &self,
        text: &str,
        attributes: &TextAttributes,
        constraint: Size,
    ) -> Size;

    /// Draws `text` with its top-left corner at `point`.
    fn draw_string_at_point(
        &mut self,
        text: &str,
        point: Point,
        attributes: &TextAttributes,
    ) -> ChartResult<()>;

    /// Draws `text` inside `rect`, honoring `attributes.alignment`.
    fn draw_string_in_rect(
        &mut self,
        text: &str,
        rect: Rect,
        attributes: &TextAttributes,
    ) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
