use tracing::{debug, trace};

use crate::core::{Point, get_position, normalized_angle_from_angle};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, TextAttributes, TextHAlign};
use crate::text::draw_text_in_chart;

use super::{DeviceScale, RadarAxisConfig, RadarChartGeometry};

/// Share of the half label width kept as the web-to-label gap.
const LABEL_MARGIN_DIVISOR: f64 = 4.0;

/// Resolved position and style of one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialLabelPlacement {
    pub index: usize,
    pub text: String,
    /// Spoke angle in degrees, in `[0, 360)`.
    pub angle: f64,
    /// Point on the spoke just outside the web.
    pub position: Point,
    /// Point handed to the text draw: `position` raised by half the label height.
    pub anchor: Point,
    pub alignment: TextHAlign,
    pub color: Color,
}

/// Draws category labels around the web of a radar chart.
///
/// Axis config and chart geometry are read per call; the renderer only keeps
/// the device scale used to size the label margin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialLabelRenderer {
    device_scale: DeviceScale,
}

impl RadialLabelRenderer {
    #[must_use]
    pub fn new(device_scale: DeviceScale) -> Self {
        Self { device_scale }
    }

    #[must_use]
    pub fn device_scale(&self) -> DeviceScale {
        self.device_scale
    }

    /// Gap between the outer ring of the web and the label anchor.
    #[must_use]
    pub fn label_margin(&self, axis: &RadarAxisConfig) -> f64 {
        axis.label_width / 2.0 / LABEL_MARGIN_DIVISOR * self.device_scale.factor()
    }

    /// Computes placements for every present label, ignoring the axis
    /// enabled flags.
    #[must_use]
    pub fn label_placements(
        &self,
        axis: &RadarAxisConfig,
        geometry: &RadarChartGeometry,
    ) -> Vec<RadialLabelPlacement> {
        let distance = geometry.web_radius() + self.label_margin(axis);
        let mid_x = geometry.view_bounds.width / 2.0;

        axis.labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                let text = label.as_deref()?;
                let angle = normalized_angle_from_angle(
                    geometry.slice_angle * index as f64 + geometry.rotation_angle,
                );
                let position = get_position(geometry.center, distance, angle);
                let alignment = if position.x < mid_x {
                    TextHAlign::Right
                } else if position.x > mid_x {
                    TextHAlign::Left
                } else {
                    TextHAlign::Center
                };

                Some(RadialLabelPlacement {
                    index,
                    text: text.to_owned(),
                    angle,
                    position,
                    anchor: Point::new(position.x, position.y - axis.label_height / 2.0),
                    alignment,
                    color: axis.text_color_at(index),
                })
            })
            .collect()
    }

    /// Draws one label per present category onto `surface`.
    ///
    /// Does nothing when the axis or its labels are disabled. The first
    /// surface error aborts the pass.
    pub fn render_axis_labels<S>(
        &self,
        surface: &mut S,
        axis: &RadarAxisConfig,
        geometry: &RadarChartGeometry,
    ) -> ChartResult<()>
    where
        S: DrawingSurface + ?Sized,
    {
        if !axis.enabled || !axis.draw_labels_enabled {
            debug!(
                enabled = axis.enabled,
                draw_labels = axis.draw_labels_enabled,
                "skip radar axis labels"
            );
            return Ok(());
        }
        geometry.validate()?;

        if !axis.label_text_colors.is_empty() && !axis.has_per_label_colors() {
            debug!(
                labels = axis.labels.len(),
                colors = axis.label_text_colors.len(),
                "label color count differs from label count, using default color"
            );
        }

        let placements = self.label_placements(axis, geometry);
        debug!(
            labels = axis.labels.len(),
            drawn = placements.len(),
            "render radar axis labels"
        );

        for placement in &placements {
            trace!(
                index = placement.index,
                angle = placement.angle,
                x = placement.anchor.x,
                y = placement.anchor.y,
                "draw radar axis label"
            );
            let attributes = TextAttributes::new(
                axis.label_font.clone(),
                placement.color,
                placement.alignment,
            );
            draw_text_in_chart(
                surface,
                &placement.text,
                placement.anchor,
                &attributes,
                geometry.view_bounds,
            )?;
        }

        Ok(())
    }

    /// Radial axes have no limit lines; this pass draws nothing.
    pub fn render_limit_lines<S>(&self, _surface: &mut S) -> ChartResult<()>
    where
        S: DrawingSurface + ?Sized,
    {
        Ok(())
    }
}
