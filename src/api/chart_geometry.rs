use serde::{Deserialize, Serialize};

use crate::core::{Point, Size};
use crate::error::{ChartError, ChartResult};

/// Width of the screen radar label margins were tuned on.
pub const REFERENCE_SCREEN_WIDTH: f64 = 414.0;

/// Per-frame geometry of a radar chart, read by the label pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarChartGeometry {
    /// Web center in view coordinates.
    pub center: Point,
    /// Degrees between neighboring spokes, usually `360 / category_count`.
    pub slice_angle: f64,
    /// Whole-chart rotation in degrees.
    pub rotation_angle: f64,
    /// Pixels per y-axis data unit.
    pub factor: f64,
    /// Y-axis span mapped onto the web radius.
    pub y_range: f64,
    pub view_bounds: Size,
}

impl RadarChartGeometry {
    /// Geometry for `category_count` spokes centered in `view_bounds`.
    #[must_use]
    pub fn centered(view_bounds: Size, category_count: usize) -> Self {
        let slice_angle = if category_count == 0 {
            0.0
        } else {
            360.0 / category_count as f64
        };
        Self {
            center: Point::new(view_bounds.width / 2.0, view_bounds.height / 2.0),
            slice_angle,
            rotation_angle: 0.0,
            factor: 1.0,
            y_range: 0.0,
            view_bounds,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_angle: f64) -> Self {
        self.rotation_angle = rotation_angle;
        self
    }

    #[must_use]
    pub fn with_radial_scale(mut self, y_range: f64, factor: f64) -> Self {
        self.y_range = y_range;
        self.factor = factor;
        self
    }

    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Distance from the center to the outer ring of the web.
    #[must_use]
    pub fn web_radius(&self) -> f64 {
        self.y_range * self.factor
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidGeometry(
                "center must be finite".to_owned(),
            ));
        }
        for (name, value) in [
            ("slice_angle", self.slice_angle),
            ("rotation_angle", self.rotation_angle),
            ("factor", self.factor),
            ("y_range", self.y_range),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidGeometry(format!(
                    "`{name}` must be finite"
                )));
            }
        }
        if !self.view_bounds.is_valid() {
            return Err(ChartError::InvalidGeometry(format!(
                "view bounds must be finite and >= 0: width={}, height={}",
                self.view_bounds.width, self.view_bounds.height
            )));
        }
        Ok(())
    }
}

/// Scales design-time margins to the actual device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceScale {
    pub screen_width: f64,
    pub reference_width: f64,
}

impl DeviceScale {
    #[must_use]
    pub const fn from_screen_width(screen_width: f64) -> Self {
        Self {
            screen_width,
            reference_width: REFERENCE_SCREEN_WIDTH,
        }
    }

    /// `screen_width / reference_width`; 1.0 when either width is unusable.
    #[must_use]
    pub fn factor(&self) -> f64 {
        let usable = self.screen_width.is_finite()
            && self.reference_width.is_finite()
            && self.screen_width > 0.0
            && self.reference_width > 0.0;
        if usable {
            self.screen_width / self.reference_width
        } else {
            1.0
        }
    }
}

impl Default for DeviceScale {
    fn default() -> Self {
        Self::from_screen_width(REFERENCE_SCREEN_WIDTH)
    }
}
