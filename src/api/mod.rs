mod axis_config;
mod chart_geometry;
mod radial_label_renderer;

pub use axis_config::RadarAxisConfig;
pub use chart_geometry::{DeviceScale, REFERENCE_SCREEN_WIDTH, RadarChartGeometry};
pub use radial_label_renderer::{RadialLabelPlacement, RadialLabelRenderer};
