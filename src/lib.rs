//! radar-chart-rs: radial axis labels and shared chart layout helpers.
//!
//! The crate covers the label pass of a radar chart (placing one category
//! label per spoke around the web) together with the geometry, text-layout
//! and axis-number helpers chart renderers share. Series models, the full
//! render pipeline and input handling belong to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod text;

pub use api::{RadarAxisConfig, RadarChartGeometry, RadialLabelRenderer};
pub use error::{ChartError, ChartResult};
