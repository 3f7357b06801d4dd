use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontDescriptor};

/// Category axis of a radar chart: one label per spoke.
///
/// This type is serializable so host applications can persist/load axis
/// styling without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarAxisConfig {
    /// Label per category; `None` entries leave their spoke unlabeled.
    pub labels: Vec<Option<String>>,
    pub enabled: bool,
    pub draw_labels_enabled: bool,
    pub label_font: FontDescriptor,
    pub label_text_color: Color,
    /// Per-label colors, honored only when parallel to `labels`.
    pub label_text_colors: Vec<Color>,
    /// Nominal label box size; the width drives the gap between web and label.
    pub label_width: f64,
    pub label_height: f64,
}

impl Default for RadarAxisConfig {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            enabled: true,
            draw_labels_enabled: true,
            label_font: FontDescriptor::default(),
            label_text_color: Color::BLACK,
            label_text_colors: Vec::new(),
            label_width: 20.0,
            label_height: 10.0,
        }
    }
}

impl RadarAxisConfig {
    #[must_use]
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(|label| Some(label.into())).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_optional_labels(mut self, labels: Vec<Option<String>>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_labels(mut self, draw_labels_enabled: bool) -> Self {
        self.draw_labels_enabled = draw_labels_enabled;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.label_font = font;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.label_text_color = color;
        self
    }

    #[must_use]
    pub fn with_text_colors(mut self, colors: Vec<Color>) -> Self {
        self.label_text_colors = colors;
        self
    }

    #[must_use]
    pub fn with_label_size(mut self, width: f64, height: f64) -> Self {
        self.label_width = width;
        self.label_height = height;
        self
    }

    /// Color for the label at `index`.
    ///
    /// Falls back to `label_text_color` unless there is exactly one color per
    /// label.
    #[must_use]
    pub fn text_color_at(&self, index: usize) -> Color {
        if self.has_per_label_colors() {
            self.label_text_colors
                .get(index)
                .copied()
                .unwrap_or(self.label_text_color)
        } else {
            self.label_text_color
        }
    }

    #[must_use]
    pub fn has_per_label_colors(&self) -> bool {
        self.label_text_colors.len() == self.labels.len()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.label_font
            .validate()
            .map_err(|err| ChartError::InvalidConfig(format!("label font: {err}")))?;
        for color in std::iter::once(&self.label_text_color).chain(&self.label_text_colors) {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("label color: {err}")))?;
        }
        for (name, value) in [
            ("label_width", self.label_width),
            ("label_height", self.label_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON axis description.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse axis config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidConfig(format!("failed to serialize axis config: {err}"))
        })
    }
}
