use tracing::warn;

use crate::core::{Point, Rect, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, TextAttributes};

const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.6;
const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.2;

/// One draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    TextAtPoint {
        text: String,
        point: Point,
        attributes: TextAttributes,
    },
    TextInRect {
        text: String,
        rect: Rect,
        attributes: TextAttributes,
    },
}

impl SurfaceCommand {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::TextAtPoint { text, .. } | Self::TextInRect { text, .. } => text,
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &TextAttributes {
        match self {
            Self::TextAtPoint { attributes, .. } | Self::TextInRect { attributes, .. } => {
                attributes
            }
        }
    }

    /// Anchor point for point draws, rect origin for rect draws.
    #[must_use]
    pub fn origin(&self) -> Point {
        match self {
            Self::TextAtPoint { point, .. } => *point,
            Self::TextInRect { rect, .. } => rect.origin,
        }
    }
}

/// Headless surface used by tests and hosts without a real backend.
///
/// Text is measured with a fixed per-character advance, so layouts are
/// deterministic. Draw calls outside a pushed context are rejected.
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    depth: usize,
    max_depth: usize,
    push_count: usize,
    char_width_ratio: f64,
    line_height_ratio: f64,
    fail_draws: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            depth: 0,
            max_depth: 0,
            push_count: 0,
            char_width_ratio: DEFAULT_CHAR_WIDTH_RATIO,
            line_height_ratio: DEFAULT_LINE_HEIGHT_RATIO,
            fail_draws: false,
        }
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance of one character as a fraction of the font size.
    #[must_use]
    pub fn with_char_width_ratio(mut self, ratio: f64) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    /// Makes every draw call fail with `ChartError::Surface`.
    #[must_use]
    pub fn failing_draws(mut self) -> Self {
        self.fail_draws = true;
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<SurfaceCommand> {
        self.commands
    }

    /// Current push depth; zero once every scope has been released.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn push_count(&self) -> usize {
        self.push_count
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn char_width(&self, attributes: &TextAttributes) -> f64 {
        attributes.font.size_px * self.char_width_ratio
    }

    fn line_height(&self, attributes: &TextAttributes) -> f64 {
        attributes.font.size_px * self.line_height_ratio
    }

    fn check_draw(&self, point: Point, attributes: &TextAttributes) -> ChartResult<()> {
        if self.depth == 0 {
            return Err(ChartError::Surface(
                "draw issued outside of a pushed context".to_owned(),
            ));
        }
        if self.fail_draws {
            return Err(ChartError::Surface("recording surface draw failure".to_owned()));
        }
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        attributes.font.validate()?;
        attributes.color.validate()
    }
}

impl DrawingSurface for RecordingSurface {
    fn push_context(&mut self) -> ChartResult<()> {
        self.depth += 1;
        self.push_count += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(())
    }

    fn pop_context(&mut self) {
        if self.depth == 0 {
            warn!("pop_context without a matching push");
            return;
        }
        self.depth -= 1;
    }

    fn measure_text(&self, text: &str, attributes: &TextAttributes) -> Size {
        let char_width = self.char_width(attributes);
        let (longest, lines) = text
            .split('\n')
            .fold((0_usize, 0_usize), |(longest, lines), line| {
                (longest.max(line.chars().count()), lines + 1)
            });
        Size::new(
            longest as f64 * char_width,
            lines as f64 * self.line_height(attributes),
        )
    }

    fn measure_text_constrained(
        &self,
        text: &str,
        attributes: &TextAttributes,
        constraint: Size,
    ) -> Size {
        let char_width = self.char_width(attributes);
        let max_width = if constraint.width.is_finite() && constraint.width > 0.0 {
            constraint.width
        } else {
            f64::INFINITY
        };

        let mut widest = 0.0_f64;
        let mut lines = 0_usize;
        for paragraph in text.split('\n') {
            let mut line_width = 0.0_f64;
            lines += 1;
            for word in paragraph.split_whitespace() {
                let word_width = word.chars().count() as f64 * char_width;
                let candidate = if line_width > 0.0 {
                    line_width + char_width + word_width
                } else {
                    word_width
                };
                if line_width > 0.0 && candidate > max_width {
                    widest = widest.max(line_width);
                    lines += 1;
                    line_width = word_width;
                } else {
                    line_width = candidate;
                }
            }
            widest = widest.max(line_width);
        }

        let mut height = lines as f64 * self.line_height(attributes);
        if constraint.height.is_finite() && constraint.height > 0.0 {
            height = height.min(constraint.height);
        }
        Size::new(widest.min(max_width), height)
    }

    fn draw_string_at_point(
        &mut self,
        text: &str,
        point: Point,
        attributes: &TextAttributes,
    ) -> ChartResult<()> {
        self.check_draw(point, attributes)?;
        self.commands.push(SurfaceCommand::TextAtPoint {
            text: text.to_owned(),
            point,
            attributes: attributes.clone(),
        });
        Ok(())
    }

    fn draw_string_in_rect(
        &mut self,
        text: &str,
        rect: Rect,
        attributes: &TextAttributes,
    ) -> ChartResult<()> {
        self.check_draw(rect.origin, attributes)?;
        if !rect.size.is_valid() {
            return Err(ChartError::InvalidData(
                "text rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.commands.push(SurfaceCommand::TextInRect {
            text: text.to_owned(),
            rect,
            attributes: attributes.clone(),
        });
        Ok(())
    }
}
