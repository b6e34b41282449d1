//! The style of a single line series: circle markers, dash pattern, cubic
//! curves, the filled area and the custom line variants. The renderer reads
//! these attributes while drawing and never changes them.

use std::fmt;
use std::rc::Rc;

use crate::core::color::Color;
use crate::core::error::{ChartError, ChartResult};
use crate::core::utils::wrap_index;
use crate::series::base::{Series, DEFAULT_LABEL};
use crate::series::entry::Entry;
use crate::series::fill::{DefaultFillFormatter, FillFormatter};

pub const MIN_CUBIC_INTENSITY: f64 = 0.05;
pub const MAX_CUBIC_INTENSITY: f64 = 1.0;
pub const MIN_LINE_WIDTH: f64 = 0.2;
pub const MAX_LINE_WIDTH: f64 = 10.0;

/// The way the segments between the points of a series are drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineStyleVariant {
    /// All points are connected by one continuous line.
    #[default]
    NormalStraightLine,
    /// The line is interrupted at points that match the breakpoint value.
    BreakpointLine,
    /// Solid and dotted segments alternate, split at the breakpoint value.
    SolidAndDottedLine,
}

#[derive(Clone)]
pub struct LineSeriesStyle {
    base: Series,
    circle_colors: Vec<Color>,
    pub circle_hole_color: Color,
    circle_radius: f64,
    cubic_intensity: f64,
    pub line_dash_phase: f64,
    pub line_dash_lengths: Option<Vec<f64>>,
    fill_formatter: Rc<dyn FillFormatter>,
    pub draw_circles_enabled: bool,
    pub draw_cubic_enabled: bool,
    pub draw_circle_hole_enabled: bool,
    line_style: LineStyleVariant,
    breakpoint_value: f64,
    // Attributes of the filled area under the line.
    pub fill_color: Color,
    fill_alpha: f64,
    line_width: f64,
    pub draw_filled_enabled: bool,
}

impl Default for LineSeriesStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSeriesStyle {
    /// Create an empty series with the default label.
    pub fn new() -> Self {
        Self::from_series(Series::new(Vec::new(), DEFAULT_LABEL))
    }

    /// Create a series that plots \p entries under the name \p label.
    pub fn with_entries(entries: Vec<Entry>, label: &str) -> Self {
        Self::from_series(Series::new(entries, label))
    }

    fn from_series(base: Series) -> Self {
        Self {
            base,
            circle_colors: vec![Color::series_default()],
            circle_hole_color: Color::white(),
            circle_radius: 8.0,
            cubic_intensity: 0.2,
            line_dash_phase: 0.0,
            line_dash_lengths: None,
            fill_formatter: Rc::new(DefaultFillFormatter::new()),
            draw_circles_enabled: true,
            draw_cubic_enabled: false,
            draw_circle_hole_enabled: true,
            line_style: LineStyleVariant::NormalStraightLine,
            breakpoint_value: 0.0,
            fill_color: Color::series_default(),
            fill_alpha: 0.33,
            line_width: 1.0,
            draw_filled_enabled: false,
        }
    }

    pub fn base(&self) -> &Series {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Series {
        &mut self.base
    }

    pub fn label(&self) -> &str {
        &self.base.label
    }

    pub fn cubic_intensity(&self) -> f64 {
        self.cubic_intensity
    }

    /// Set the intensity of the cubic curves. Values outside of [0.05, 1]
    /// are moved to the closest bound, and NaN becomes the lower bound.
    pub fn set_cubic_intensity(&mut self, intensity: f64) {
        let clamped = if intensity.is_nan() {
            MIN_CUBIC_INTENSITY
        } else {
            intensity.clamp(MIN_CUBIC_INTENSITY, MAX_CUBIC_INTENSITY)
        };
        #[cfg(feature = "log")]
        if clamped != intensity {
            log::debug!("Cubic intensity {} clamped to {}", intensity, clamped);
        }
        self.cubic_intensity = clamped;
    }

    pub fn circle_radius(&self) -> f64 {
        self.circle_radius
    }

    /// Set the radius of the circle markers. Negative radii become zero.
    pub fn set_circle_radius(&mut self, radius: f64) {
        self.circle_radius = if radius > 0. { radius } else { 0. };
    }

    pub fn marker_colors(&self) -> &[Color] {
        &self.circle_colors
    }

    /// \returns the marker color for the point at \p index. The index wraps
    /// around the color list, so any index selects a color. Fails if the
    /// color list was reset and nothing was added since.
    pub fn marker_color(&self, index: isize) -> ChartResult<&Color> {
        if self.circle_colors.is_empty() {
            return Err(ChartError::InvalidState(format!(
                "series \"{}\" has no marker colors",
                self.base.label
            )));
        }
        let idx = wrap_index(index, self.circle_colors.len());
        Ok(&self.circle_colors[idx])
    }

    /// Make \p color the one and only marker color of the series.
    pub fn set_single_marker_color(&mut self, color: Color) {
        self.circle_colors.clear();
        self.circle_colors.push(color);
    }

    pub fn set_marker_colors(&mut self, colors: Vec<Color>) {
        self.circle_colors = colors;
    }

    pub fn add_marker_color(&mut self, color: Color) {
        self.circle_colors.push(color);
    }

    /// Remove all marker colors. A color must be added before the next
    /// call to `marker_color`.
    pub fn reset_marker_colors(&mut self) {
        self.circle_colors.clear();
    }

    pub fn fill_formatter(&self) -> Rc<dyn FillFormatter> {
        self.fill_formatter.clone()
    }

    /// Install a custom fill formatter, or the default one for None.
    pub fn set_fill_formatter(
        &mut self,
        formatter: Option<Rc<dyn FillFormatter>>,
    ) {
        self.fill_formatter = match formatter {
            Some(f) => f,
            None => Rc::new(DefaultFillFormatter::new()),
        };
    }

    pub fn breakpoint_value(&self) -> f64 {
        self.breakpoint_value
    }

    pub fn set_breakpoint_value(&mut self, value: f64) {
        self.breakpoint_value = value;
    }

    pub fn line_style(&self) -> LineStyleVariant {
        self.line_style
    }

    pub fn set_line_style(&mut self, style: LineStyleVariant) {
        self.line_style = style;
    }

    pub fn fill_alpha(&self) -> f64 {
        self.fill_alpha
    }

    pub fn set_fill_alpha(&mut self, alpha: f64) {
        self.fill_alpha = if alpha.is_nan() { 0. } else { alpha.clamp(0., 1.) };
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Set the width of the line, limited to [0.2, 10].
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = if width.is_nan() {
            MIN_LINE_WIDTH
        } else {
            width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH)
        };
    }

    pub fn is_draw_circles_enabled(&self) -> bool {
        self.draw_circles_enabled
    }

    pub fn is_draw_cubic_enabled(&self) -> bool {
        self.draw_cubic_enabled
    }

    pub fn is_draw_circle_hole_enabled(&self) -> bool {
        self.draw_circle_hole_enabled
    }

    /// \returns true if the line is drawn with a dash pattern.
    pub fn is_dashed(&self) -> bool {
        matches!(&self.line_dash_lengths, Some(l) if !l.is_empty())
    }

    /// Create an independent copy of the series. The entries, colors and
    /// dash lengths are copied; the fill formatter is shared because it is
    /// never changed through the style.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl fmt::Debug for LineSeriesStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LineSeriesStyle")
            .field("base", &self.base)
            .field("circle_colors", &self.circle_colors)
            .field("circle_hole_color", &self.circle_hole_color)
            .field("circle_radius", &self.circle_radius)
            .field("cubic_intensity", &self.cubic_intensity)
            .field("line_dash_phase", &self.line_dash_phase)
            .field("line_dash_lengths", &self.line_dash_lengths)
            .field("draw_circles_enabled", &self.draw_circles_enabled)
            .field("draw_cubic_enabled", &self.draw_cubic_enabled)
            .field("draw_circle_hole_enabled", &self.draw_circle_hole_enabled)
            .field("line_style", &self.line_style)
            .field("breakpoint_value", &self.breakpoint_value)
            .field("fill_color", &self.fill_color)
            .field("fill_alpha", &self.fill_alpha)
            .field("line_width", &self.line_width)
            .field("draw_filled_enabled", &self.draw_filled_enabled)
            .finish()
    }
}
