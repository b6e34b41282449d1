//! Loads chart descriptions from TOML files and builds the chart data.
//!
//! Every series key except `values` is optional:
//!
//! ```toml
//! [[series]]
//! label = "temperature"
//! values = [1.0, 4.0, -2.0]
//! circle_colors = ["#8ceaff", "red"]
//! line_style = "breakpoint-line"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::color::Color;
use crate::core::error::{ChartError, ChartResult};
use crate::series::base::{AxisDependency, DEFAULT_LABEL};
use crate::series::entry::entries_from_values;
use crate::series::{LineChartData, LineSeriesStyle, LineStyleVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyleConfig {
    NormalStraightLine,
    BreakpointLine,
    SolidAndDottedLine,
}

impl From<LineStyleConfig> for LineStyleVariant {
    fn from(c: LineStyleConfig) -> Self {
        match c {
            LineStyleConfig::NormalStraightLine => {
                LineStyleVariant::NormalStraightLine
            }
            LineStyleConfig::BreakpointLine => LineStyleVariant::BreakpointLine,
            LineStyleConfig::SolidAndDottedLine => {
                LineStyleVariant::SolidAndDottedLine
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisConfig {
    Left,
    Right,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    pub label: Option<String>,
    pub values: Vec<f64>,
    pub colors: Option<Vec<String>>,
    pub visible: Option<bool>,
    pub value_text_color: Option<String>,
    pub draw_values: Option<bool>,
    pub highlight: Option<bool>,
    pub axis: Option<AxisConfig>,
    pub circle_colors: Option<Vec<String>>,
    pub circle_hole_color: Option<String>,
    pub circle_radius: Option<f64>,
    pub cubic_intensity: Option<f64>,
    pub line_width: Option<f64>,
    pub line_dash_phase: Option<f64>,
    pub line_dash_lengths: Option<Vec<f64>>,
    pub draw_circles: Option<bool>,
    pub draw_cubic: Option<bool>,
    pub draw_circle_hole: Option<bool>,
    pub draw_filled: Option<bool>,
    pub fill_color: Option<String>,
    pub fill_alpha: Option<f64>,
    pub line_style: Option<LineStyleConfig>,
    pub breakpoint_value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

fn parse_color(s: &str) -> ChartResult<Color> {
    Color::parse(s).ok_or_else(|| {
        ChartError::InvalidConfig(format!("unknown color \"{}\"", s))
    })
}

fn parse_colors(list: &[String]) -> ChartResult<Vec<Color>> {
    list.iter().map(|s| parse_color(s)).collect()
}

impl SeriesConfig {
    /// Build the series that this section describes.
    pub fn build(&self) -> ChartResult<LineSeriesStyle> {
        let label = self.label.as_deref().unwrap_or(DEFAULT_LABEL);
        let entries = entries_from_values(&self.values);
        let mut s = LineSeriesStyle::with_entries(entries, label);

        if let Some(colors) = &self.colors {
            s.base_mut().set_colors(parse_colors(colors)?);
        }
        if let Some(visible) = self.visible {
            s.base_mut().visible = visible;
        }
        if let Some(c) = &self.value_text_color {
            s.base_mut().value_text_color = parse_color(c)?;
        }
        if let Some(b) = self.draw_values {
            s.base_mut().draw_values_enabled = b;
        }
        if let Some(b) = self.highlight {
            s.base_mut().highlight_enabled = b;
        }
        if let Some(axis) = self.axis {
            s.base_mut().axis_dependency = match axis {
                AxisConfig::Left => AxisDependency::Left,
                AxisConfig::Right => AxisDependency::Right,
            };
        }
        if let Some(colors) = &self.circle_colors {
            if colors.is_empty() {
                return Err(ChartError::InvalidConfig(format!(
                    "series \"{}\" has an empty circle_colors list",
                    label
                )));
            }
            s.set_marker_colors(parse_colors(colors)?);
        }
        if let Some(c) = &self.circle_hole_color {
            s.circle_hole_color = parse_color(c)?;
        }
        if let Some(r) = self.circle_radius {
            s.set_circle_radius(r);
        }
        if let Some(v) = self.cubic_intensity {
            s.set_cubic_intensity(v);
        }
        if let Some(w) = self.line_width {
            s.set_line_width(w);
        }
        if let Some(p) = self.line_dash_phase {
            s.line_dash_phase = p;
        }
        if let Some(lengths) = &self.line_dash_lengths {
            s.line_dash_lengths = Some(lengths.clone());
        }
        if let Some(b) = self.draw_circles {
            s.draw_circles_enabled = b;
        }
        if let Some(b) = self.draw_cubic {
            s.draw_cubic_enabled = b;
        }
        if let Some(b) = self.draw_circle_hole {
            s.draw_circle_hole_enabled = b;
        }
        if let Some(b) = self.draw_filled {
            s.draw_filled_enabled = b;
        }
        if let Some(c) = &self.fill_color {
            s.fill_color = parse_color(c)?;
        }
        if let Some(a) = self.fill_alpha {
            s.set_fill_alpha(a);
        }
        if let Some(style) = self.line_style {
            s.set_line_style(style.into());
        }
        if let Some(v) = self.breakpoint_value {
            s.set_breakpoint_value(v);
        }
        Ok(s)
    }
}

impl ChartConfig {
    pub fn from_toml_str(content: &str) -> ChartResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> ChartResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        #[cfg(feature = "log")]
        log::info!(
            "Loaded {} series from {}",
            config.series.len(),
            path.display()
        );
        Ok(config)
    }

    /// Build the chart data for all of the series in the config.
    pub fn build(&self) -> ChartResult<LineChartData> {
        let series = self
            .series
            .iter()
            .map(|s| s.build())
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(LineChartData::from_series(series))
    }
}
