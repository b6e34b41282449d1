//! The container that owns the line series of one chart.

use crate::core::error::{ChartError, ChartResult};
use crate::series::fill::ChartBounds;
use crate::series::line::LineSeriesStyle;

#[derive(Debug, Default, Clone)]
pub struct LineChartData {
    series: Vec<LineSeriesStyle>,
    y_min: f64,
    y_max: f64,
}

impl LineChartData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_series(series: Vec<LineSeriesStyle>) -> Self {
        let mut data = Self {
            series,
            y_min: 0.,
            y_max: 0.,
        };
        data.calc_min_max();
        #[cfg(feature = "log")]
        log::info!(
            "Created chart data with {} series and {} entries.",
            data.series_count(),
            data.entry_count()
        );
        data
    }

    // Series without entries do not contribute to the range.
    fn calc_min_max(&mut self) {
        let mut range: Option<(f64, f64)> = None;
        for s in self.series.iter().map(|s| s.base()) {
            if s.is_empty() {
                continue;
            }
            range = Some(match range {
                None => (s.y_min(), s.y_max()),
                Some((lo, hi)) => (lo.min(s.y_min()), hi.max(s.y_max())),
            });
        }
        let (lo, hi) = range.unwrap_or((0., 0.));
        self.y_min = lo;
        self.y_max = hi;
    }

    /// Recompute the cached ranges after the series were edited in place.
    pub fn notify_data_changed(&mut self) {
        for s in self.series.iter_mut() {
            s.base_mut().calc_min_max();
        }
        self.calc_min_max();
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn add_series(&mut self, series: LineSeriesStyle) {
        self.series.push(series);
        self.calc_min_max();
    }

    pub fn remove_series(&mut self, index: usize) -> Option<LineSeriesStyle> {
        if index >= self.series.len() {
            return None;
        }
        let removed = self.series.remove(index);
        self.calc_min_max();
        Some(removed)
    }

    pub fn series(&self, index: usize) -> Option<&LineSeriesStyle> {
        self.series.get(index)
    }

    /// Call `notify_data_changed` after editing the entries of the series.
    pub fn series_mut(&mut self, index: usize) -> Option<&mut LineSeriesStyle> {
        self.series.get_mut(index)
    }

    pub fn all_series(&self) -> &[LineSeriesStyle] {
        &self.series
    }

    pub fn series_by_label(
        &self,
        label: &str,
        ignore_case: bool,
    ) -> Option<&LineSeriesStyle> {
        self.series.iter().find(|s| {
            if ignore_case {
                s.label().eq_ignore_ascii_case(label)
            } else {
                s.label() == label
            }
        })
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// \returns the number of entries in all of the series.
    pub fn entry_count(&self) -> usize {
        self.series.iter().map(|s| s.base().entry_count()).sum()
    }

    /// \returns the ranges that fill formatters see when the visible y axis
    /// spans [\p axis_min, \p axis_max].
    pub fn bounds(&self, axis_min: f64, axis_max: f64) -> ChartBounds {
        ChartBounds {
            chart_y_min: axis_min,
            chart_y_max: axis_max,
            data_y_min: self.y_min,
            data_y_max: self.y_max,
        }
    }

    /// Run the fill formatter of the series at \p index.
    pub fn fill_line_position(
        &self,
        index: usize,
        axis_min: f64,
        axis_max: f64,
    ) -> ChartResult<f64> {
        let series = self.series.get(index).ok_or_else(|| {
            ChartError::InvalidState(format!(
                "no series at index {} (the chart has {})",
                index,
                self.series.len()
            ))
        })?;
        let bounds = self.bounds(axis_min, axis_max);
        Ok(series
            .fill_formatter()
            .fill_line_position(series, &bounds))
    }
}
