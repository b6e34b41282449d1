//! Computes the line that closes the filled area under a series.

use crate::series::line::LineSeriesStyle;

/// The ranges that the chart exposes to fill formatters.
pub trait FillDataProvider {
    /// The lowest value of the visible y axis.
    fn chart_y_min(&self) -> f64;
    /// The highest value of the visible y axis.
    fn chart_y_max(&self) -> f64;
    /// The lowest y value of all series in the chart.
    fn data_y_min(&self) -> f64;
    /// The highest y value of all series in the chart.
    fn data_y_max(&self) -> f64;
}

/// This is the trait that custom fill formatters need to implement.
pub trait FillFormatter {
    /// \returns the y value where the filled area of \p series ends.
    fn fill_line_position(
        &self,
        series: &LineSeriesStyle,
        provider: &dyn FillDataProvider,
    ) -> f64;
}

/// Fills towards zero when zero is visible, and towards the chart edge that
/// is closest to the data otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFillFormatter;

impl DefaultFillFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl FillFormatter for DefaultFillFormatter {
    fn fill_line_position(
        &self,
        series: &LineSeriesStyle,
        provider: &dyn FillDataProvider,
    ) -> f64 {
        let base = series.base();
        if base.y_max() > 0. && base.y_min() < 0. {
            return 0.;
        }

        let max = if provider.data_y_max() > 0. {
            0.
        } else {
            provider.chart_y_max()
        };
        let min = if provider.data_y_min() < 0. {
            0.
        } else {
            provider.chart_y_min()
        };

        if base.y_min() >= 0. {
            min
        } else {
            max
        }
    }
}

/// A fixed set of ranges, for callers that already know the axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub chart_y_min: f64,
    pub chart_y_max: f64,
    pub data_y_min: f64,
    pub data_y_max: f64,
}

impl FillDataProvider for ChartBounds {
    fn chart_y_min(&self) -> f64 {
        self.chart_y_min
    }
    fn chart_y_max(&self) -> f64 {
        self.chart_y_max
    }
    fn data_y_min(&self) -> f64 {
        self.data_y_min
    }
    fn data_y_max(&self) -> f64 {
        self.data_y_max
    }
}
