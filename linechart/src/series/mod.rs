//! The line series model: entries, the shared series state, the line style,
//! fill formatters and the chart container that owns the series.

pub mod base;
pub mod chart_data;
pub mod entry;
pub mod fill;
pub mod line;
pub mod printer;

pub use base::{AxisDependency, Series};
pub use chart_data::LineChartData;
pub use entry::Entry;
pub use fill::{
    ChartBounds, DefaultFillFormatter, FillDataProvider, FillFormatter,
};
pub use line::{LineSeriesStyle, LineStyleVariant};
pub use printer::dump_chart;
