//! A collection of methods for printing chart data in a readable form.

use std::fmt::Write;

use crate::core::color::Color;
use crate::series::chart_data::LineChartData;
use crate::series::line::LineSeriesStyle;

fn color_list(colors: &[Color]) -> String {
    let names: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
    format!("[{}]", names.join(", "))
}

fn print_series(
    out: &mut String,
    s: &LineSeriesStyle,
    fill_line: Option<f64>,
    indent: usize,
) {
    let pad = " ".repeat(indent);
    let base = s.base();
    let _ = writeln!(out, "{}Series: {}", pad, base.label);
    let pad = " ".repeat(indent + 1);
    let _ = writeln!(
        out,
        "{}entries: {} y: [{}, {}]",
        pad,
        base.entry_count(),
        base.y_min(),
        base.y_max()
    );
    let _ = writeln!(out, "{}colors: {}", pad, color_list(base.colors()));
    let _ = writeln!(
        out,
        "{}visible: {} values: {} value color: {} highlight: {} axis: {:?}",
        pad,
        base.visible,
        base.draw_values_enabled,
        base.value_text_color,
        base.highlight_enabled,
        base.axis_dependency
    );
    let _ = writeln!(
        out,
        "{}circles: {} radius: {} hole: {} hole color: {}",
        pad,
        s.is_draw_circles_enabled(),
        s.circle_radius(),
        s.is_draw_circle_hole_enabled(),
        s.circle_hole_color
    );
    let _ = writeln!(
        out,
        "{}marker colors: {}",
        pad,
        color_list(s.marker_colors())
    );
    let _ = writeln!(
        out,
        "{}cubic: {} intensity: {}",
        pad,
        s.is_draw_cubic_enabled(),
        s.cubic_intensity()
    );
    let _ = writeln!(out, "{}line width: {}", pad, s.line_width());
    if let Some(lengths) = &s.line_dash_lengths {
        let _ = writeln!(
            out,
            "{}dash: {:?} phase: {}",
            pad, lengths, s.line_dash_phase
        );
    }
    let _ = writeln!(
        out,
        "{}style: {:?} breakpoint: {}",
        pad,
        s.line_style(),
        s.breakpoint_value()
    );
    let _ = writeln!(
        out,
        "{}filled: {} fill color: {} alpha: {}",
        pad,
        s.draw_filled_enabled,
        s.fill_color,
        s.fill_alpha()
    );
    if let Some(y) = fill_line {
        let _ = writeln!(out, "{}fill line: {}", pad, y);
    }
}

/// \returns a textual description of every series in \p data. The fill
/// line is resolved against the y axis range [\p axis_min, \p axis_max].
pub fn dump_chart(
    data: &LineChartData,
    axis_min: f64,
    axis_max: f64,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Chart: {} series, y: [{}, {}]",
        data.series_count(),
        data.y_min(),
        data.y_max()
    );
    for (i, s) in data.all_series().iter().enumerate() {
        let fill_line = data.fill_line_position(i, axis_min, axis_max).ok();
        print_series(&mut out, s, fill_line, 1);
    }
    out
}
