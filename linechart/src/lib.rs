/*!
This crate provides the data model of line charts: the entries of each series,
and the style attributes that a renderer needs to draw a line series, such as
circle markers, dash patterns, cubic curves, filled areas and the breakpoint
line variants. The crate does not draw anything. A rendering engine reads the
attributes of each series during a draw pass.

The project also comes with a command line utility that loads a chart
description from a TOML file and prints the resolved style of every series.

# Style example: configure a series

```rust
    use linechart::core::color::Color;
    use linechart::series::*;

    let entries =
        vec![Entry::new(1., 0), Entry::new(-3., 1), Entry::new(2., 2)];
    let mut line = LineSeriesStyle::with_entries(entries, "temperature");

    // Out of range values are clamped:
    line.set_cubic_intensity(4.0);
    assert_eq!(line.cubic_intensity(), 1.0);

    // Marker colors wrap around:
    line.set_single_marker_color(Color::fast("red"));
    line.add_marker_color(Color::fast("blue"));
    assert_eq!(line.marker_color(3).unwrap(), &Color::fast("blue"));

    line.set_line_style(LineStyleVariant::BreakpointLine);
    line.set_breakpoint_value(0.);
```

# Chart example: load a description and resolve the fill line

```rust
    use linechart::config::ChartConfig;

    let text = r#"
        [[series]]
        label = "a"
        values = [1.0, 4.0, 2.0]
        draw_filled = true
    "#;
    let config = ChartConfig::from_toml_str(text).unwrap();
    let data = config.build().unwrap();

    // The series is above zero, so the fill closes at the bottom of the axis.
    let y = data.fill_line_position(0, -1., 5.).unwrap();
    assert_eq!(y, -1.);
```

*/

pub mod config;
pub mod core;
pub mod series;
