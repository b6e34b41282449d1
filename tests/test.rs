use linechart::core::color::Color;

#[cfg(test)]
mod tests {

    use super::*;
    use linechart::config::ChartConfig;
    use linechart::core::error::ChartError;
    use linechart::core::utils::save_to_file;
    use linechart::series::entry::entries_from_values;
    use linechart::series::*;
    use std::rc::Rc;

    fn sample_series(values: &[f64], label: &str) -> LineSeriesStyle {
        LineSeriesStyle::with_entries(entries_from_values(values), label)
    }

    struct ConstantFill(f64);

    impl FillFormatter for ConstantFill {
        fn fill_line_position(
            &self,
            _series: &LineSeriesStyle,
            _provider: &dyn FillDataProvider,
        ) -> f64 {
            self.0
        }
    }

    #[test]
    fn default_series() {
        let s = LineSeriesStyle::new();
        assert_eq!(s.marker_colors().len(), 1);
        assert_eq!(s.marker_colors()[0], Color::from_rgb8(140, 234, 255, 1.));
        assert_eq!(s.cubic_intensity(), 0.2);
        assert_eq!(s.circle_radius(), 8.0);
        assert_eq!(s.circle_hole_color, Color::white());
        assert_eq!(s.line_dash_phase, 0.0);
        assert!(s.line_dash_lengths.is_none());
        assert!(s.is_draw_circles_enabled());
        assert!(!s.is_draw_cubic_enabled());
        assert!(s.is_draw_circle_hole_enabled());
        assert_eq!(s.line_style(), LineStyleVariant::NormalStraightLine);
        assert_eq!(s.breakpoint_value(), 0.0);
        assert_eq!(s.label(), "DataSet");
    }

    #[test]
    fn series_with_entries_is_seeded() {
        let s = sample_series(&[1., 2., 3.], "abc");
        assert_eq!(s.label(), "abc");
        assert_eq!(s.base().entry_count(), 3);
        assert_eq!(s.marker_colors().len(), 1);
    }

    #[test]
    fn seeded_color_channels() {
        let c = Color::series_default();
        assert_eq!(c.r, 140. / 255.);
        assert_eq!(c.g, 234. / 255.);
        assert_eq!(c.b, 1.);
        assert_eq!(c.a, 1.);
        assert_eq!(c.to_rgb8(), (140, 234, 255));
    }

    #[test]
    fn cubic_intensity_is_clamped() {
        let mut s = LineSeriesStyle::new();
        for v in [0.049, 0., -1., -1e9, f64::NEG_INFINITY] {
            s.set_cubic_intensity(v);
            assert_eq!(s.cubic_intensity(), 0.05);
        }
        for v in [1.0001, 2., 1e9, f64::INFINITY] {
            s.set_cubic_intensity(v);
            assert_eq!(s.cubic_intensity(), 1.0);
        }
        for v in [0.05, 0.2, 0.5, 0.999, 1.0] {
            s.set_cubic_intensity(v);
            assert_eq!(s.cubic_intensity(), v);
        }
        s.set_cubic_intensity(f64::NAN);
        assert_eq!(s.cubic_intensity(), 0.05);
    }

    #[test]
    fn single_marker_color() {
        let mut s = LineSeriesStyle::new();
        s.add_marker_color(Color::fast("olive"));
        let red = Color::fast("red");
        s.set_single_marker_color(red);
        assert_eq!(s.marker_colors().len(), 1);
        assert_eq!(s.marker_color(0).unwrap(), &red);
    }

    #[test]
    fn marker_color_wraps() {
        let mut s = LineSeriesStyle::new();
        s.set_marker_colors(vec![
            Color::fast("red"),
            Color::fast("green"),
            Color::fast("blue"),
        ]);
        let n = s.marker_colors().len() as isize;
        for i in 0..20 {
            assert_eq!(
                s.marker_color(i).unwrap(),
                s.marker_color(i % n).unwrap()
            );
        }
        assert_eq!(s.marker_color(4).unwrap(), &Color::fast("green"));
        // Negative indices count back from the end.
        assert_eq!(s.marker_color(-1).unwrap(), &Color::fast("blue"));
        assert_eq!(s.marker_color(-3).unwrap(), &Color::fast("red"));
        assert_eq!(
            s.marker_color(isize::MIN).unwrap(),
            s.marker_color(isize::MIN.rem_euclid(3)).unwrap()
        );
    }

    #[test]
    fn reset_marker_colors() {
        let mut s = LineSeriesStyle::new();
        s.reset_marker_colors();
        assert!(s.marker_colors().is_empty());
        assert!(matches!(s.marker_color(0), Err(ChartError::InvalidState(_))));
        assert!(matches!(s.marker_color(7), Err(ChartError::InvalidState(_))));

        s.add_marker_color(Color::fast("pink"));
        assert_eq!(s.marker_color(5).unwrap(), &Color::fast("pink"));
    }

    #[test]
    fn fill_formatter_default() {
        let mut s = sample_series(&[1., 2.], "a");
        let custom: Rc<dyn FillFormatter> = Rc::new(ConstantFill(42.));
        s.set_fill_formatter(Some(custom.clone()));
        assert!(Rc::ptr_eq(&s.fill_formatter(), &custom));

        s.set_fill_formatter(None);
        let installed = s.fill_formatter();
        assert!(!Rc::ptr_eq(&installed, &custom));

        let bounds = ChartBounds {
            chart_y_min: -5.,
            chart_y_max: 5.,
            data_y_min: 1.,
            data_y_max: 2.,
        };
        assert_eq!(installed.fill_line_position(&s, &bounds), -5.);
    }

    #[test]
    fn default_fill_line_position() {
        let f = DefaultFillFormatter::new();
        let bounds = |dmin, dmax| ChartBounds {
            chart_y_min: -10.,
            chart_y_max: 10.,
            data_y_min: dmin,
            data_y_max: dmax,
        };

        // The series crosses zero.
        let s = sample_series(&[-1., 1.], "a");
        assert_eq!(f.fill_line_position(&s, &bounds(-1., 1.)), 0.);

        // All positive: fill to the bottom of the axis.
        let s = sample_series(&[1., 3.], "a");
        assert_eq!(f.fill_line_position(&s, &bounds(1., 3.)), -10.);

        // All positive, but another series goes below zero.
        assert_eq!(f.fill_line_position(&s, &bounds(-4., 3.)), 0.);

        // All negative: fill to the top of the axis.
        let s = sample_series(&[-1., -3.], "a");
        assert_eq!(f.fill_line_position(&s, &bounds(-3., -1.)), 10.);

        // All negative, but another series goes above zero.
        assert_eq!(f.fill_line_position(&s, &bounds(-3., 6.)), 0.);
    }

    #[test]
    fn breakpoint_and_line_style() {
        let mut s = LineSeriesStyle::new();
        s.set_breakpoint_value(0.0);
        assert_eq!(s.breakpoint_value(), 0.0);
        s.set_breakpoint_value(-2.5);
        assert_eq!(s.breakpoint_value(), -2.5);

        s.set_line_style(LineStyleVariant::BreakpointLine);
        assert_eq!(s.line_style(), LineStyleVariant::BreakpointLine);
        s.set_line_style(LineStyleVariant::SolidAndDottedLine);
        assert_eq!(s.line_style(), LineStyleVariant::SolidAndDottedLine);
    }

    #[test]
    fn duplicate_is_independent() {
        let mut s = sample_series(&[1., 5., 2.], "orig");
        s.set_marker_colors(vec![Color::fast("red"), Color::fast("blue")]);
        s.set_cubic_intensity(0.7);
        s.set_circle_radius(3.);
        s.line_dash_phase = 1.5;
        s.line_dash_lengths = Some(vec![4., 2.]);
        s.draw_circles_enabled = false;
        s.draw_cubic_enabled = true;
        s.draw_circle_hole_enabled = false;
        s.circle_hole_color = Color::fast("black");
        s.set_line_style(LineStyleVariant::SolidAndDottedLine);
        s.set_breakpoint_value(3.);

        let mut copy = s.duplicate();
        assert_eq!(copy.label(), "orig");
        assert_eq!(copy.marker_colors(), s.marker_colors());
        assert_eq!(copy.cubic_intensity(), 0.7);
        assert_eq!(copy.circle_radius(), 3.);
        assert_eq!(copy.line_dash_phase, 1.5);
        assert_eq!(copy.line_dash_lengths, Some(vec![4., 2.]));
        assert!(!copy.is_draw_circles_enabled());
        assert!(copy.is_draw_cubic_enabled());
        assert!(!copy.is_draw_circle_hole_enabled());
        assert_eq!(copy.circle_hole_color, Color::fast("black"));
        assert_eq!(copy.line_style(), LineStyleVariant::SolidAndDottedLine);
        assert_eq!(copy.breakpoint_value(), 3.);
        assert_eq!(copy.base().entries(), s.base().entries());

        copy.set_single_marker_color(Color::fast("green"));
        copy.add_marker_color(Color::fast("pink"));
        if let Some(l) = copy.line_dash_lengths.as_mut() {
            l.push(9.);
        }
        copy.base_mut().add_entry(Entry::new(100., 9));

        assert_eq!(s.marker_colors().len(), 2);
        assert_eq!(s.marker_color(0).unwrap(), &Color::fast("red"));
        assert_eq!(s.line_dash_lengths, Some(vec![4., 2.]));
        assert_eq!(s.base().entry_count(), 3);
        assert_eq!(s.base().y_max(), 5.);
    }

    #[test]
    fn sanitized_setters() {
        let mut s = LineSeriesStyle::new();
        s.set_circle_radius(-4.);
        assert_eq!(s.circle_radius(), 0.);
        s.set_line_width(0.);
        assert_eq!(s.line_width(), 0.2);
        s.set_line_width(20.);
        assert_eq!(s.line_width(), 10.);
        s.set_fill_alpha(1.5);
        assert_eq!(s.fill_alpha(), 1.);
        s.set_fill_alpha(-1.);
        assert_eq!(s.fill_alpha(), 0.);
    }

    #[test]
    fn dash_pattern() {
        let mut s = LineSeriesStyle::new();
        assert!(!s.is_dashed());
        s.line_dash_lengths = Some(Vec::new());
        assert!(!s.is_dashed());
        s.line_dash_lengths = Some(vec![2., 2.]);
        assert!(s.is_dashed());
    }

    #[test]
    fn series_entries() {
        let entries =
            vec![Entry::new(3., 4), Entry::new(-1., 0), Entry::new(7., 2)];
        let mut s = Series::new(entries, "s");
        assert_eq!(s.y_min(), -1.);
        assert_eq!(s.y_max(), 7.);
        assert_eq!(s.entries()[0].x_index, 0);
        assert_eq!(s.y_value_for_x_index(2), Some(7.));
        assert_eq!(s.y_value_for_x_index(3), None);
        assert_eq!(s.entry_index(&Entry::new(3., 4)), Some(2));

        s.add_entry(Entry::new(10., 3));
        assert_eq!(s.entries()[2], Entry::new(10., 3));
        assert_eq!(s.y_max(), 10.);

        assert!(s.remove_entry_at_x_index(3));
        assert!(!s.remove_entry_at_x_index(3));
        assert_eq!(s.y_max(), 7.);
        assert_eq!(s.y_value_sum(), 9.);
        assert_eq!(s.average(), 3.);

        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.y_min(), 0.);
        assert_eq!(s.y_max(), 0.);
        assert_eq!(s.average(), 0.);
    }

    #[test]
    fn series_colors() {
        let mut s = Series::default();
        assert_eq!(s.colors().len(), 1);
        s.set_color(Color::fast("red"));
        s.add_color(Color::fast("blue"));
        assert_eq!(s.color(3).unwrap(), &Color::fast("blue"));
        s.reset_colors();
        assert!(matches!(s.color(0), Err(ChartError::InvalidState(_))));
    }

    #[test]
    fn chart_data_container() {
        let mut data = LineChartData::new();
        assert_eq!(data.y_min(), 0.);
        assert_eq!(data.y_max(), 0.);

        data.add_series(sample_series(&[1., 2.], "Alpha"));
        data.add_series(sample_series(&[-3., 0.5], "beta"));
        data.add_series(LineSeriesStyle::new());
        assert_eq!(data.series_count(), 3);
        assert_eq!(data.entry_count(), 4);
        assert_eq!(data.y_min(), -3.);
        assert_eq!(data.y_max(), 2.);

        assert!(data.series_by_label("alpha", false).is_none());
        assert!(data.series_by_label("alpha", true).is_some());

        let removed = data.remove_series(1).unwrap();
        assert_eq!(removed.label(), "beta");
        assert!(data.remove_series(5).is_none());
        assert_eq!(data.y_min(), 1.);

        if let Some(s) = data.series_mut(0) {
            s.base_mut().add_entry(Entry::new(-8., 2));
        }
        data.notify_data_changed();
        assert_eq!(data.y_min(), -8.);
    }

    #[test]
    fn chart_fill_line_position() {
        let mut data = LineChartData::from_series(vec![
            sample_series(&[1., 2.], "a"),
            sample_series(&[3., 4.], "b"),
        ]);
        assert_eq!(data.fill_line_position(0, -2., 6.).unwrap(), -2.);

        if let Some(s) = data.series_mut(1) {
            s.set_fill_formatter(Some(Rc::new(ConstantFill(1.5))));
        }
        assert_eq!(data.fill_line_position(1, -2., 6.).unwrap(), 1.5);
        assert!(matches!(
            data.fill_line_position(2, -2., 6.),
            Err(ChartError::InvalidState(_))
        ));
    }

    #[test]
    fn parse_colors() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::fast("red")));
        assert_eq!(Color::parse("#8ceaff"), Some(Color::series_default()));
        let c = Color::parse("#00000080").unwrap();
        assert_eq!(c.a, 128. / 255.);
        assert_eq!(c.to_hex(), "#00000080");
        assert_eq!(Color::white().to_hex(), "#ffffff");
        assert!(Color::parse("#12345").is_none());
        assert!(Color::parse("#gg0000").is_none());
        assert!(Color::parse("#+f+f+f").is_none());
        assert!(Color::parse("#+1+2+3+4").is_none());
        assert!(Color::parse("nocolor").is_none());
        assert_eq!(Color::fast("nocolor"), Color::black());
    }

    #[test]
    fn load_config() {
        let text = r##"
            [[series]]
            label = "temperature"
            values = [1.0, 4.0, -2.0]
            circle_colors = ["#8ceaff", "red"]
            circle_radius = 4.0
            cubic_intensity = 3.0
            draw_cubic = true
            line_dash_lengths = [4.0, 2.0]
            line_style = "breakpoint-line"
            breakpoint_value = 1.0
            fill_alpha = 0.5
            axis = "right"

            [[series]]
            values = []
        "##;
        let config = ChartConfig::from_toml_str(text).unwrap();
        let data = config.build().unwrap();
        assert_eq!(data.series_count(), 2);
        assert_eq!(data.y_min(), -2.);
        assert_eq!(data.y_max(), 4.);

        let s = data.series_by_label("temperature", false).unwrap();
        assert_eq!(s.marker_colors().len(), 2);
        assert_eq!(s.marker_color(1).unwrap(), &Color::fast("red"));
        assert_eq!(s.circle_radius(), 4.);
        assert_eq!(s.cubic_intensity(), 1.);
        assert!(s.is_draw_cubic_enabled());
        assert!(s.is_dashed());
        assert_eq!(s.line_style(), LineStyleVariant::BreakpointLine);
        assert_eq!(s.breakpoint_value(), 1.);
        assert_eq!(s.fill_alpha(), 0.5);
        assert_eq!(s.base().axis_dependency, AxisDependency::Right);

        let d = data.series(1).unwrap();
        assert_eq!(d.label(), "DataSet");
        assert_eq!(d.marker_colors().len(), 1);
    }

    #[test]
    fn bad_config() {
        let unknown_color =
            "[[series]]\nvalues = [1.0]\ncircle_colors = [\"nocolor\"]\n";
        let config = ChartConfig::from_toml_str(unknown_color).unwrap();
        assert!(matches!(config.build(), Err(ChartError::InvalidConfig(_))));

        let signed_digits =
            "[[series]]\nvalues = [1.0]\ncircle_colors = [\"#+1+2+3\"]\n";
        let config = ChartConfig::from_toml_str(signed_digits).unwrap();
        assert!(matches!(config.build(), Err(ChartError::InvalidConfig(_))));

        let empty_colors = "[[series]]\nvalues = [1.0]\ncircle_colors = []\n";
        let config = ChartConfig::from_toml_str(empty_colors).unwrap();
        assert!(matches!(config.build(), Err(ChartError::InvalidConfig(_))));

        let missing_values = "[[series]]\nlabel = \"x\"\n";
        assert!(matches!(
            ChartConfig::from_toml_str(missing_values),
            Err(ChartError::Toml(_))
        ));

        let bad_style = "[[series]]\nvalues = [1.0]\nline_style = \"zigzag\"\n";
        assert!(ChartConfig::from_toml_str(bad_style).is_err());
    }

    #[test]
    fn dump_chart_output() {
        let mut s = sample_series(&[1., 2.], "first");
        s.line_dash_lengths = Some(vec![3., 1.]);
        let data = LineChartData::from_series(vec![s]);
        let text = dump_chart(&data, 0., 4.);
        assert!(text.starts_with("Chart: 1 series"));
        assert!(text.contains("Series: first"));
        assert!(text.contains("marker colors: [#8ceaff]"));
        assert!(text.contains("dash: [3.0, 1.0]"));
        assert!(text.contains("fill line: 0"));
        assert!(text.contains(
            "visible: true values: true value color: #000000 highlight: true"
        ));
    }

    #[test]
    fn value_attributes_from_config() {
        let text = r##"
            [[series]]
            values = [2.0]
            value_text_color = "#ff0000"
            draw_values = false
            highlight = false
        "##;
        let data = ChartConfig::from_toml_str(text).unwrap().build().unwrap();
        let base = data.series(0).unwrap().base();
        assert_eq!(base.value_text_color, Color::fast("red"));
        assert!(!base.draw_values_enabled);
        assert!(!base.highlight_enabled);

        let dump = dump_chart(&data, 0., 2.);
        assert!(dump.contains("values: false value color: #ff0000"));
        assert!(dump.contains("highlight: false"));
    }

    #[test]
    fn load_and_save_files() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let input = dir.join(format!("linechart_in_{}.toml", pid));
        let output = dir.join(format!("linechart_out_{}.txt", pid));

        let text = "[[series]]\nlabel = \"disk\"\nvalues = [1.0, 3.0]\n";
        std::fs::write(&input, text).unwrap();
        let data = ChartConfig::load(&input).unwrap().build().unwrap();
        let s = data.series_by_label("disk", false).unwrap();
        assert_eq!(s.base().entry_count(), 2);
        assert_eq!(data.y_max(), 3.);

        let dump = dump_chart(&data, 0., 3.);
        let out_path = output.to_str().unwrap();
        save_to_file(out_path, &dump).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), dump);

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        let missing = dir.join(format!("linechart_missing_{}.toml", pid));
        assert!(matches!(
            ChartConfig::load(&missing),
            Err(ChartError::Io(_))
        ));
    }
}
