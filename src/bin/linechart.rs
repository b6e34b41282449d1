//! This is the command line tool that loads chart descriptions, builds the
//! series and prints the resolved style of every series.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, Command};
use linechart::config::ChartConfig;
use linechart::core::error::ChartResult;
use linechart::core::utils::save_to_file;
use linechart::series::dump_chart;
use std::path::Path;
use std::process;

struct CLIOptions {
    input_path: String,
    output_path: Option<String>,
    axis_min: Option<f64>,
    axis_max: Option<f64>,
}

fn run(options: &CLIOptions) -> ChartResult<()> {
    let config = ChartConfig::load(Path::new(&options.input_path))?;
    let data = config.build()?;

    // Without an explicit axis range, the axis spans the data.
    let axis_min = options.axis_min.unwrap_or_else(|| data.y_min());
    let axis_max = options.axis_max.unwrap_or_else(|| data.y_max());
    let content = dump_chart(&data, axis_min, axis_max);

    match &options.output_path {
        Some(path) => save_to_file(path, &content)?,
        None => print!("{}", content),
    }
    Ok(())
}

fn main() {
    let matches = Command::new("linechart")
        .version("1.x")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enables debug logging"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file"),
        )
        .arg(
            Arg::new("axis-min")
                .long("axis-min")
                .value_name("Y")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Lowest value of the visible y axis"),
        )
        .arg(
            Arg::new("axis-max")
                .long("axis-max")
                .value_name("Y")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Highest value of the visible y axis"),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the chart description to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(level)
        .init();

    let options = CLIOptions {
        input_path: matches
            .get_one::<String>("INPUT")
            .cloned()
            .unwrap_or_default(),
        output_path: matches.get_one::<String>("output").cloned(),
        axis_min: matches.get_one::<f64>("axis-min").copied(),
        axis_max: matches.get_one::<f64>("axis-max").copied(),
    };

    if let Err(err) = run(&options) {
        log::error!("Could not process {}", options.input_path);
        log::error!("Error: {}", err);
        process::exit(1);
    }
}
